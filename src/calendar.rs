//! Calendar date to continuous day count.

use chrono::Datelike;

/// Days elapsed since 2000 Jan 0.0 UT (1999-12-31 0h UT) for a proleptic
/// Gregorian date, so 2000-01-01 is day 1.
///
/// Integer divisions truncate toward zero. Exact from March 1900 to
/// February 2100. Out-of-range months or days are not rejected; they give
/// a finite but meaningless count.
pub fn days_since_2000(year: i32, month: u32, day: u32) -> f64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    (367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - 730530) as f64
}

/// [`days_since_2000`] for any chrono date or datetime. Only the calendar
/// fields are used; the time of day is ignored.
pub fn days_since_2000_for<D: Datelike>(date: &D) -> f64 {
    days_since_2000(date.year(), date.month(), date.day())
}
