//! Whole-day summary across every band, for JSON output and the terminal.
//!
//! Rise and set are `None` whenever the Sun does not cross the band's
//! altitude; placeholder times are never reported.

use crate::band::Band;
use crate::error::{Error, Result};
use crate::riseset::SunriseStatus;
use crate::twilight;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

/// Observer position in degrees, east longitude positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Validated constructor. The ephemeris functions themselves accept any
    /// value.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BandReport {
    pub band: Band,
    pub status: SunriseStatus,
    pub rise: Option<DateTime<FixedOffset>>,
    pub set: Option<DateTime<FixedOffset>>,
    pub length_hours: f64,
    /// `HH:MM:SS`
    pub length: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub location: GeoCoordinate,
    pub timezone: String,
    pub solar_noon: DateTime<FixedOffset>,
    pub bands: Vec<BandReport>,
}

impl DayReport {
    /// Report every band.
    pub fn compute(date: NaiveDate, location: GeoCoordinate, tz: Tz) -> Self {
        Self::compute_bands(date, location, tz, &Band::ALL)
    }

    pub fn compute_bands(
        date: NaiveDate,
        location: GeoCoordinate,
        tz: Tz,
        bands: &[Band],
    ) -> Self {
        let GeoCoordinate { latitude, longitude } = location;
        let day = zoned_noon(date, tz);

        let bands = bands
            .iter()
            .map(|&band| {
                let (rise, set, status) = twilight::rise_set_for(band, &day, latitude, longitude);
                let length = twilight::length_for(band, &day, latitude, longitude);
                debug!(
                    "{} {} at {:.4},{:.4}: {} len={}",
                    date,
                    band,
                    latitude,
                    longitude,
                    status,
                    format_hms(length)
                );

                let (rise, set) = if status.is_ok() {
                    (Some(rise.fixed_offset()), Some(set.fixed_offset()))
                } else {
                    (None, None)
                };
                BandReport {
                    band,
                    status,
                    rise,
                    set,
                    length_hours: length.num_milliseconds() as f64 / 3_600_000.0,
                    length: format_hms(length),
                }
            })
            .collect();

        DayReport {
            date,
            location,
            timezone: tz.to_string(),
            solar_noon: twilight::solar_noon(&day, latitude, longitude).fixed_offset(),
            bands,
        }
    }

    pub fn band(&self, band: Band) -> Option<&BandReport> {
        self.bands.iter().find(|b| b.band == band)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Local noon of `date`; only its calendar date matters downstream.
fn zoned_noon(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
    tz.from_local_datetime(&noon)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&noon))
}

/// Format a duration as `HH:MM:SS`, hours not wrapped (24h is `24:00:00`).
pub fn format_hms(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{:02}:{:02}:{:02}", sign, total / 3600, (total % 3600) / 60, total % 60)
}

fn format_instant(t: &DateTime<FixedOffset>, date: NaiveDate) -> String {
    let hms = t.format("%H:%M:%S").to_string();
    let days = (t.date_naive() - date).num_days();
    match days {
        0 => hms,
        d if d > 0 => format!("{} (+{}d)", hms, d),
        d => format!("{} ({}d)", hms, d),
    }
}

// ─── ASCII table ────────────────────────────────────────────────

const INNER_WIDTH: usize = 62;

fn boxed_line(out: &mut String, text: &str) {
    let len = text.chars().count();
    let pad = if INNER_WIDTH > len { INNER_WIDTH - len } else { 1 };
    out.push_str("  ║");
    out.push_str(text);
    out.push_str(&" ".repeat(pad));
    out.push_str("║\n");
}

/// Boxed summary for the terminal.
pub fn render_table(report: &DayReport) -> String {
    let mut out = String::new();
    let bar = "═".repeat(INNER_WIDTH);

    out.push_str(&format!(
        "  {} at {:.4}, {:.4} ({})\n",
        report.date, report.location.latitude, report.location.longitude, report.timezone
    ));
    out.push_str(&format!("  ╔{}╗\n", bar));
    boxed_line(
        &mut out,
        &format!("  {:<13} {:<14} {:<14} {:>9}", "Band", "Rise", "Set", "Length"),
    );
    out.push_str(&format!("  ╠{}╣\n", bar));

    for b in &report.bands {
        let (rise, set) = match (&b.rise, &b.set) {
            (Some(r), Some(s)) => (
                format_instant(r, report.date),
                format_instant(s, report.date),
            ),
            _ => {
                let tag = match b.status {
                    SunriseStatus::AboveHorizon => "[above]",
                    _ => "[below]",
                };
                ("────────".to_string(), tag.to_string())
            }
        };
        boxed_line(
            &mut out,
            &format!(
                "  {:<13} {:<14} {:<14} {:>9}",
                b.band.to_string(),
                rise,
                set,
                b.length
            ),
        );
    }

    out.push_str(&format!("  ╠{}╣\n", bar));
    let noon = format_instant(&report.solar_noon, report.date);
    boxed_line(&mut out, &format!("  Solar noon    {}", noon));
    out.push_str(&format!("  ╚{}╝\n", bar));
    out
}
