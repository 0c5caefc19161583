//! Calendar-aware sunrise, sunset and twilight.
//!
//! Every function takes a zoned timestamp; only its calendar date is used.
//! Crossing hours are added to that date's midnight in the same zone, and
//! rise/set instants come back with a [`SunriseStatus`] that must be checked
//! before trusting them.

use crate::band::Band;
use crate::riseset::{self, Crossing, SunriseStatus};
use chrono::{DateTime, Datelike, Duration, NaiveTime, Offset, TimeZone};

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Convert fractional hours to a duration, truncated to the nanosecond.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::nanoseconds((hours * NANOS_PER_HOUR) as i64)
}

fn crossing_for<Tz: TimeZone>(
    band: Band,
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Crossing {
    riseset::sun_rise_set(
        date.year(),
        date.month(),
        date.day(),
        longitude,
        latitude,
        band.threshold(),
    )
}

/// Midnight of `date`'s calendar day in `date`'s zone.
///
/// When that midnight falls in a DST gap, the date's midnight is read with
/// the input's own UTC offset instead.
fn local_midnight<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = date.timezone();
    let midnight = date.date_naive().and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight).earliest().unwrap_or_else(|| {
        let offset = Duration::seconds(date.offset().fix().local_minus_utc() as i64);
        tz.from_utc_datetime(&(midnight - offset))
    })
}

fn anchor<Tz: TimeZone>(date: &DateTime<Tz>, hours: f64) -> DateTime<Tz> {
    local_midnight(date) + hours_to_duration(hours)
}

/// Rise and set for any band.
pub fn rise_set_for<Tz: TimeZone>(
    band: Band,
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> (DateTime<Tz>, DateTime<Tz>, SunriseStatus) {
    let c = crossing_for(band, date, latitude, longitude);
    (anchor(date, c.rise), anchor(date, c.set), c.status)
}

/// Time spent above the band's altitude, between zero and 24 hours.
pub fn length_for<Tz: TimeZone>(
    band: Band,
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Duration {
    let hours = riseset::day_length_hours(
        date.year(),
        date.month(),
        date.day(),
        longitude,
        latitude,
        band.threshold(),
    );
    hours_to_duration(hours)
}

/// Sunrise and sunset (upper limb at the refracted horizon).
pub fn sun_rise_set<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> (DateTime<Tz>, DateTime<Tz>, SunriseStatus) {
    rise_set_for(Band::Horizon, date, latitude, longitude)
}

/// Civil dawn and dusk (-6°).
pub fn civil_twilight<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> (DateTime<Tz>, DateTime<Tz>, SunriseStatus) {
    rise_set_for(Band::Civil, date, latitude, longitude)
}

/// Nautical dawn and dusk (-12°).
pub fn nautical_twilight<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> (DateTime<Tz>, DateTime<Tz>, SunriseStatus) {
    rise_set_for(Band::Nautical, date, latitude, longitude)
}

/// Astronomical dawn and dusk (-18°).
pub fn astronomical_twilight<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> (DateTime<Tz>, DateTime<Tz>, SunriseStatus) {
    rise_set_for(Band::Astronomical, date, latitude, longitude)
}

/// Sunrise to sunset.
pub fn day_length<Tz: TimeZone>(date: &DateTime<Tz>, latitude: f64, longitude: f64) -> Duration {
    length_for(Band::Horizon, date, latitude, longitude)
}

/// Civil dawn to civil dusk.
pub fn civil_twilight_length<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Duration {
    length_for(Band::Civil, date, latitude, longitude)
}

pub fn nautical_twilight_length<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Duration {
    length_for(Band::Nautical, date, latitude, longitude)
}

pub fn astronomical_twilight_length<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Duration {
    length_for(Band::Astronomical, date, latitude, longitude)
}

/// Meridian transit of the Sun. Defined even when it never rises or sets.
pub fn solar_noon<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> DateTime<Tz> {
    let c = crossing_for(Band::Horizon, date, latitude, longitude);
    anchor(date, c.transit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};
    use chrono_tz::America::Santiago;
    use chrono_tz::Australia::Sydney;
    use chrono_tz::Europe::London;

    const LAT: f64 = 51.5074;
    const LON: f64 = -0.1278;

    fn minutes(d: Duration) -> f64 {
        d.num_milliseconds() as f64 / 60_000.0
    }

    #[test]
    fn test_hours_to_duration() {
        assert_eq!(hours_to_duration(24.0), Duration::hours(24));
        assert_eq!(hours_to_duration(1.5), Duration::minutes(90));
        assert_eq!(hours_to_duration(0.0), Duration::zero());
        assert_eq!(hours_to_duration(-0.25), Duration::minutes(-15));
    }

    #[test]
    fn test_hours_added_to_local_midnight() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
        let (rise, set, status) = sun_rise_set(&date, LAT, LON);
        assert_eq!(status, SunriseStatus::Ok);
        // 3.715h and 20.357h after BST midnight.
        assert_eq!((rise.hour(), rise.minute()), (3, 42));
        assert_eq!((set.hour(), set.minute()), (20, 21));
        assert_eq!(rise.date_naive(), date.date_naive());
        assert_eq!(rise.timezone(), London);

        let midnight = London.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let c = crossing_for(Band::Horizon, &date, LAT, LON);
        assert_eq!(rise, midnight + hours_to_duration(c.rise));
        assert_eq!(set, midnight + hours_to_duration(c.set));
    }

    #[test]
    fn test_local_midnight_outside_dst_gap() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 18, 30, 0).unwrap();
        let midnight = local_midnight(&date);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2023, 6, 20, 23, 0, 0).unwrap());
        assert_eq!((midnight.hour(), midnight.minute()), (0, 0));
    }

    #[test]
    fn test_local_midnight_in_dst_gap() {
        // Chile skips from 00:00 to 01:00 on 2023-09-03.
        let date = Santiago.with_ymd_and_hms(2023, 9, 3, 12, 0, 0).unwrap();
        let naive_midnight = date.date_naive().and_time(NaiveTime::MIN);
        assert!(Santiago.from_local_datetime(&naive_midnight).earliest().is_none());
        assert_eq!(date.offset().fix().local_minus_utc(), -3 * 3600);

        let midnight = local_midnight(&date);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2023, 9, 3, 3, 0, 0).unwrap());

        let (rise, set, status) = sun_rise_set(&date, -33.4489, -70.6693);
        assert_eq!(status, SunriseStatus::Ok);
        let c = crossing_for(Band::Horizon, &date, -33.4489, -70.6693);
        assert_eq!(rise, midnight + hours_to_duration(c.rise));
        assert!(rise < set);
    }

    #[test]
    fn test_london_day_length() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let len = day_length(&date, LAT, LON);
        assert!((minutes(len) - (16.0 * 60.0 + 38.0)).abs() <= 2.0, "{:?}", len);
    }

    #[test]
    fn test_civil_twilight_before_sunrise() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let (sunrise, sunset, _) = sun_rise_set(&date, LAT, LON);
        let (dawn, dusk, status) = civil_twilight(&date, LAT, LON);
        assert_eq!(status, SunriseStatus::Ok);
        assert!(sunrise - dawn > Duration::minutes(30));
        assert!(dusk - sunset > Duration::minutes(30));
        assert!(civil_twilight_length(&date, LAT, LON) > day_length(&date, LAT, LON));
    }

    #[test]
    fn test_london_no_astronomical_night_in_june() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let (_, _, status) = astronomical_twilight(&date, LAT, LON);
        assert_eq!(status, SunriseStatus::AboveHorizon);
        assert_eq!(astronomical_twilight_length(&date, LAT, LON), Duration::hours(24));
    }

    #[test]
    fn test_twilight_ordering_at_equinox() {
        let date = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
        let (a_rise, a_set, _) = astronomical_twilight(&date, 51.5, 0.0);
        let (n_rise, n_set, _) = nautical_twilight(&date, 51.5, 0.0);
        let (c_rise, c_set, _) = civil_twilight(&date, 51.5, 0.0);
        let (h_rise, h_set, _) = sun_rise_set(&date, 51.5, 0.0);
        assert!(a_rise <= n_rise && n_rise <= c_rise && c_rise <= h_rise);
        assert!(h_set <= c_set && c_set <= n_set && n_set <= a_set);

        let lengths: Vec<Duration> = Band::ALL
            .iter()
            .map(|b| length_for(*b, &date, 51.5, 0.0))
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
        assert!(nautical_twilight_length(&date, 51.5, 0.0) < Duration::hours(24));
    }

    #[test]
    fn test_polar_day_and_night() {
        let june = Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let (_, _, status) = sun_rise_set(&june, 89.0, 0.0);
        assert_eq!(status, SunriseStatus::AboveHorizon);
        assert_eq!(day_length(&june, 89.0, 0.0), Duration::hours(24));

        let december = Utc.with_ymd_and_hms(2023, 12, 21, 0, 0, 0).unwrap();
        let (rise, set, status) = sun_rise_set(&december, 89.0, 0.0);
        assert_eq!(status, SunriseStatus::BelowHorizon);
        assert_eq!(rise, set);
        assert_eq!(day_length(&december, 89.0, 0.0), Duration::zero());
    }

    #[test]
    fn test_negative_hours_roll_into_previous_day() {
        let date = Sydney.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let (rise, set, status) = sun_rise_set(&date, -33.8688, 151.2093);
        assert_eq!(status, SunriseStatus::Ok);
        // Rise is -5.01h: 18:59 on the 14th. Set is 9.16h on the 15th.
        assert_eq!(rise.date_naive(), date.date_naive() - Duration::days(1));
        assert_eq!(rise.hour(), 18);
        assert_eq!(set.date_naive(), date.date_naive());
        assert_eq!(set.hour(), 9);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let early = tz.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        let late = tz.with_ymd_and_hms(2023, 9, 1, 23, 59, 59).unwrap();
        assert_eq!(sun_rise_set(&early, 45.0, 10.0), sun_rise_set(&late, 45.0, 10.0));
        assert_eq!(day_length(&early, 45.0, 10.0), day_length(&late, 45.0, 10.0));
    }

    #[test]
    fn test_solar_noon_between_rise_and_set() {
        let date = London.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
        let (rise, set, _) = sun_rise_set(&date, LAT, LON);
        let noon = solar_noon(&date, LAT, LON);
        assert!(rise < noon && noon < set);
        assert_eq!((noon.hour(), noon.minute()), (12, 2));
    }

    #[test]
    fn test_same_wall_clock_in_every_zone() {
        let utc = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
        let bst = utc.with_timezone(&London);
        let (r1, s1, _) = sun_rise_set(&utc, LAT, LON);
        let (r2, s2, _) = sun_rise_set(&bst, LAT, LON);
        assert_eq!(r1.naive_local(), r2.naive_local());
        assert_eq!(s1.naive_local(), s2.naive_local());
        assert_eq!(r1 - r2.with_timezone(&Utc), Duration::hours(1));
    }
}
