//! Hour-angle solutions for rise/set and day length.
//!
//! Core rule: when the Sun does not cross the threshold, say so. Rise/set
//! answers carry a [`SunriseStatus`]; length answers clamp to 0 or 24 hours.

use crate::angle::{acosd, cosd, rev180, revolution, sind};
use crate::band::AltitudeThreshold;
use crate::calendar::days_since_2000;
use crate::solar::{gmst0, mean_obliquity, sun_position, sun_ra_dec};
use log::trace;
use serde::Serialize;
use std::fmt;

/// Apparent angular radius of the Sun at 1 AU, in degrees.
const SUN_RADIUS_AU: f64 = 0.2666;

/// Earth's rotation, degrees per hour.
const DEG_PER_HOUR: f64 = 15.0;

/// Whether the Sun crosses the threshold on the requested day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(i8)]
pub enum SunriseStatus {
    /// Rises and sets; the crossing times are real.
    Ok = 0,
    /// Stays above the threshold all day (polar day).
    AboveHorizon = 1,
    /// Stays below the threshold all day (polar night).
    BelowHorizon = -1,
}

impl SunriseStatus {
    pub fn is_ok(self) -> bool {
        self == SunriseStatus::Ok
    }
}

impl fmt::Display for SunriseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunriseStatus::Ok => write!(f, "Ok"),
            SunriseStatus::AboveHorizon => write!(f, "AboveHorizon"),
            SunriseStatus::BelowHorizon => write!(f, "BelowHorizon"),
        }
    }
}

/// Rise and set, in fractional hours after 0h UT of the date.
///
/// Values are not wrapped into `[0, 24)`. Unless `status` is
/// [`SunriseStatus::Ok`] both are placeholders: transit ± 12h when the Sun
/// stays above, transit ± 0h when it stays below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crossing {
    pub rise: f64,
    pub set: f64,
    pub status: SunriseStatus,
}

impl Crossing {
    /// Meridian transit (local solar noon), hours after 0h UT.
    pub fn transit(&self) -> f64 {
        (self.rise + self.set) * 0.5
    }

    /// Hours between rise and set.
    pub fn span(&self) -> f64 {
        self.set - self.rise
    }
}

/// Subtract the Sun's apparent radius when the upper limb is requested.
fn target_altitude(threshold: AltitudeThreshold, distance: f64) -> f64 {
    if threshold.upper_limb {
        threshold.altitude - SUN_RADIUS_AU / distance
    } else {
        threshold.altitude
    }
}

/// Cosine of the hour angle at which the Sun reaches `altitude`.
fn hour_angle_cosine(altitude: f64, lat: f64, sin_dec: f64, cos_dec: f64) -> f64 {
    (sind(altitude) - sind(lat) * sin_dec) / (cosd(lat) * cos_dec)
}

/// Times the Sun crosses `threshold` on the given UT date at (`lon`, `lat`),
/// east longitude positive.
pub fn sun_rise_set(
    year: i32,
    month: u32,
    day: u32,
    lon: f64,
    lat: f64,
    threshold: AltitudeThreshold,
) -> Crossing {
    let d = days_since_2000(year, month, day);

    let sid_time = revolution(gmst0(d) + 180.0 + lon);
    let sun = sun_ra_dec(d);

    let t_south = 12.0 - rev180(sid_time - sun.right_ascension) / DEG_PER_HOUR;

    let altitude = target_altitude(threshold, sun.distance);
    let cost = hour_angle_cosine(altitude, lat, sind(sun.declination), cosd(sun.declination));

    let (t, status) = if cost >= 1.0 {
        (0.0, SunriseStatus::BelowHorizon)
    } else if cost <= -1.0 {
        (12.0, SunriseStatus::AboveHorizon)
    } else {
        (acosd(cost) / DEG_PER_HOUR, SunriseStatus::Ok)
    };

    if !status.is_ok() {
        trace!(
            "{:04}-{:02}-{:02} lat={} alt={:.4}: no crossing ({}, cos={:.4})",
            year,
            month,
            day,
            lat,
            altitude,
            status,
            cost
        );
    }

    Crossing { rise: t_south - t, set: t_south + t, status }
}

/// Hours the Sun spends above `threshold` on the given date.
///
/// The day number is referred to local solar midnight (`+0.5 − lon/360`)
/// and the declination is computed directly from the ecliptic longitude.
/// Returns 0 when the Sun stays below and 24 when it stays above.
pub fn day_length_hours(
    year: i32,
    month: u32,
    day: u32,
    lon: f64,
    lat: f64,
    threshold: AltitudeThreshold,
) -> f64 {
    let d = days_since_2000(year, month, day) + 0.5 - lon / 360.0;

    let obl = mean_obliquity(d);
    let sun = sun_position(d);

    let sin_dec = sind(obl) * sind(sun.longitude);
    let cos_dec = (1.0 - sin_dec * sin_dec).sqrt();

    let altitude = target_altitude(threshold, sun.distance);
    let cost = hour_angle_cosine(altitude, lat, sin_dec, cos_dec);

    if cost >= 1.0 {
        0.0
    } else if cost <= -1.0 {
        24.0
    } else {
        (2.0 / DEG_PER_HOUR) * acosd(cost)
    }
}
