//! Low-precision solar ephemeris.
//!
//! Ecliptic position from a single-step eccentric anomaly correction,
//! equatorial coordinates via the mean obliquity of the ecliptic, and
//! Greenwich mean sidereal time at 0h UT.
//! Accuracy: about one minute of time for rise/set work.

use crate::angle::{atan2d, cosd, revolution, sind, RAD_TO_DEG};
use serde::Serialize;

/// Sun's ecliptic longitude and distance at a given day number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// True ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Earth–Sun distance in astronomical units.
    pub distance: f64,
}

/// Sun's geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, `[-180, 180]`.
    pub right_ascension: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Earth–Sun distance in astronomical units.
    pub distance: f64,
}

/// Compute the Sun's ecliptic longitude and distance for day number `d`
/// (see [`crate::calendar::days_since_2000`]).
///
/// Kepler's equation is not iterated: one first-order correction term is
/// applied to the mean anomaly.
pub fn sun_position(d: f64) -> SolarPosition {
    let mean_anomaly = revolution(356.0470 + 0.9856002585 * d);
    let perihelion = 282.9404 + 4.70935e-5 * d;
    let ecc = 0.016709 - 1.151e-9 * d;

    let ecc_anomaly = mean_anomaly
        + ecc * RAD_TO_DEG * sind(mean_anomaly) * (1.0 + ecc * cosd(mean_anomaly));
    let x = cosd(ecc_anomaly) - ecc;
    let y = (1.0 - ecc * ecc).sqrt() * sind(ecc_anomaly);

    let distance = (x * x + y * y).sqrt();
    let true_anomaly = atan2d(y, x);

    let mut longitude = true_anomaly + perihelion;
    while longitude >= 360.0 {
        longitude -= 360.0;
    }

    SolarPosition { longitude, distance }
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Sun's right ascension, declination and distance for day number `d`.
pub fn sun_ra_dec(d: f64) -> EquatorialPosition {
    let SolarPosition { longitude, distance } = sun_position(d);

    let x = distance * cosd(longitude);
    let y = distance * sind(longitude);

    let obl = mean_obliquity(d);
    let z = y * sind(obl);
    let y = y * cosd(obl);

    EquatorialPosition {
        right_ascension: atan2d(y, x),
        declination: atan2d(z, (x * x + y * y).sqrt()),
        distance,
    }
}

/// Greenwich mean sidereal time at 0h UT, in degrees.
///
/// Folds the Sun's mean longitude (mean anomaly plus perihelion) and 180°
/// into one constant and one rate.
pub fn gmst0(d: f64) -> f64 {
    revolution((180.0 + 356.0470 + 282.9404) + (0.9856002585 + 4.70935e-5) * d)
}
