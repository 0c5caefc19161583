//! Altitude thresholds for sunrise/sunset and the three twilight bands.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard horizon altitude: 35 arc minutes of refraction below the
/// geometric horizon.
pub const HORIZON_ALTITUDE: f64 = -35.0 / 60.0;
pub const CIVIL_ALTITUDE: f64 = -6.0;
pub const NAUTICAL_ALTITUDE: f64 = -12.0;
pub const ASTRONOMICAL_ALTITUDE: f64 = -18.0;

/// Target altitude of the Sun, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AltitudeThreshold {
    pub altitude: f64,
    /// Measure to the Sun's upper limb instead of its centre.
    pub upper_limb: bool,
}

impl AltitudeThreshold {
    pub const fn new(altitude: f64, upper_limb: bool) -> Self {
        Self { altitude, upper_limb }
    }
}

/// Which altitude crossing is being asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    /// Sunrise/sunset: upper limb at the refracted horizon.
    Horizon,
    /// Sun centre at -6°.
    Civil,
    /// Sun centre at -12°.
    Nautical,
    /// Sun centre at -18°.
    Astronomical,
}

impl Band {
    /// Narrowest band first.
    pub const ALL: [Band; 4] = [Band::Horizon, Band::Civil, Band::Nautical, Band::Astronomical];

    pub const fn threshold(self) -> AltitudeThreshold {
        match self {
            Band::Horizon => AltitudeThreshold::new(HORIZON_ALTITUDE, true),
            Band::Civil => AltitudeThreshold::new(CIVIL_ALTITUDE, false),
            Band::Nautical => AltitudeThreshold::new(NAUTICAL_ALTITUDE, false),
            Band::Astronomical => AltitudeThreshold::new(ASTRONOMICAL_ALTITUDE, false),
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Horizon => write!(f, "Horizon"),
            Band::Civil => write!(f, "Civil"),
            Band::Nautical => write!(f, "Nautical"),
            Band::Astronomical => write!(f, "Astronomical"),
        }
    }
}

impl FromStr for Band {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizon" | "sun" | "sunrise" => Ok(Band::Horizon),
            "civil" => Ok(Band::Civil),
            "nautical" => Ok(Band::Nautical),
            "astronomical" | "astro" => Ok(Band::Astronomical),
            _ => Err(Error::UnknownBand(s.to_string())),
        }
    }
}
