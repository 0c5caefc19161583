//! Sunrise, sunset, day length and twilight for any date and coordinate.
//!
//! Uses a compact solar ephemeris (about one minute of accuracy) and solves
//! the hour angle at which the Sun reaches a band's altitude:
//!
//! | Band | Altitude | Limb |
//! |------|----------|------|
//! | [`Band::Horizon`] | -35′ | upper |
//! | [`Band::Civil`] | -6° | centre |
//! | [`Band::Nautical`] | -12° | centre |
//! | [`Band::Astronomical`] | -18° | centre |
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use solar_twilight::{sun_rise_set, day_length, SunriseStatus};
//!
//! let date = Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap();
//! let (rise, set, status) = sun_rise_set(&date, 51.5074, -0.1278);
//! if status == SunriseStatus::Ok {
//!     println!("{} -> {} ({:?})", rise, set, day_length(&date, 51.5074, -0.1278));
//! }
//! ```

pub mod angle;
pub mod band;
pub mod calendar;
pub mod error;
pub mod report;
pub mod riseset;
pub mod solar;
pub mod twilight;

pub use band::{AltitudeThreshold, Band};
pub use error::{Error, Result};
pub use report::{DayReport, GeoCoordinate};
pub use riseset::{Crossing, SunriseStatus};
pub use twilight::{
    astronomical_twilight, astronomical_twilight_length, civil_twilight, civil_twilight_length,
    day_length, length_for, nautical_twilight, nautical_twilight_length, rise_set_for, solar_noon,
    sun_rise_set,
};
