//! Errors raised while parsing inputs and building reports.
//!
//! The ephemeris math itself never fails; degenerate days are reported
//! through [`crate::SunriseStatus`] or 0/24 hour lengths instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid latitude {0}: must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}: must be between -180 and 180")]
    InvalidLongitude(f64),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown timezone '{0}': use IANA format (e.g. Europe/Oslo)")]
    UnknownTimezone(String),

    #[error("unknown band '{0}': use horizon, civil, nautical or astronomical")]
    UnknownBand(String),

    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
