//! Angle reduction and degree-domain trigonometry.
//!
//! Every formula in this crate works in degrees; these wrappers keep the
//! radian conversion in one place.

use std::f64::consts::PI;

const INV_360: f64 = 1.0 / 360.0;
pub(crate) const RAD_TO_DEG: f64 = 180.0 / PI;
const DEG_TO_RAD: f64 = PI / 180.0;

/// Reduce an angle to `[0, 360)` degrees.
pub fn revolution(x: f64) -> f64 {
    x - 360.0 * (x * INV_360).floor()
}

/// Reduce an angle to `[-180, 180)` degrees.
pub fn rev180(x: f64) -> f64 {
    x - 360.0 * (x * INV_360 + 0.5).floor()
}

pub fn sind(x: f64) -> f64 {
    (x * DEG_TO_RAD).sin()
}

pub fn cosd(x: f64) -> f64 {
    (x * DEG_TO_RAD).cos()
}

pub fn tand(x: f64) -> f64 {
    (x * DEG_TO_RAD).tan()
}

pub fn atand(x: f64) -> f64 {
    RAD_TO_DEG * x.atan()
}

/// Arc sine in degrees. NaN outside `[-1, 1]`.
pub fn asind(x: f64) -> f64 {
    RAD_TO_DEG * x.asin()
}

/// Arc cosine in degrees. NaN outside `[-1, 1]`.
pub fn acosd(x: f64) -> f64 {
    RAD_TO_DEG * x.acos()
}

/// Quadrant-aware arc tangent of `y / x`, in degrees.
pub fn atan2d(y: f64, x: f64) -> f64 {
    RAD_TO_DEG * y.atan2(x)
}
