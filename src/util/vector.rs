//! Vector helpers layered over [`glam::Vec3`].
//!
//! Arithmetic (add, subtract, negate, scale, dot, cross, length) comes
//! straight from `glam`. The helpers here cover the two places where the
//! layout code needs stricter behavior than `glam` provides: normalization
//! that never produces NaN, and a deterministic perpendicular axis.

use glam::Vec3;

/// Minimum divisor used by [`normalize_floored`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Above this `|dir · X|` the X axis is too close to the direction to be
/// used as a cross-product reference.
const REFERENCE_AXIS_THRESHOLD: f32 = 0.9;

/// Normalize `v`, flooring the divisor at [`NORMALIZE_EPSILON`].
///
/// The zero vector maps to the zero vector instead of NaN.
#[must_use]
pub fn normalize_floored(v: Vec3) -> Vec3 {
    v / v.length().max(NORMALIZE_EPSILON)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

/// Unit vector perpendicular to `direction`.
///
/// Uses the world X axis as the cross-product reference unless
/// `direction` is nearly parallel (or antiparallel) to X, in which case
/// world Y is used. The choice depends only on the direction's axis, so
/// swapping the two endpoints of a bond flips the sign of the result but
/// keeps the same plane.
#[must_use]
pub fn perpendicular(direction: Vec3) -> Vec3 {
    let dir = normalize_floored(direction);
    let reference = if dir.dot(Vec3::X).abs() > REFERENCE_AXIS_THRESHOLD {
        Vec3::Y
    } else {
        Vec3::X
    };
    normalize_floored(dir.cross(reference))
}
