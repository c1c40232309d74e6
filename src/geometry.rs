//! Joint geometry helpers used by the pose feature extractor.

use crate::constants::EPSILON;
use nalgebra::Point3;

/// Euclidean distance between two joints
#[must_use]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Interior angle in degrees at `mid` of the triangle `start`-`mid`-`end`.
///
/// Uses the law of cosines on the three pairwise distances. The cosine is
/// clamped to `[-1, 1]` before `acos`. When one of the sides meeting at `mid`
/// has zero length the angle is undefined and NaN is returned; curl
/// classification treats NaN as fully curled.
#[must_use]
pub fn angle_at_vertex(start: &Point3<f64>, mid: &Point3<f64>, end: &Point3<f64>) -> f64 {
    let start_mid = distance(start, mid);
    let mid_end = distance(mid, end);
    let start_end = distance(start, end);

    if start_mid < EPSILON || mid_end < EPSILON {
        return f64::NAN;
    }

    let cos_in = (mid_end.powi(2) + start_mid.powi(2) - start_end.powi(2)) / (2.0 * mid_end * start_mid);

    cos_in.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle in degrees of the segment `from` -> `to` projected onto the x/y plane.
///
/// Follows image coordinates, so positive angles point downward. Range is
/// `(-180, 180]`.
#[must_use]
pub fn slope_angle(from: &Point3<f64>, to: &Point3<f64>) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    dy.atan2(dx).to_degrees()
}
