//! Plane tests against boxes and spheres.
//!
//! Planes are `[a, b, c, d]` for `a*x + b*y + c*z + d = 0`. Nothing here
//! normalizes implicitly; [`plane_distance`] is only a Euclidean distance
//! when the caller passed a normalized plane.

use geoprim_math::Real;

/// Signed value of the plane equation at `point`.
#[inline]
pub fn plane_distance<T: Real>(plane: [T; 4], point: [T; 3]) -> T {
    let [a, b, c, d] = plane;
    a * point[0] + b * point[1] + c * point[2] + d
}

/// Scale the plane so its normal `(a, b, c)` has unit length.
///
/// A zero normal divides by zero and yields non-finite coefficients.
#[inline]
pub fn normalize_plane<T: Real>(plane: [T; 4]) -> [T; 4] {
    let [a, b, c, d] = plane;
    let inv_len = (a * a + b * b + c * c).sqrt().recip();
    [a * inv_len, b * inv_len, c * inv_len, d * inv_len]
}

/// Test whether the plane intersects the box.
///
/// Compares the signed distance from the box center against the half-extent
/// projected onto the normal: `|a*cx + b*cy + c*cz + d| <= |a|*hx + |b|*hy + |c|*hz`.
/// The empty box produces a NaN center and never intersects.
#[inline]
pub fn plane_intersects_aabb<T: Real>(plane: [T; 4], min: [T; 3], max: [T; 3]) -> bool {
    let [a, b, c, _] = plane;
    let center = [
        (min[0] + max[0]) * T::HALF,
        (min[1] + max[1]) * T::HALF,
        (min[2] + max[2]) * T::HALF,
    ];
    let half = [
        (max[0] - min[0]) * T::HALF,
        (max[1] - min[1]) * T::HALF,
        (max[2] - min[2]) * T::HALF,
    ];
    let distance = plane_distance(plane, center);
    let radius = a.abs() * half[0] + b.abs() * half[1] + c.abs() * half[2];
    distance.abs() <= radius
}

/// Test whether the plane intersects the sphere: `|a*x + b*y + c*z + d| <= r * |(a, b, c)|`.
#[inline]
pub fn plane_intersects_sphere<T: Real>(plane: [T; 4], center: [T; 3], radius: T) -> bool {
    let [a, b, c, _] = plane;
    let normal_len = (a * a + b * b + c * c).sqrt();
    plane_distance(plane, center).abs() <= radius * normal_len
}
