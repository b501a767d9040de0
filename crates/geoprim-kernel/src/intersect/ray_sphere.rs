//! Ray-sphere intersection (quadratic equation).

use geoprim_math::Real;

use super::sphere::sphere_contains_point;
use super::{dot, sub};

/// Roots of the line `origin + t * dir` against the sphere, unfiltered.
///
/// Solves `t^2 (d.d) + 2t (d.(o-c)) + ((o-c).(o-c) - r^2) = 0`. `None` when
/// the discriminant is negative.
#[inline]
pub(crate) fn line_sphere_window<T: Real>(
    origin: [T; 3],
    dir: [T; 3],
    center: [T; 3],
    radius: T,
) -> Option<(T, T)> {
    let oc = sub(origin, center);

    // Half-b form of the quadratic.
    let a = dot(dir, dir);
    let b = dot(dir, oc);
    let c = dot(oc, oc) - radius * radius;

    let discriminant = b * b - a * c;
    if discriminant < T::zero() {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    Some(((-b - sqrt_disc) / a, (-b + sqrt_disc) / a))
}

/// Intersect a half-infinite ray with a sphere.
///
/// Returns both roots of the quadratic as `(t_near, t_far)`. Returns `None`
/// when the discriminant is negative or when both roots lie behind the
/// origin. A ray starting inside the sphere still hits: `t_near` is negative
/// and `t_far` is the exit.
///
/// A zero direction never moves: it hits with the unbounded window
/// `(-inf, +inf)` when the origin lies in the closed ball and misses
/// otherwise, the same answer the slab test gives for boxes.
pub fn intersect_ray_sphere<T: Real>(
    origin: [T; 3],
    dir: [T; 3],
    center: [T; 3],
    radius: T,
) -> Option<(T, T)> {
    if dot(dir, dir) == T::zero() {
        return sphere_contains_point(center, radius, origin)
            .then(|| (T::neg_infinity(), T::infinity()));
    }
    line_sphere_window(origin, dir, center, radius).filter(|&(_, t_far)| t_far >= T::zero())
}

/// Boolean form of [`intersect_ray_sphere`].
#[inline]
pub fn ray_intersects_sphere<T: Real>(origin: [T; 3], dir: [T; 3], center: [T; 3], radius: T) -> bool {
    intersect_ray_sphere(origin, dir, center, radius).is_some()
}
