//! Intersection algorithms.
//!
//! Each shape pair has a dedicated routine operating on raw coordinates.
//! Rays and segments need floating-point division and square roots and are
//! bounded by [`Real`](geoprim_math::Real); squared-distance tests only need
//! ring arithmetic and accept any [`Coord`](geoprim_math::Coord).

mod plane;
mod ray_aabb;
mod ray_sphere;
mod segment;
mod sphere;

pub use plane::{normalize_plane, plane_distance, plane_intersects_aabb, plane_intersects_sphere};
pub use ray_aabb::{intersect_ray_aabb, ray_intersects_aabb};
pub use ray_sphere::{intersect_ray_sphere, ray_intersects_sphere};
pub use segment::{intersect_segment_aabb, intersect_segment_sphere, SegmentClass, SegmentHit};
pub use sphere::{
    aabb_intersects_sphere, distance_squared, sphere_contains_point, spheres_intersect,
};

/// Dot product of two 3-vectors.
#[inline]
pub(crate) fn dot<T: geoprim_math::Coord>(a: [T; 3], b: [T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// `a - b` componentwise.
#[inline]
pub(crate) fn sub<T: geoprim_math::Coord>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
