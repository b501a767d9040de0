//! Sphere and circle tests.
//!
//! Written over `N` dimensions so the same routines back 3D spheres and 2D
//! circles. All comparisons are on squared distances; no square roots.

use geoprim_math::Coord;

use crate::bounds;

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared<T: Coord, const N: usize>(a: [T; N], b: [T; N]) -> T {
    let mut dist = T::zero();
    for i in 0..N {
        let d = a[i] - b[i];
        dist = dist + d * d;
    }
    dist
}

/// Closed-ball containment: `|point - center|^2 <= r^2`.
#[inline]
pub fn sphere_contains_point<T: Coord, const N: usize>(center: [T; N], radius: T, point: [T; N]) -> bool {
    distance_squared(center, point) <= radius * radius
}

/// Two spheres intersect iff `|c1 - c2|^2 <= (r1 + r2)^2`.
#[inline]
pub fn spheres_intersect<T: Coord, const N: usize>(
    center_a: [T; N],
    radius_a: T,
    center_b: [T; N],
    radius_b: T,
) -> bool {
    let r = radius_a + radius_b;
    distance_squared(center_a, center_b) <= r * r
}

/// Box-sphere test against a sphere given by center and *squared* radius.
///
/// Clamps the center into the box and compares the squared distance to the
/// clamped point with `radius_squared`.
#[inline]
pub fn aabb_intersects_sphere<T: Coord, const N: usize>(
    min: [T; N],
    max: [T; N],
    center: [T; N],
    radius_squared: T,
) -> bool {
    bounds::distance_squared_to_point(&min, &max, &center) <= radius_squared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains_point() {
        assert!(sphere_contains_point([0.0, 0.0, 0.0], 1.0, [0.5, 0.5, 0.5]));
        // On the surface counts.
        assert!(sphere_contains_point([0.0, 0.0, 0.0], 1.0, [1.0, 0.0, 0.0]));
        assert!(!sphere_contains_point([0.0, 0.0, 0.0], 1.0, [1.0, 0.1, 0.0]));
    }

    #[test]
    fn test_spheres_intersect() {
        assert!(spheres_intersect([0.0, 0.0, 0.0], 1.0, [1.5, 0.0, 0.0], 1.0));
        // Touching counts.
        assert!(spheres_intersect([0.0, 0.0, 0.0], 1.0, [2.0, 0.0, 0.0], 1.0));
        assert!(!spheres_intersect([0.0, 0.0, 0.0], 1.0, [2.1, 0.0, 0.0], 1.0));
    }

    #[test]
    fn test_circles_intersect() {
        assert!(spheres_intersect([0.0f32, 0.0], 2.0, [3.0, 0.0], 1.0));
        assert!(!spheres_intersect([0.0f32, 0.0], 2.0, [3.0, 0.5], 1.0));
    }

    #[test]
    fn test_aabb_sphere_far_corner() {
        // Nearest point of [2,3]^3 to the origin is (2,2,2).
        assert!(!aabb_intersects_sphere([2.0, 2.0, 2.0], [3.0, 3.0, 3.0], [0.0, 0.0, 0.0], 1.0));
        assert!(aabb_intersects_sphere([2.0, 2.0, 2.0], [3.0, 3.0, 3.0], [0.0, 0.0, 0.0], 12.0));
    }

    #[test]
    fn test_aabb_sphere_center_inside() {
        assert!(aabb_intersects_sphere([0.0, 0.0, 0.0], [4.0, 4.0, 4.0], [2.0, 2.0, 2.0], 0.01));
    }

    #[test]
    fn test_aabb_sphere_face() {
        // Sphere just touching the x = 1 face.
        assert!(aabb_intersects_sphere([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.5, 0.5], 1.0));
        assert!(!aabb_intersects_sphere([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.1, 0.5, 0.5], 1.0));
    }
}
