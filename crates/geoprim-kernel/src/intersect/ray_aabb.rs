//! Ray-box intersection (slab method).

use geoprim_math::Real;

/// Entry/exit window of the line `origin + t * dir` through the box.
///
/// Returns the raw `(t_near, t_far)` with `t_near <= t_far`, or `None` when
/// the line misses. No restriction on the sign of `t` is applied here.
///
/// A zero direction component means the line is parallel to that slab: it
/// stays inside the slab forever when the origin coordinate lies in
/// `[min, max]` and never enters it otherwise. The near plane is chosen by
/// the sign of the reciprocal so the empty box (`+inf / -inf`) is always
/// rejected.
#[inline]
pub(crate) fn slab_window<T: Real>(
    origin: [T; 3],
    dir: [T; 3],
    min: [T; 3],
    max: [T; 3],
) -> Option<(T, T)> {
    let mut t_near = T::neg_infinity();
    let mut t_far = T::infinity();

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];

        if d == T::zero() {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let inv = d.recip();
        let (t0, t1) = if inv >= T::zero() {
            ((min[axis] - o) * inv, (max[axis] - o) * inv)
        } else {
            ((max[axis] - o) * inv, (min[axis] - o) * inv)
        };

        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    Some((t_near, t_far))
}

/// Intersect a half-infinite ray with an axis-aligned box.
///
/// Returns `Some((t_near, t_far))` if the ray hits the box. `t` is measured in
/// units of `dir`, which does not need to be normalized. `t_near` is not
/// clamped: a ray starting inside the box reports `t_near <= 0 <= t_far`.
#[inline]
pub fn intersect_ray_aabb<T: Real>(
    origin: [T; 3],
    dir: [T; 3],
    min: [T; 3],
    max: [T; 3],
) -> Option<(T, T)> {
    slab_window(origin, dir, min, max).filter(|&(_, t_far)| t_far >= T::zero())
}

/// Boolean form of [`intersect_ray_aabb`].
#[inline]
pub fn ray_intersects_aabb<T: Real>(origin: [T; 3], dir: [T; 3], min: [T; 3], max: [T; 3]) -> bool {
    intersect_ray_aabb(origin, dir, min, max).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const UNIT_MIN: [f64; 3] = [0.0, 0.0, 0.0];
    const UNIT_MAX: [f64; 3] = [1.0, 1.0, 1.0];

    #[test]
    fn test_ray_aabb_hit() {
        let (t_near, t_far) =
            intersect_ray_aabb([-1.0, 0.5, 0.5], [1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX).unwrap();
        assert_relative_eq!(t_near, 1.0);
        assert_relative_eq!(t_far, 2.0);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let hit = intersect_ray_aabb([-5.0, 5.0, 5.0], [1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_inside_aabb() {
        let (t_near, t_far) =
            intersect_ray_aabb([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX).unwrap();
        assert!(t_near <= 0.0);
        assert!(t_far >= 0.0);
        assert_relative_eq!(t_near, -0.5);
        assert_relative_eq!(t_far, 0.5);
    }

    #[test]
    fn test_ray_aabb_behind() {
        let hit = intersect_ray_aabb([-5.0, 0.5, 0.5], [-1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_aabb_diagonal() {
        let (t_near, t_far) =
            intersect_ray_aabb([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0], UNIT_MIN, UNIT_MAX).unwrap();
        assert_relative_eq!(t_near, 1.0);
        assert_relative_eq!(t_far, 2.0);
    }

    #[test]
    fn test_ray_aabb_unnormalized_direction() {
        // t is measured in units of the direction vector.
        let (t_near, t_far) =
            intersect_ray_aabb([-1.0, 0.5, 0.5], [4.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX).unwrap();
        assert_relative_eq!(t_near, 0.25);
        assert_relative_eq!(t_far, 0.5);
    }

    #[test]
    fn test_parallel_ray_outside_slab() {
        // Parallel to the x slab planes but above the box on y.
        let hit = intersect_ray_aabb([-1.0, 1.5, 0.5], [1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX);
        assert!(hit.is_none());
    }

    #[test]
    fn test_parallel_ray_on_face() {
        // Grazing along the y = 1 face is inside the closed slab.
        let hit = intersect_ray_aabb([-1.0, 1.0, 0.5], [1.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX);
        assert!(hit.is_some());
    }

    #[test]
    fn test_negative_zero_direction_is_parallel() {
        let hit = intersect_ray_aabb([-1.0, 0.5, 0.5], [1.0, -0.0, 0.0], UNIT_MIN, UNIT_MAX);
        assert!(hit.is_some());
    }

    #[test]
    fn test_empty_box_never_hit() {
        let min = [f32::INFINITY; 3];
        let max = [f32::NEG_INFINITY; 3];
        assert!(!ray_intersects_aabb([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], min, max));
        assert!(!ray_intersects_aabb([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], min, max));
    }

    #[test]
    fn test_zero_direction_inside_box() {
        // Every slab is parallel: the window is unbounded.
        let (t_near, t_far) =
            intersect_ray_aabb([0.5, 0.5, 0.5], [0.0, 0.0, 0.0], UNIT_MIN, UNIT_MAX).unwrap();
        assert!(t_near.is_infinite() && t_near < 0.0);
        assert!(t_far.is_infinite() && t_far > 0.0);
    }
}
