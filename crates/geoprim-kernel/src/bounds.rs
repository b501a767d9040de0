//! Axis-aligned box arithmetic in any dimension.
//!
//! Boxes are passed as separate `min` / `max` corner arrays. The same code
//! serves 3D boxes (`N = 3`) and 2D rectangles (`N = 2`).
//!
//! The empty box is `min = T::EMPTY_MIN`, `max = T::EMPTY_MAX` on every axis
//! (`+inf / -inf` for floats, `i32::MAX / i32::MIN` for integers). It is the
//! identity of [`union`] and what [`intersection`] returns for disjoint
//! inputs, so results can be chained without checking.

use geoprim_math::{partial_max, partial_min, Coord};

/// Corners of the empty box.
#[inline]
pub fn empty<T: Coord, const N: usize>() -> ([T; N], [T; N]) {
    ([T::EMPTY_MIN; N], [T::EMPTY_MAX; N])
}

/// `true` iff `min <= max` on every axis.
#[inline]
pub fn is_valid<T: Coord, const N: usize>(min: &[T; N], max: &[T; N]) -> bool {
    (0..N).all(|i| min[i] <= max[i])
}

/// `true` iff `min < max` on every axis (the box has a non-empty interior).
#[inline]
pub fn has_interior<T: Coord, const N: usize>(min: &[T; N], max: &[T; N]) -> bool {
    (0..N).all(|i| min[i] < max[i])
}

/// Componentwise min of minima and max of maxima.
#[inline]
pub fn union<T: Coord, const N: usize>(
    a_min: &[T; N],
    a_max: &[T; N],
    b_min: &[T; N],
    b_max: &[T; N],
) -> ([T; N], [T; N]) {
    let mut min = *a_min;
    let mut max = *a_max;
    for i in 0..N {
        min[i] = partial_min(a_min[i], b_min[i]);
        max[i] = partial_max(a_max[i], b_max[i]);
    }
    (min, max)
}

/// Grow a box to include a point.
#[inline]
pub fn union_point<T: Coord, const N: usize>(
    min: &[T; N],
    max: &[T; N],
    point: &[T; N],
) -> ([T; N], [T; N]) {
    union(min, max, point, point)
}

/// Componentwise max of minima and min of maxima.
///
/// If any axis ends up with `min > max` the whole result is the empty box,
/// not just the offending axis.
#[inline]
pub fn intersection<T: Coord, const N: usize>(
    a_min: &[T; N],
    a_max: &[T; N],
    b_min: &[T; N],
    b_max: &[T; N],
) -> ([T; N], [T; N]) {
    let mut min = *a_min;
    let mut max = *a_max;
    for i in 0..N {
        min[i] = partial_max(a_min[i], b_min[i]);
        max[i] = partial_min(a_max[i], b_max[i]);
        if min[i] > max[i] {
            return empty();
        }
    }
    (min, max)
}

/// `true` iff the inner box lies within the outer box (closed bounds).
#[inline]
pub fn contains_box<T: Coord, const N: usize>(
    outer_min: &[T; N],
    outer_max: &[T; N],
    inner_min: &[T; N],
    inner_max: &[T; N],
) -> bool {
    (0..N).all(|i| inner_min[i] >= outer_min[i] && inner_max[i] <= outer_max[i])
}

/// `true` iff `min <= point <= max` on every axis.
#[inline]
pub fn contains_point_closed<T: Coord, const N: usize>(
    min: &[T; N],
    max: &[T; N],
    point: &[T; N],
) -> bool {
    (0..N).all(|i| point[i] >= min[i] && point[i] <= max[i])
}

/// `true` iff `min < point < max` on every axis.
#[inline]
pub fn contains_point_open<T: Coord, const N: usize>(
    min: &[T; N],
    max: &[T; N],
    point: &[T; N],
) -> bool {
    (0..N).all(|i| point[i] > min[i] && point[i] < max[i])
}

/// Overlap test, touching faces count as overlap.
#[inline]
pub fn overlaps_closed<T: Coord, const N: usize>(
    a_min: &[T; N],
    a_max: &[T; N],
    b_min: &[T; N],
    b_max: &[T; N],
) -> bool {
    (0..N).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
}

/// Overlap test, touching faces do not count.
#[inline]
pub fn overlaps_open<T: Coord, const N: usize>(
    a_min: &[T; N],
    a_max: &[T; N],
    b_min: &[T; N],
    b_max: &[T; N],
) -> bool {
    (0..N).all(|i| a_min[i] < b_max[i] && a_max[i] > b_min[i])
}

/// Squared distance from `point` to the nearest point of the box.
///
/// Zero when the point is inside. Axes where the point lies within the slab
/// contribute nothing.
#[inline]
pub fn distance_squared_to_point<T: Coord, const N: usize>(
    min: &[T; N],
    max: &[T; N],
    point: &[T; N],
) -> T {
    let mut dist = T::zero();
    for i in 0..N {
        let p = point[i];
        if p < min[i] {
            let d = p - min[i];
            dist = dist + d * d;
        } else if p > max[i] {
            let d = p - max[i];
            dist = dist + d * d;
        }
    }
    dist
}
