//! Axis-aligned rectangle.

use std::fmt;

use geoprim_kernel::bounds;
use geoprim_kernel::intersect;
use geoprim_math::{widen_point2, Coord, Point2, Real, Vec2, Widen};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::shape::{lhs, rhs, Shape2D};
use crate::Circle;

/// Axis-aligned rectangle with open bounds.
///
/// Unlike [`Aabb`](crate::Aabb), a rectangle is only valid when it has an
/// interior (`min < max` on both axes), points on the border are outside,
/// and two rectangles sharing only an edge do not intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle<T> {
    /// Minimum X coordinate.
    pub min_x: T,
    /// Minimum Y coordinate.
    pub min_y: T,
    /// Maximum X coordinate.
    pub max_x: T,
    /// Maximum Y coordinate.
    pub max_y: T,
}

/// Single-precision rectangle.
pub type Rectanglef = Rectangle<f32>;
/// Double-precision rectangle.
pub type Rectangled = Rectangle<f64>;
/// Integer rectangle.
pub type Rectanglei = Rectangle<i32>;

impl<T: Coord> Rectangle<T> {
    /// Create a rectangle from its four bounds.
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from its min and max corners.
    pub fn from_corners(min: &Point2<T>, max: &Point2<T>) -> Self {
        Self::new(min.x, min.y, max.x, max.y)
    }

    /// The empty rectangle, same sentinel as [`Aabb::empty`](crate::Aabb::empty).
    pub fn empty() -> Self {
        let (min, max) = bounds::empty();
        Self::from_arrays(min, max)
    }

    fn from_arrays(min: [T; 2], max: [T; 2]) -> Self {
        Self::new(min[0], min[1], max[0], max[1])
    }

    pub(crate) fn min_array(&self) -> [T; 2] {
        [self.min_x, self.min_y]
    }

    pub(crate) fn max_array(&self) -> [T; 2] {
        [self.max_x, self.max_y]
    }

    fn widened<U: Coord>(&self) -> ([T::Wide; 2], [T::Wide; 2])
    where
        T: Widen<U>,
    {
        (
            lhs::<T, U, 2>(self.min_array()),
            lhs::<T, U, 2>(self.max_array()),
        )
    }

    /// Minimum corner.
    pub fn min(&self) -> Point2<T> {
        Point2::new(self.min_x, self.min_y)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point2<T> {
        Point2::new(self.max_x, self.max_y)
    }

    /// `true` iff `min < max` on both axes.
    pub fn is_valid(&self) -> bool {
        bounds::has_interior(&self.min_array(), &self.max_array())
    }

    /// Size along x.
    pub fn length_x(&self) -> T {
        self.max_x - self.min_x
    }

    /// Size along y.
    pub fn length_y(&self) -> T {
        self.max_y - self.min_y
    }

    /// Size along both axes.
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.length_x(), self.length_y())
    }

    /// [`size`](Self::size) written into `dest`.
    pub fn size_into<'a>(&self, dest: &'a mut Vec2<T>) -> &'a mut Vec2<T> {
        *dest = self.size();
        dest
    }

    /// Area, `length_x * length_y`.
    pub fn area(&self) -> T {
        self.length_x() * self.length_y()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        let (min, max) = bounds::union(
            &self.min_array(),
            &self.max_array(),
            &other.min_array(),
            &other.max_array(),
        );
        Self::from_arrays(min, max)
    }

    /// [`union`](Self::union) written into `dest`.
    pub fn union_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.union(other);
        dest
    }

    /// Smallest rectangle containing this one and the point.
    pub fn union_point(&self, point: &Point2<T>) -> Self {
        let (min, max) =
            bounds::union_point(&self.min_array(), &self.max_array(), &[point.x, point.y]);
        Self::from_arrays(min, max)
    }

    /// [`union_point`](Self::union_point) written into `dest`.
    pub fn union_point_into<'a>(&self, point: &Point2<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.union_point(point);
        dest
    }

    /// Common part of both rectangles, or [`Rectangle::empty`] when it has
    /// no interior.
    ///
    /// `other` may have any precision; the result is in the wider precision
    /// of the pair.
    pub fn intersection<U: Coord>(&self, other: &Rectangle<U>) -> Rectangle<T::Wide>
    where
        T: Widen<U>,
    {
        let (a_min, a_max) = self.widened::<U>();
        let (min, max) = bounds::intersection(
            &a_min,
            &a_max,
            &rhs::<T, U, 2>(other.min_array()),
            &rhs::<T, U, 2>(other.max_array()),
        );
        if !bounds::has_interior(&min, &max) {
            trace!(lhs = %self, rhs = %other, "rectangle intersection is empty");
            return Rectangle::empty();
        }
        Rectangle::from_arrays(min, max)
    }

    /// [`intersection`](Self::intersection) written into `dest`.
    pub fn intersection_into<'a, U: Coord>(
        &self,
        other: &Rectangle<U>,
        dest: &'a mut Rectangle<T::Wide>,
    ) -> &'a mut Rectangle<T::Wide>
    where
        T: Widen<U>,
    {
        *dest = self.intersection(other);
        dest
    }

    /// Rectangle moved by `offset`.
    pub fn translate(&self, offset: &Vec2<T>) -> Self {
        Self::new(
            self.min_x + offset.x,
            self.min_y + offset.y,
            self.max_x + offset.x,
            self.max_y + offset.y,
        )
    }

    /// [`translate`](Self::translate) written into `dest`.
    pub fn translate_into<'a>(&self, offset: &Vec2<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.translate(offset);
        dest
    }

    /// Scale about the origin.
    pub fn scale(&self, sx: T, sy: T) -> Self {
        self.scale_about(sx, sy, &Point2::new(T::zero(), T::zero()))
    }

    /// [`scale`](Self::scale) written into `dest`.
    pub fn scale_into<'a>(&self, sx: T, sy: T, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.scale(sx, sy);
        dest
    }

    /// Scale about `anchor`: every bound moves to `(bound - anchor) * s + anchor`.
    ///
    /// A negative factor swaps the bounds and leaves an invalid rectangle.
    pub fn scale_about(&self, sx: T, sy: T, anchor: &Point2<T>) -> Self {
        Self::new(
            (self.min_x - anchor.x) * sx + anchor.x,
            (self.min_y - anchor.y) * sy + anchor.y,
            (self.max_x - anchor.x) * sx + anchor.x,
            (self.max_y - anchor.y) * sy + anchor.y,
        )
    }

    /// [`scale_about`](Self::scale_about) written into `dest`.
    pub fn scale_about_into<'a>(
        &self,
        sx: T,
        sy: T,
        anchor: &Point2<T>,
        dest: &'a mut Self,
    ) -> &'a mut Self {
        *dest = self.scale_about(sx, sy, anchor);
        dest
    }

    /// `true` iff `other` lies within this rectangle (closed bounds),
    /// compared in the wider precision of the pair.
    pub fn contains_rectangle<U: Coord>(&self, other: &Rectangle<U>) -> bool
    where
        T: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::contains_box(
            &min,
            &max,
            &rhs::<T, U, 2>(other.min_array()),
            &rhs::<T, U, 2>(other.max_array()),
        )
    }
}

impl<T: Real> Rectangle<T> {
    /// Center point.
    pub fn center(&self) -> Point2<T> {
        Point2::new(
            (self.min_x + self.max_x) * T::HALF,
            (self.min_y + self.max_y) * T::HALF,
        )
    }

    /// [`center`](Self::center) written into `dest`.
    pub fn center_into<'a>(&self, dest: &'a mut Point2<T>) -> &'a mut Point2<T> {
        *dest = self.center();
        dest
    }
}

impl<T: Coord> Default for Rectangle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Coord> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {}) < ({} {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl<T: Coord> Shape2D for Rectangle<T> {
    type Scalar = T;

    fn contains_point<U: Coord>(&self, point: &Point2<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::contains_point_open(&min, &max, &widen_point2::<T, U>(point))
    }

    fn intersects_rectangle<U: Coord>(&self, rectangle: &Rectangle<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::overlaps_open(
            &min,
            &max,
            &rhs::<T, U, 2>(rectangle.min_array()),
            &rhs::<T, U, 2>(rectangle.max_array()),
        )
    }

    fn intersects_circle<U: Real>(&self, circle: &Circle<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        let r = <T as Widen<U>>::widen_rhs(circle.r);
        intersect::aabb_intersects_sphere(min, max, rhs::<T, U, 2>(circle.center_array()), r * r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_containment() {
        let r = Rectangled::new(0.0, 0.0, 2.0, 1.0);
        assert!(r.contains_point(&Point2::new(1.0, 0.5)));
        assert!(!r.contains_point(&Point2::new(0.0, 0.5)));
        assert!(!r.contains_point(&Point2::new(1i32, 1)));
    }

    #[test]
    fn test_validity_is_strict() {
        assert!(Rectanglei::new(0, 0, 1, 1).is_valid());
        assert!(!Rectanglei::new(0, 0, 0, 1).is_valid());
        assert!(!Rectanglef::empty().is_valid());
    }

    #[test]
    fn test_intersects_rectangle_open() {
        let a = Rectanglei::new(0, 0, 2, 2);
        assert!(a.intersects_rectangle(&Rectanglef::new(1.5, 1.5, 3.0, 3.0)));
        // Sharing an edge is not an intersection.
        assert!(!a.intersects_rectangle(&Rectanglei::new(2, 0, 4, 2)));
    }

    #[test]
    fn test_intersection_and_union() {
        let a = Rectanglei::new(0, 0, 4, 4);
        let b = Rectanglei::new(2, 1, 6, 3);
        assert_eq!(a.intersection(&b), Rectangle::new(2, 1, 4, 3));
        assert_eq!(a.union(&b), Rectangle::new(0, 0, 6, 4));
        // Touching rectangles have no common interior.
        let c = Rectanglei::new(4, 0, 5, 4);
        assert_eq!(a.intersection(&c), Rectanglei::empty());
    }

    #[test]
    fn test_intersection_mixed_precision() {
        let a = Rectanglei::new(0, 0, 4, 4);
        let b = Rectangled::new(1.5, -1.0, 6.0, 2.5);
        let c: Rectangled = a.intersection(&b);
        assert_eq!(c, Rectangle::new(1.5, 0.0, 4.0, 2.5));
        assert_eq!(b.intersection(&a), c);

        let mut dest = Rectanglef::default();
        let unit = Rectanglef::new(0.0, 0.0, 1.0, 1.0);
        unit.intersection_into(&Rectanglei::new(0, 0, 2, 2), &mut dest);
        assert_eq!(dest, unit);
        unit.intersection_into(&Rectanglei::new(1, 0, 2, 1), &mut dest);
        assert_eq!(dest, Rectanglef::empty());
    }

    #[test]
    fn test_measurements() {
        let r = Rectanglef::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(r.length_x(), 3.0);
        assert_eq!(r.length_y(), 4.0);
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.size(), Vec2::new(3.0, 4.0));
        assert_eq!(r.center(), Point2::new(2.5, 4.0));
    }

    #[test]
    fn test_scale_about_anchor() {
        let r = Rectangled::new(1.0, 1.0, 3.0, 3.0);
        let s = r.scale_about(2.0, 0.5, &Point2::new(1.0, 1.0));
        assert_eq!(s, Rectangle::new(1.0, 1.0, 5.0, 2.0));
        assert_eq!(r.scale(2.0, 2.0), Rectangle::new(2.0, 2.0, 6.0, 6.0));

        let mut dest = Rectangled::default();
        r.scale_into(3.0, 1.0, &mut dest);
        assert_eq!(dest, Rectangle::new(3.0, 1.0, 9.0, 3.0));
    }

    #[test]
    fn test_translate_into() {
        let r = Rectanglei::new(0, 0, 1, 1);
        let mut dest = Rectanglei::default();
        r.translate_into(&Vec2::new(2, -1), &mut dest);
        assert_eq!(dest, Rectangle::new(2, -1, 3, 0));
    }

    #[test]
    fn test_contains_rectangle_mixed() {
        let outer = Rectangled::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rectangle(&Rectanglei::new(0, 0, 10, 10)));
        assert!(!outer.contains_rectangle(&Rectanglef::new(-0.5, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_intersects_circle() {
        let r = Rectanglei::new(0, 0, 2, 2);
        assert!(r.intersects_circle(&Circle::new(3.0f32, 1.0, 1.0)));
        assert!(!r.intersects_circle(&Circle::new(3.0f64, 3.0, 1.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rectanglei::new(0, 1, 2, 3).to_string(), "(0 1) < (2 3)");
    }
}
