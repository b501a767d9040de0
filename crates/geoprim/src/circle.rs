//! Circle.

use std::fmt;

use geoprim_kernel::intersect;
use geoprim_math::{widen_point2, Coord, Point2, Real, Vec2, Widen};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::{lhs, rhs, Shape2D};
use crate::Rectangle;

/// Closed disc given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<T> {
    /// Center X coordinate.
    pub x: T,
    /// Center Y coordinate.
    pub y: T,
    /// Radius.
    pub r: T,
}

/// Single-precision circle.
pub type Circlef = Circle<f32>;
/// Double-precision circle.
pub type Circled = Circle<f64>;

impl<T: Real> Circle<T> {
    /// Create a circle from center coordinates and radius.
    pub fn new(x: T, y: T, r: T) -> Self {
        Self { x, y, r }
    }

    /// Create a circle from a center point and radius.
    pub fn from_center(center: &Point2<T>, r: T) -> Self {
        Self::new(center.x, center.y, r)
    }

    /// Center point.
    pub fn center(&self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }

    pub(crate) fn center_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Circle moved by `offset`.
    pub fn translate(&self, offset: &Vec2<T>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.r)
    }

    /// [`translate`](Self::translate) written into `dest`.
    pub fn translate_into<'a>(&self, offset: &Vec2<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.translate(offset);
        dest
    }
}

impl<T: Real> fmt::Display for Circle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.r)
    }
}

impl<T: Real> Shape2D for Circle<T> {
    type Scalar = T;

    fn contains_point<U: Coord>(&self, point: &Point2<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        intersect::sphere_contains_point(
            lhs::<T, U, 2>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
            widen_point2::<T, U>(point),
        )
    }

    fn intersects_rectangle<U: Coord>(&self, rectangle: &Rectangle<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let r = <T as Widen<U>>::widen(self.r);
        intersect::aabb_intersects_sphere(
            rhs::<T, U, 2>(rectangle.min_array()),
            rhs::<T, U, 2>(rectangle.max_array()),
            lhs::<T, U, 2>(self.center_array()),
            r * r,
        )
    }

    fn intersects_circle<U: Real>(&self, circle: &Circle<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        intersect::spheres_intersect(
            lhs::<T, U, 2>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
            rhs::<T, U, 2>(circle.center_array()),
            <T as Widen<U>>::widen_rhs(circle.r),
        )
    }
}
