//! Capability traits implemented by the 3D and 2D shapes.
//!
//! Every method is generic in the precision of its operand. The computation
//! runs in the wider of the two precisions (see [`Widen`]), so a `f32` box
//! can be tested against a `f64` ray without narrowing the ray.
//!
//! Methods that need division or square roots (planes, rays, segments)
//! carry a second type parameter `W` naming the common precision and
//! require it to be floating point. It is always inferred.

use geoprim_kernel::SegmentHit;
use geoprim_math::{Coord, Point2, Point3, Real, Vec2, Widen};

use crate::{Aabb, Circle, LineSegment, Plane, Ray, Rectangle, Sphere};

/// Spatial queries on a closed 3D shape.
pub trait Shape3D {
    /// Coordinate type the shape is stored in.
    type Scalar: Coord;

    /// Whether the point lies inside the shape.
    fn contains_point<U: Coord>(&self, point: &Point3<U>) -> bool
    where
        Self::Scalar: Widen<U>;

    /// Whether the shape touches the plane. The plane need not be normalized.
    fn intersects_plane<U, W>(&self, plane: &Plane<U>) -> bool
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>;

    /// Whether the shape overlaps the box. Touching counts.
    fn intersects_aabb<U: Coord>(&self, aabb: &Aabb<U>) -> bool
    where
        Self::Scalar: Widen<U>;

    /// Whether the shape overlaps the sphere. Touching counts.
    fn intersects_sphere<U: Real>(&self, sphere: &Sphere<U>) -> bool
    where
        Self::Scalar: Widen<U>;

    /// Whether the ray hits the shape.
    fn intersects_ray<U, W>(&self, ray: &Ray<U>) -> bool
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        self.intersect_ray::<U, W>(ray).is_some()
    }

    /// Entry and exit parameters `(t_near, t_far)` of the ray, in units of
    /// the ray direction. `t_near` is negative when the origin is inside.
    fn intersect_ray<U, W>(&self, ray: &Ray<U>) -> Option<Vec2<W>>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>;

    /// Classify the line segment against the shape.
    fn intersect_line_segment<U, W>(&self, segment: &LineSegment<U>) -> SegmentHit<W>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>;
}

/// Spatial queries on a 2D shape.
pub trait Shape2D {
    /// Coordinate type the shape is stored in.
    type Scalar: Coord;

    /// Whether the point lies inside the shape.
    fn contains_point<U: Coord>(&self, point: &Point2<U>) -> bool
    where
        Self::Scalar: Widen<U>;

    /// Whether the shape overlaps the rectangle.
    fn intersects_rectangle<U: Coord>(&self, rectangle: &Rectangle<U>) -> bool
    where
        Self::Scalar: Widen<U>;

    /// Whether the shape overlaps the circle. Touching counts.
    fn intersects_circle<U: Real>(&self, circle: &Circle<U>) -> bool
    where
        Self::Scalar: Widen<U>;
}

/// Widen the components of the left-hand operand.
#[inline]
pub(crate) fn lhs<T, U, const N: usize>(v: [T; N]) -> [T::Wide; N]
where
    T: Widen<U>,
    U: Coord,
{
    v.map(<T as Widen<U>>::widen)
}

/// Widen the components of the right-hand operand.
#[inline]
pub(crate) fn rhs<T, U, const N: usize>(v: [U; N]) -> [T::Wide; N]
where
    T: Widen<U>,
    U: Coord,
{
    v.map(<T as Widen<U>>::widen_rhs)
}
