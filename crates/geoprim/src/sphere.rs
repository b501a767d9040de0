//! Sphere.

use std::fmt;

use geoprim_kernel::intersect;
use geoprim_kernel::SegmentHit;
use geoprim_math::{widen_point3, Coord, Point3, Real, Vec2, Vec3, Widen};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::{lhs, rhs, Shape3D};
use crate::{Aabb, LineSegment, Plane, Ray};

/// Sphere given by center and radius. The ball is closed.
///
/// A negative radius is not rejected. Tests square the radius, so most of
/// them behave as if it were positive; the plane test does not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere<T> {
    /// Center X coordinate.
    pub x: T,
    /// Center Y coordinate.
    pub y: T,
    /// Center Z coordinate.
    pub z: T,
    /// Radius.
    pub r: T,
}

/// Single-precision sphere.
pub type Spheref = Sphere<f32>;
/// Double-precision sphere.
pub type Sphered = Sphere<f64>;

impl<T: Real> Sphere<T> {
    /// Create a sphere from center coordinates and radius.
    pub fn new(x: T, y: T, z: T, r: T) -> Self {
        Self { x, y, z, r }
    }

    /// Create a sphere from a center point and radius.
    pub fn from_center(center: &Point3<T>, r: T) -> Self {
        Self::new(center.x, center.y, center.z, r)
    }

    /// Center point.
    pub fn center(&self) -> Point3<T> {
        Point3::new(self.x, self.y, self.z)
    }

    pub(crate) fn center_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Sphere moved by `offset`.
    pub fn translate(&self, offset: &Vec3<T>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.z + offset.z, self.r)
    }

    /// [`translate`](Self::translate) written into `dest`.
    pub fn translate_into<'a>(&self, offset: &Vec3<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.translate(offset);
        dest
    }

    /// Sphere-sphere test against a sphere given by center and *squared*
    /// radius.
    pub fn intersects_sphere_squared(&self, center: &Point3<T>, radius_squared: T) -> bool {
        let r = self.r + radius_squared.sqrt();
        intersect::distance_squared(self.center_array(), [center.x, center.y, center.z]) <= r * r
    }
}

impl<T: Real> fmt::Display for Sphere<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.x, self.y, self.z, self.r)
    }
}

impl<T: Real> Shape3D for Sphere<T> {
    type Scalar = T;

    fn contains_point<U: Coord>(&self, point: &Point3<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        intersect::sphere_contains_point(
            lhs::<T, U, 3>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
            widen_point3::<T, U>(point),
        )
    }

    fn intersects_plane<U, W>(&self, plane: &Plane<U>) -> bool
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        intersect::plane_intersects_sphere(
            rhs::<T, U, 4>(plane.coefficients()),
            lhs::<T, U, 3>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
        )
    }

    fn intersects_aabb<U: Coord>(&self, aabb: &Aabb<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let r = <T as Widen<U>>::widen(self.r);
        intersect::aabb_intersects_sphere(
            rhs::<T, U, 3>(aabb.min_array()),
            rhs::<T, U, 3>(aabb.max_array()),
            lhs::<T, U, 3>(self.center_array()),
            r * r,
        )
    }

    fn intersects_sphere<U: Real>(&self, sphere: &Sphere<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        intersect::spheres_intersect(
            lhs::<T, U, 3>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
            rhs::<T, U, 3>(sphere.center_array()),
            <T as Widen<U>>::widen_rhs(sphere.r),
        )
    }

    fn intersect_ray<U, W>(&self, ray: &Ray<U>) -> Option<Vec2<W>>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        intersect::intersect_ray_sphere(
            rhs::<T, U, 3>(ray.origin_array()),
            rhs::<T, U, 3>(ray.dir_array()),
            lhs::<T, U, 3>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
        )
        .map(|(t_near, t_far)| Vec2::new(t_near, t_far))
    }

    fn intersect_line_segment<U, W>(&self, segment: &LineSegment<U>) -> SegmentHit<W>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        intersect::intersect_segment_sphere(
            rhs::<T, U, 3>(segment.p0_array()),
            rhs::<T, U, 3>(segment.p1_array()),
            lhs::<T, U, 3>(self.center_array()),
            <T as Widen<U>>::widen(self.r),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geoprim_kernel::SegmentClass;

    #[test]
    fn test_contains_point_closed() {
        let s = Sphered::new(0.0, 0.0, 0.0, 1.0);
        assert!(s.contains_point(&Point3::new(0.0, 0.0, 0.0)));
        assert!(s.contains_point(&Point3::new(0.0, 1.0, 0.0)));
        assert!(!s.contains_point(&Point3::new(0.0, 1.0, 0.1)));
        assert!(s.contains_point(&Point3::new(0i32, 0, 1)));
    }

    #[test]
    fn test_intersects_sphere() {
        let a = Spheref::new(0.0, 0.0, 0.0, 1.0);
        assert!(a.intersects_sphere(&Sphered::new(2.0, 0.0, 0.0, 1.0)));
        assert!(!a.intersects_sphere(&Sphered::new(2.0, 0.0, 0.0, 0.9)));
    }

    #[test]
    fn test_intersects_aabb() {
        let s = Sphered::new(0.0, 0.0, 0.0, 1.0);
        assert!(!s.intersects_aabb(&Aabb::new(2.0, 2.0, 2.0, 3.0, 3.0, 3.0)));
        assert!(s.intersects_aabb(&Aabb::new(1, -1, -1, 2, 1, 1)));
    }

    #[test]
    fn test_intersects_sphere_squared() {
        let s = Sphered::new(0.0, 0.0, 0.0, 1.0);
        assert!(s.intersects_sphere_squared(&Point3::new(3.0, 0.0, 0.0), 4.0));
        assert!(!s.intersects_sphere_squared(&Point3::new(3.1, 0.0, 0.0), 4.0));
    }

    #[test]
    fn test_intersects_plane() {
        let s = Sphered::new(0.0, 0.0, 0.0, 2.0);
        assert!(s.intersects_plane(&Plane::new(0.0, 1.0, 0.0, -2.0)));
        assert!(!s.intersects_plane(&Plane::new(0.0f32, 10.0, 0.0, -25.0)));
    }

    #[test]
    fn test_ray_through_center() {
        let s = Sphered::new(1.0, 2.0, 3.0, 2.5);
        let ray = Ray::new(-10.0, 2.0, 3.0, 1.0, 0.0, 0.0);
        let t = s.intersect_ray(&ray).unwrap();
        assert_relative_eq!(t.y - t.x, 5.0);
        assert_relative_eq!(t.x, 8.5);
    }

    #[test]
    fn test_ray_miss_and_inside() {
        let s = Spheref::new(0.0, 0.0, 0.0, 1.0);
        assert!(!s.intersects_ray(&Ray::new(-5.0f32, 2.0, 0.0, 1.0, 0.0, 0.0)));
        let t = s.intersect_ray(&Ray::new(0.0f64, 0.0, 0.0, 0.0, 1.0, 0.0)).unwrap();
        assert!(t.x <= 0.0 && t.y >= 0.0);
    }

    #[test]
    fn test_line_segment() {
        let s = Sphered::new(0.0, 0.0, 0.0, 1.0);
        let hit = s.intersect_line_segment(&LineSegment::new(-2.0, 0.0, 0.0, 2.0, 0.0, 0.0));
        assert_eq!(hit.class(), SegmentClass::TwoIntersection);
        let (t_near, t_far) = hit.window().unwrap();
        assert_relative_eq!(t_near, 0.25);
        assert_relative_eq!(t_far, 0.75);
    }

    #[test]
    fn test_translate_and_display() {
        let s = Spheref::new(1.0, 2.0, 3.0, 0.5).translate(&Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(s, Spheref::new(2.0, 3.0, 4.0, 0.5));
        assert_eq!(s.to_string(), "[2 3 4 0.5]");
    }
}
