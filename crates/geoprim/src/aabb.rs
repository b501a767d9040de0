//! Axis-aligned bounding box.

use std::fmt;

use geoprim_kernel::bounds;
use geoprim_kernel::intersect;
use geoprim_kernel::SegmentHit;
use geoprim_math::{
    partial_max, partial_min, widen_point3, Coord, Mat4, Point3, Real, Vec2, Vec3, Widen,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::axis::Axis;
use crate::error::Result;
use crate::shape::{lhs, rhs, Shape3D};
use crate::{LineSegment, Plane, Ray, Sphere};

/// Axis-aligned box with closed bounds.
///
/// A box is valid iff `min <= max` on every axis. Validity is never enforced:
/// the empty box ([`Aabb::empty`]) is the canonical invalid value and is what
/// [`Aabb::intersection`] returns for disjoint inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb<T> {
    /// Minimum X coordinate.
    pub min_x: T,
    /// Minimum Y coordinate.
    pub min_y: T,
    /// Minimum Z coordinate.
    pub min_z: T,
    /// Maximum X coordinate.
    pub max_x: T,
    /// Maximum Y coordinate.
    pub max_y: T,
    /// Maximum Z coordinate.
    pub max_z: T,
}

/// Single-precision box.
pub type Aabbf = Aabb<f32>;
/// Double-precision box.
pub type Aabbd = Aabb<f64>;
/// Integer box.
pub type Aabbi = Aabb<i32>;

impl<T: Coord> Aabb<T> {
    /// Create a box from its six bounds.
    pub fn new(min_x: T, min_y: T, min_z: T, max_x: T, max_y: T, max_z: T) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Create a box from its min and max corners.
    pub fn from_corners(min: &Point3<T>, max: &Point3<T>) -> Self {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }

    /// The empty box: `min = +inf`, `max = -inf` (`i32::MAX` / `i32::MIN`
    /// for integers). Identity of [`union`](Self::union).
    pub fn empty() -> Self {
        let (min, max) = bounds::empty();
        Self::from_arrays(min, max)
    }

    pub(crate) fn from_arrays(min: [T; 3], max: [T; 3]) -> Self {
        Self::new(min[0], min[1], min[2], max[0], max[1], max[2])
    }

    pub(crate) fn min_array(&self) -> [T; 3] {
        [self.min_x, self.min_y, self.min_z]
    }

    pub(crate) fn max_array(&self) -> [T; 3] {
        [self.max_x, self.max_y, self.max_z]
    }

    /// Both corners in the common precision of `T` and `U`.
    pub(crate) fn widened<U: Coord>(&self) -> ([T::Wide; 3], [T::Wide; 3])
    where
        T: Widen<U>,
    {
        (
            lhs::<T, U, 3>(self.min_array()),
            lhs::<T, U, 3>(self.max_array()),
        )
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3<T> {
        Point3::new(self.min_x, self.min_y, self.min_z)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3<T> {
        Point3::new(self.max_x, self.max_y, self.max_z)
    }

    /// `true` iff `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        bounds::is_valid(&self.min_array(), &self.max_array())
    }

    /// Minimum coordinate along an axis.
    pub fn min_along(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
            Axis::Z => self.min_z,
        }
    }

    /// Maximum coordinate along an axis.
    pub fn max_along(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
            Axis::Z => self.max_z,
        }
    }

    /// Minimum coordinate of component `0..=2`.
    pub fn try_min(&self, component: usize) -> Result<T> {
        Ok(self.min_along(Axis::try_from(component)?))
    }

    /// Maximum coordinate of component `0..=2`.
    pub fn try_max(&self, component: usize) -> Result<T> {
        Ok(self.max_along(Axis::try_from(component)?))
    }

    /// Minimum coordinate of component `0..=2`.
    ///
    /// # Panics
    ///
    /// Panics if `component > 2`. Use [`try_min`](Self::try_min) for a
    /// checked version.
    pub fn get_min(&self, component: usize) -> T {
        self.try_min(component).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Maximum coordinate of component `0..=2`.
    ///
    /// # Panics
    ///
    /// Panics if `component > 2`.
    pub fn get_max(&self, component: usize) -> T {
        self.try_max(component).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Smallest box containing both boxes.
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

    /// Smallest box containing this box and the point.
    pub fn union_point(&self, point: &Point3<T>) -> Self {
        let (min, max) = bounds::union_point(
            &self.min_array(),
            &self.max_array(),
            &[point.x, point.y, point.z],
        );
        Self::from_arrays(min, max)
    }

    /// [`union_point`](Self::union_point) written into `dest`.
    pub fn union_point_into<'a>(&self, point: &Point3<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.union_point(point);
        dest
    }

    /// Common part of both boxes, or [`Aabb::empty`] if they are disjoint on
    /// any axis. Touching boxes intersect in a flat box.
    pub fn intersection(&self, other: &Self) -> Self {
        let (min, max) = bounds::intersection(
            &self.min_array(),
            &self.max_array(),
            &other.min_array(),
            &other.max_array(),
        );
        let result = Self::from_arrays(min, max);
        if !result.is_valid() {
            trace!(lhs = %self, rhs = %other, "aabb intersection is empty");
        }
        result
    }

    /// [`intersection`](Self::intersection) written into `dest`.
    pub fn intersection_into<'a>(&self, other: &Self, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.intersection(other);
        dest
    }

    /// Box moved by `offset`.
    ///
    /// Integer boxes use plain `i32` arithmetic; translating the empty
    /// integer box overflows.
    pub fn translate(&self, offset: &Vec3<T>) -> Self {
        Self::new(
            self.min_x + offset.x,
            self.min_y + offset.y,
            self.min_z + offset.z,
            self.max_x + offset.x,
            self.max_y + offset.y,
            self.max_z + offset.z,
        )
    }

    /// [`translate`](Self::translate) written into `dest`.
    pub fn translate_into<'a>(&self, offset: &Vec3<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.translate(offset);
        dest
    }

    /// `true` iff `other` lies within this box (closed bounds), compared in
    /// the wider precision of the pair.
    pub fn contains_aabb<U: Coord>(&self, other: &Aabb<U>) -> bool
    where
        T: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::contains_box(
            &min,
            &max,
            &rhs::<T, U, 3>(other.min_array()),
            &rhs::<T, U, 3>(other.max_array()),
        )
    }

    /// Box-sphere test against a sphere given by `center` and *squared*
    /// radius.
    pub fn intersects_sphere_squared<U: Real>(&self, center: &Point3<U>, radius_squared: U) -> bool
    where
        T: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        intersect::aabb_intersects_sphere(
            min,
            max,
            widen_point3::<T, U>(center),
            <T as Widen<U>>::widen_rhs(radius_squared),
        )
    }
}

impl<T: Real> Aabb<T> {
    /// Center point.
    pub fn center(&self) -> Point3<T> {
        Point3::new(
            (self.min_x + self.max_x) * T::HALF,
            (self.min_y + self.max_y) * T::HALF,
            (self.min_z + self.max_z) * T::HALF,
        )
    }

    /// [`center`](Self::center) written into `dest`.
    pub fn center_into<'a>(&self, dest: &'a mut Point3<T>) -> &'a mut Point3<T> {
        *dest = self.center();
        dest
    }

    /// Half of the size along each axis.
    pub fn extent(&self) -> Vec3<T> {
        Vec3::new(
            (self.max_x - self.min_x) * T::HALF,
            (self.max_y - self.min_y) * T::HALF,
            (self.max_z - self.min_z) * T::HALF,
        )
    }

    /// [`extent`](Self::extent) written into `dest`.
    pub fn extent_into<'a>(&self, dest: &'a mut Vec3<T>) -> &'a mut Vec3<T> {
        *dest = self.extent();
        dest
    }

    /// Bounding box of this box under an affine transform (Arvo's method).
    ///
    /// Only the upper 3x4 part of `m` is used. An invalid box stays empty.
    pub fn transform(&self, m: &Mat4<T>) -> Self {
        if !self.is_valid() {
            return Self::empty();
        }
        let min = self.min_array();
        let max = self.max_array();
        let mut new_min = [T::zero(); 3];
        let mut new_max = [T::zero(); 3];
        for i in 0..3 {
            new_min[i] = m[(i, 3)];
            new_max[i] = m[(i, 3)];
            for j in 0..3 {
                let a = m[(i, j)] * min[j];
                let b = m[(i, j)] * max[j];
                new_min[i] = new_min[i] + partial_min(a, b);
                new_max[i] = new_max[i] + partial_max(a, b);
            }
        }
        Self::from_arrays(new_min, new_max)
    }

    /// [`transform`](Self::transform) written into `dest`.
    pub fn transform_into<'a>(&self, m: &Mat4<T>, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.transform(m);
        dest
    }
}

impl<T: Coord> Default for Aabb<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Coord> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) < ({} {} {})",
            self.min_x, self.min_y, self.min_z, self.max_x, self.max_y, self.max_z
        )
    }
}

impl<T: Coord> Shape3D for Aabb<T> {
    type Scalar = T;

    fn contains_point<U: Coord>(&self, point: &Point3<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::contains_point_closed(&min, &max, &widen_point3::<T, U>(point))
    }

    fn intersects_plane<U, W>(&self, plane: &Plane<U>) -> bool
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        let (min, max) = self.widened::<U>();
        intersect::plane_intersects_aabb(rhs::<T, U, 4>(plane.coefficients()), min, max)
    }

    fn intersects_aabb<U: Coord>(&self, aabb: &Aabb<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        bounds::overlaps_closed(
            &min,
            &max,
            &rhs::<T, U, 3>(aabb.min_array()),
            &rhs::<T, U, 3>(aabb.max_array()),
        )
    }

    fn intersects_sphere<U: Real>(&self, sphere: &Sphere<U>) -> bool
    where
        Self::Scalar: Widen<U>,
    {
        let (min, max) = self.widened::<U>();
        let r = <T as Widen<U>>::widen_rhs(sphere.r);
        intersect::aabb_intersects_sphere(min, max, rhs::<T, U, 3>(sphere.center_array()), r * r)
    }

    fn intersect_ray<U, W>(&self, ray: &Ray<U>) -> Option<Vec2<W>>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        let (min, max) = self.widened::<U>();
        intersect::intersect_ray_aabb(
            rhs::<T, U, 3>(ray.origin_array()),
            rhs::<T, U, 3>(ray.dir_array()),
            min,
            max,
        )
        .map(|(t_near, t_far)| Vec2::new(t_near, t_far))
    }

    fn intersect_line_segment<U, W>(&self, segment: &LineSegment<U>) -> SegmentHit<W>
    where
        U: Real,
        W: Real,
        Self::Scalar: Widen<U, Wide = W>,
    {
        let (min, max) = self.widened::<U>();
        intersect::intersect_segment_aabb(
            rhs::<T, U, 3>(segment.p0_array()),
            rhs::<T, U, 3>(segment.p1_array()),
            min,
            max,
        )
    }
}
