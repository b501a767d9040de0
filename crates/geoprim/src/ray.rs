//! Rays and line segments.

use std::fmt;

use geoprim_math::{Point3, Real, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-infinite ray `origin + t * dir` for `t >= 0`.
///
/// The direction is not required to have unit length; parameters reported
/// by ray queries are in units of `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray<T> {
    /// Origin X coordinate.
    pub origin_x: T,
    /// Origin Y coordinate.
    pub origin_y: T,
    /// Origin Z coordinate.
    pub origin_z: T,
    /// Direction X component.
    pub dir_x: T,
    /// Direction Y component.
    pub dir_y: T,
    /// Direction Z component.
    pub dir_z: T,
}

/// Single-precision ray.
pub type Rayf = Ray<f32>;
/// Double-precision ray.
pub type Rayd = Ray<f64>;

impl<T: Real> Ray<T> {
    /// Create a ray from origin and direction components.
    pub fn new(origin_x: T, origin_y: T, origin_z: T, dir_x: T, dir_y: T, dir_z: T) -> Self {
        Self {
            origin_x,
            origin_y,
            origin_z,
            dir_x,
            dir_y,
            dir_z,
        }
    }

    /// Create a ray from an origin point and a direction vector.
    pub fn from_origin_dir(origin: &Point3<T>, dir: &Vec3<T>) -> Self {
        Self::new(origin.x, origin.y, origin.z, dir.x, dir.y, dir.z)
    }

    /// Origin point.
    pub fn origin(&self) -> Point3<T> {
        Point3::new(self.origin_x, self.origin_y, self.origin_z)
    }

    /// Direction vector.
    pub fn dir(&self) -> Vec3<T> {
        Vec3::new(self.dir_x, self.dir_y, self.dir_z)
    }

    /// Point at parameter `t`.
    pub fn point_at(&self, t: T) -> Point3<T> {
        Point3::new(
            self.origin_x + self.dir_x * t,
            self.origin_y + self.dir_y * t,
            self.origin_z + self.dir_z * t,
        )
    }

    pub(crate) fn origin_array(&self) -> [T; 3] {
        [self.origin_x, self.origin_y, self.origin_z]
    }

    pub(crate) fn dir_array(&self) -> [T; 3] {
        [self.dir_x, self.dir_y, self.dir_z]
    }
}

impl<T: Real> fmt::Display for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) -> ({} {} {})",
            self.origin_x, self.origin_y, self.origin_z, self.dir_x, self.dir_y, self.dir_z
        )
    }
}

/// Line segment from `p0` (`t = 0`) to `p1` (`t = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment<T> {
    /// First endpoint X coordinate.
    pub p0_x: T,
    /// First endpoint Y coordinate.
    pub p0_y: T,
    /// First endpoint Z coordinate.
    pub p0_z: T,
    /// Second endpoint X coordinate.
    pub p1_x: T,
    /// Second endpoint Y coordinate.
    pub p1_y: T,
    /// Second endpoint Z coordinate.
    pub p1_z: T,
}

/// Single-precision line segment.
pub type LineSegmentf = LineSegment<f32>;
/// Double-precision line segment.
pub type LineSegmentd = LineSegment<f64>;

impl<T: Real> LineSegment<T> {
    /// Create a segment from endpoint coordinates.
    pub fn new(p0_x: T, p0_y: T, p0_z: T, p1_x: T, p1_y: T, p1_z: T) -> Self {
        Self {
            p0_x,
            p0_y,
            p0_z,
            p1_x,
            p1_y,
            p1_z,
        }
    }

    /// Create a segment from its endpoints.
    pub fn from_points(p0: &Point3<T>, p1: &Point3<T>) -> Self {
        Self::new(p0.x, p0.y, p0.z, p1.x, p1.y, p1.z)
    }

    /// First endpoint.
    pub fn p0(&self) -> Point3<T> {
        Point3::new(self.p0_x, self.p0_y, self.p0_z)
    }

    /// Second endpoint.
    pub fn p1(&self) -> Point3<T> {
        Point3::new(self.p1_x, self.p1_y, self.p1_z)
    }

    /// Point at parameter `t`; `t` in `[0, 1]` stays on the segment.
    pub fn point_at(&self, t: T) -> Point3<T> {
        Point3::new(
            self.p0_x + (self.p1_x - self.p0_x) * t,
            self.p0_y + (self.p1_y - self.p0_y) * t,
            self.p0_z + (self.p1_z - self.p0_z) * t,
        )
    }

    pub(crate) fn p0_array(&self) -> [T; 3] {
        [self.p0_x, self.p0_y, self.p0_z]
    }

    pub(crate) fn p1_array(&self) -> [T; 3] {
        [self.p1_x, self.p1_y, self.p1_z]
    }
}

impl<T: Real> fmt::Display for LineSegment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) - ({} {} {})",
            self.p0_x, self.p0_y, self.p0_z, self.p1_x, self.p1_y, self.p1_z
        )
    }
}
