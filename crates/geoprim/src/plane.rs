//! Plane in general form.

use std::fmt;

use geoprim_kernel::intersect;
use geoprim_math::{Point3, Real, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// The normal `(a, b, c)` is not required to have unit length and is never
/// normalized implicitly. Call [`normalize`](Self::normalize) first if
/// [`distance`](Self::distance) should be Euclidean.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane<T> {
    /// X component of the normal.
    pub a: T,
    /// Y component of the normal.
    pub b: T,
    /// Z component of the normal.
    pub c: T,
    /// Constant term.
    pub d: T,
}

/// Single-precision plane.
pub type Planef = Plane<f32>;
/// Double-precision plane.
pub type Planed = Plane<f64>;

impl<T: Real> Plane<T> {
    /// Create a plane from its four coefficients.
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` with the given normal. The normal is used as is.
    pub fn from_point_normal(point: &Point3<T>, normal: &Vec3<T>) -> Self {
        let d = -(normal.x * point.x + normal.y * point.y + normal.z * point.z);
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Plane through three points, normal `(p1 - p0) x (p2 - p0)`.
    ///
    /// Collinear points give a zero normal.
    pub fn from_points(p0: &Point3<T>, p1: &Point3<T>, p2: &Point3<T>) -> Self {
        let u = [p1.x - p0.x, p1.y - p0.y, p1.z - p0.z];
        let v = [p2.x - p0.x, p2.y - p0.y, p2.z - p0.z];
        let normal = Vec3::new(
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        );
        Self::from_point_normal(p0, &normal)
    }

    pub(crate) fn coefficients(&self) -> [T; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The (possibly unnormalized) normal `(a, b, c)`.
    pub fn normal(&self) -> Vec3<T> {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Scale all coefficients so the normal has unit length.
    ///
    /// A zero normal yields non-finite coefficients.
    pub fn normalize(&self) -> Self {
        if self.a == T::zero() && self.b == T::zero() && self.c == T::zero() {
            debug!(plane = %self, "normalizing plane with zero normal");
        }
        let [a, b, c, d] = intersect::normalize_plane(self.coefficients());
        Self::new(a, b, c, d)
    }

    /// [`normalize`](Self::normalize) written into `dest`.
    pub fn normalize_into<'a>(&self, dest: &'a mut Self) -> &'a mut Self {
        *dest = self.normalize();
        dest
    }

    /// Value of the plane equation at `point`.
    ///
    /// Signed Euclidean distance when the plane is normalized, scaled by the
    /// normal's length otherwise.
    pub fn distance(&self, point: &Point3<T>) -> T {
        intersect::plane_distance(self.coefficients(), [point.x, point.y, point.z])
    }
}

impl<T: Real> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.a, self.b, self.c, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_point_normal() {
        let p = Planed::from_point_normal(&Point3::new(0.0, 0.0, 2.0), &Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(p, Plane::new(0.0, 0.0, 1.0, -2.0));
        assert_relative_eq!(p.distance(&Point3::new(3.0, 4.0, 5.0)), 3.0);
    }

    #[test]
    fn test_from_points() {
        let p = Planed::from_points(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(1.0, 0.0, 1.0),
            &Point3::new(0.0, 1.0, 1.0),
        );
        // Counter-clockwise winding gives +z.
        assert_eq!(p.normal(), Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.distance(&Point3::new(0.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn test_normalize() {
        let p = Planef::new(0.0, 3.0, 4.0, -10.0);
        assert_relative_eq!(p.distance(&Point3::new(0.0, 0.0, 0.0)), -10.0);

        let mut dest = Planef::default();
        let n = *p.normalize_into(&mut dest);
        assert_relative_eq!(n.normal().norm(), 1.0);
        assert_relative_eq!(n.distance(&Point3::new(0.0, 0.0, 0.0)), -2.0);
        assert_eq!(n, dest);
    }

    #[test]
    fn test_normalize_zero_normal() {
        let n = Planed::new(0.0, 0.0, 0.0, 1.0).normalize();
        assert!(!n.d.is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Planed::new(0.0, 1.0, 0.0, -2.5).to_string(), "[0 1 0 -2.5]");
    }
}
