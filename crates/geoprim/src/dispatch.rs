//! Closed unions over every shape kind and precision.
//!
//! [`Shape3`] and [`Shape2`] let heterogeneous shapes share one collection.
//! Every query dispatches on both operands to the concrete [`Shape3D`] /
//! [`Shape2D`] implementation, so each pair runs in its own widened
//! precision. Parametric results are reported in `f64`, which holds every
//! `f32` exactly.

use geoprim_kernel::SegmentHit;
use geoprim_math::{Point2, Point3, Vec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::{Shape2D, Shape3D};
use crate::{
    Aabbd, Aabbf, Aabbi, Circled, Circlef, LineSegmentd, LineSegmentf, Planed, Planef, Rayd, Rayf,
    Rectangled, Rectanglef, Rectanglei, Sphered, Spheref,
};

/// Any 3D shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape3 {
    /// Single-precision box.
    Aabbf(Aabbf),
    /// Double-precision box.
    Aabbd(Aabbd),
    /// Integer box.
    Aabbi(Aabbi),
    /// Single-precision sphere.
    Spheref(Spheref),
    /// Double-precision sphere.
    Sphered(Sphered),
}

/// A ray in either floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ray3 {
    /// Single precision.
    Rayf(Rayf),
    /// Double precision.
    Rayd(Rayd),
}

/// A plane in either floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Plane3 {
    /// Single precision.
    Planef(Planef),
    /// Double precision.
    Planed(Planed),
}

/// A line segment in either floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment3 {
    /// Single precision.
    LineSegmentf(LineSegmentf),
    /// Double precision.
    LineSegmentd(LineSegmentd),
}

/// A 3D point in any precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point3Any {
    /// Single precision.
    Point3f(Point3<f32>),
    /// Double precision.
    Point3d(Point3<f64>),
    /// Integer.
    Point3i(Point3<i32>),
}

/// Any 2D shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape2 {
    /// Single-precision rectangle.
    Rectanglef(Rectanglef),
    /// Double-precision rectangle.
    Rectangled(Rectangled),
    /// Integer rectangle.
    Rectanglei(Rectanglei),
    /// Single-precision circle.
    Circlef(Circlef),
    /// Double-precision circle.
    Circled(Circled),
}

/// A 2D point in any precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point2Any {
    /// Single precision.
    Point2f(Point2<f32>),
    /// Double precision.
    Point2d(Point2<f64>),
    /// Integer.
    Point2i(Point2<i32>),
}

macro_rules! each_shape3 {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape3::Aabbf($s) => $body,
            Shape3::Aabbd($s) => $body,
            Shape3::Aabbi($s) => $body,
            Shape3::Spheref($s) => $body,
            Shape3::Sphered($s) => $body,
        }
    };
}

macro_rules! each_shape2 {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape2::Rectanglef($s) => $body,
            Shape2::Rectangled($s) => $body,
            Shape2::Rectanglei($s) => $body,
            Shape2::Circlef($s) => $body,
            Shape2::Circled($s) => $body,
        }
    };
}

macro_rules! impl_from {
    ($union:ident { $($variant:ident),* $(,)? }) => {
        $(
            impl From<$variant> for $union {
                fn from(value: $variant) -> Self {
                    $union::$variant(value)
                }
            }
        )*
    };
}

impl_from!(Shape3 { Aabbf, Aabbd, Aabbi, Spheref, Sphered });
impl_from!(Shape2 { Rectanglef, Rectangled, Rectanglei, Circlef, Circled });
impl_from!(Ray3 { Rayf, Rayd });
impl_from!(Plane3 { Planef, Planed });
impl_from!(Segment3 { LineSegmentf, LineSegmentd });

impl From<Point3<f32>> for Point3Any {
    fn from(p: Point3<f32>) -> Self {
        Point3Any::Point3f(p)
    }
}

impl From<Point3<f64>> for Point3Any {
    fn from(p: Point3<f64>) -> Self {
        Point3Any::Point3d(p)
    }
}

impl From<Point3<i32>> for Point3Any {
    fn from(p: Point3<i32>) -> Self {
        Point3Any::Point3i(p)
    }
}

impl From<Point2<f32>> for Point2Any {
    fn from(p: Point2<f32>) -> Self {
        Point2Any::Point2f(p)
    }
}

impl From<Point2<f64>> for Point2Any {
    fn from(p: Point2<f64>) -> Self {
        Point2Any::Point2d(p)
    }
}

impl From<Point2<i32>> for Point2Any {
    fn from(p: Point2<i32>) -> Self {
        Point2Any::Point2i(p)
    }
}

impl Shape3 {
    /// Whether the two shapes overlap. Touching counts.
    pub fn intersects(&self, other: &Shape3) -> bool {
        each_shape3!(self, a => match other {
            Shape3::Aabbf(b) => a.intersects_aabb(b),
            Shape3::Aabbd(b) => a.intersects_aabb(b),
            Shape3::Aabbi(b) => a.intersects_aabb(b),
            Shape3::Spheref(b) => a.intersects_sphere(b),
            Shape3::Sphered(b) => a.intersects_sphere(b),
        })
    }

    /// Whether the point lies inside the shape.
    pub fn contains_point(&self, point: &Point3Any) -> bool {
        each_shape3!(self, s => match point {
            Point3Any::Point3f(p) => s.contains_point(p),
            Point3Any::Point3d(p) => s.contains_point(p),
            Point3Any::Point3i(p) => s.contains_point(p),
        })
    }

    /// Whether the shape touches the plane.
    pub fn intersects_plane(&self, plane: &Plane3) -> bool {
        each_shape3!(self, s => match plane {
            Plane3::Planef(p) => s.intersects_plane(p),
            Plane3::Planed(p) => s.intersects_plane(p),
        })
    }

    /// Whether the ray hits the shape.
    pub fn intersects_ray(&self, ray: &Ray3) -> bool {
        each_shape3!(self, s => match ray {
            Ray3::Rayf(r) => s.intersects_ray(r),
            Ray3::Rayd(r) => s.intersects_ray(r),
        })
    }

    /// Entry and exit parameters of the ray.
    pub fn intersect_ray(&self, ray: &Ray3) -> Option<Vec2<f64>> {
        each_shape3!(self, s => match ray {
            Ray3::Rayf(r) => s.intersect_ray(r).map(|t| t.map(f64::from)),
            Ray3::Rayd(r) => s.intersect_ray(r).map(|t| t.map(f64::from)),
        })
    }

    /// Classify the segment against the shape.
    pub fn intersect_line_segment(&self, segment: &Segment3) -> SegmentHit<f64> {
        each_shape3!(self, s => match segment {
            Segment3::LineSegmentf(l) => s.intersect_line_segment(l).map(f64::from),
            Segment3::LineSegmentd(l) => s.intersect_line_segment(l).map(f64::from),
        })
    }
}

impl Shape2 {
    /// Whether the two shapes overlap.
    ///
    /// Rectangle pairs use open bounds, every pair involving a circle uses
    /// closed bounds.
    pub fn intersects(&self, other: &Shape2) -> bool {
        each_shape2!(self, a => match other {
            Shape2::Rectanglef(b) => a.intersects_rectangle(b),
            Shape2::Rectangled(b) => a.intersects_rectangle(b),
            Shape2::Rectanglei(b) => a.intersects_rectangle(b),
            Shape2::Circlef(b) => a.intersects_circle(b),
            Shape2::Circled(b) => a.intersects_circle(b),
        })
    }

    /// Whether the point lies inside the shape.
    pub fn contains_point(&self, point: &Point2Any) -> bool {
        each_shape2!(self, s => match point {
            Point2Any::Point2f(p) => s.contains_point(p),
            Point2Any::Point2d(p) => s.contains_point(p),
            Point2Any::Point2i(p) => s.contains_point(p),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aabb, Circle, LineSegment, Plane, Ray, Rectangle, Sphere};
    use approx::assert_relative_eq;
    use geoprim_kernel::SegmentClass;

    fn shapes() -> Vec<Shape3> {
        vec![
            Aabb::new(0.0f32, 0.0, 0.0, 1.0, 1.0, 1.0).into(),
            Aabb::new(0.0f64, 0.0, 0.0, 1.0, 1.0, 1.0).into(),
            Aabb::new(0, 0, 0, 1, 1, 1).into(),
            Sphere::new(0.5f32, 0.5, 0.5, 0.5).into(),
            Sphere::new(0.5f64, 0.5, 0.5, 0.5).into(),
        ]
    }

    #[test]
    fn test_every_pair_intersects() {
        let all = shapes();
        for a in &all {
            for b in &all {
                assert!(a.intersects(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_far_shapes_do_not_intersect() {
        let far: Shape3 = Aabb::new(5, 5, 5, 6, 6, 6).into();
        for s in shapes() {
            assert!(!s.intersects(&far));
            assert!(!far.intersects(&s));
        }
    }

    #[test]
    fn test_ray_dispatch() {
        let ray: Ray3 = Ray::new(-1.0f32, 0.5, 0.5, 1.0, 0.0, 0.0).into();
        let t = Shape3::from(Aabb::new(0, 0, 0, 1, 1, 1)).intersect_ray(&ray).unwrap();
        assert_relative_eq!(t.x, 1.0);
        assert_relative_eq!(t.y, 2.0);

        let ray: Ray3 = Ray::new(-1.0f64, 0.5, 0.5, 1.0, 0.0, 0.0).into();
        let t = Shape3::from(Sphere::new(0.5f32, 0.5, 0.5, 0.5)).intersect_ray(&ray).unwrap();
        assert_relative_eq!(t.y - t.x, 1.0);
        for s in shapes() {
            assert!(s.intersects_ray(&ray));
        }
    }

    #[test]
    fn test_plane_and_point_dispatch() {
        let plane: Plane3 = Plane::new(1.0f64, 0.0, 0.0, -0.5).into();
        let point: Point3Any = Point3::new(0.5f32, 0.5, 0.5).into();
        let outside: Point3Any = Point3::new(2, 2, 2).into();
        for s in shapes() {
            assert!(s.intersects_plane(&plane));
            assert!(s.contains_point(&point));
            assert!(!s.contains_point(&outside));
        }
    }

    #[test]
    fn test_segment_dispatch() {
        let seg: Segment3 = LineSegment::new(-1.0f32, 0.5, 0.5, 2.0, 0.5, 0.5).into();
        for s in shapes() {
            assert_eq!(s.intersect_line_segment(&seg).class(), SegmentClass::TwoIntersection);
        }
    }

    #[test]
    fn test_shape2_dispatch() {
        let all: Vec<Shape2> = vec![
            Rectangle::new(0.0f32, 0.0, 2.0, 2.0).into(),
            Rectangle::new(0.0f64, 0.0, 2.0, 2.0).into(),
            Rectangle::new(0, 0, 2, 2).into(),
            Circle::new(1.0f32, 1.0, 1.0).into(),
            Circle::new(1.0f64, 1.0, 1.0).into(),
        ];
        let center: Point2Any = Point2::new(1, 1).into();
        for a in &all {
            assert!(a.contains_point(&center));
            for b in &all {
                assert!(a.intersects(b));
            }
        }
        let edge = Shape2::from(Rectangle::new(2, 0, 4, 2));
        assert!(!all[2].intersects(&edge));
        // A circle touching the edge does count.
        assert!(Shape2::from(Circle::new(3.0f64, 1.0, 1.0)).intersects(&all[2]));
    }
}
