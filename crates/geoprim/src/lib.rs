#![warn(missing_docs)]

//! Axis-aligned boxes, spheres, rectangles, circles, planes and rays with
//! containment, intersection and distance tests.
//!
//! Every shape is a plain `Copy` value generic over its coordinate type.
//! Queries between shapes of different precision widen both operands first
//! (see [`geoprim_math::Widen`]), so an `Aabbi` can be tested against a
//! `Sphered` without a manual conversion.
//!
//! # Architecture
//!
//! - [`Aabb`], [`Sphere`] - 3D volumes implementing [`Shape3D`]
//! - [`Rectangle`], [`Circle`] - 2D areas implementing [`Shape2D`]
//! - [`Plane`], [`Ray`], [`LineSegment`] - query operands
//! - [`Shape3`], [`Shape2`] - closed unions for heterogeneous collections
//!
//! Operations come in two flavors: a by-value form returning a new shape and
//! an `_into` form writing into a caller-provided destination.
//!
//! ```
//! use geoprim::{Aabb, Ray, Shape3D};
//!
//! let unit = Aabb::new(0, 0, 0, 1, 1, 1);
//! let ray = Ray::new(-1.0f64, 0.5, 0.5, 1.0, 0.0, 0.0);
//! let t = unit.intersect_ray(&ray).unwrap();
//! assert_eq!((t.x, t.y), (1.0, 2.0));
//! ```

mod aabb;
mod axis;
mod circle;
mod dispatch;
mod error;
mod plane;
mod ray;
mod rectangle;
mod shape;
mod sphere;

pub use aabb::{Aabb, Aabbd, Aabbf, Aabbi};
pub use axis::Axis;
pub use circle::{Circle, Circled, Circlef};
pub use dispatch::{Plane3, Point2Any, Point3Any, Ray3, Segment3, Shape2, Shape3};
pub use error::{GeomError, Result};
pub use plane::{Plane, Planed, Planef};
pub use ray::{LineSegment, LineSegmentd, LineSegmentf, Ray, Rayd, Rayf};
pub use rectangle::{Rectangle, Rectangled, Rectanglef, Rectanglei};
pub use shape::{Shape2D, Shape3D};
pub use sphere::{Sphere, Sphered, Spheref};

pub use geoprim_kernel::{SegmentClass, SegmentHit};
pub use geoprim_math::{Coord, Mat4, Point2, Point3, Real, Vec2, Vec3, Widen};
