#![warn(missing_docs)]

//! Numeric kernel behind the geoprim shape predicates.
//!
//! Every routine here is a pure function over raw coordinate arrays,
//! generic over the scalar type. Shapes in the `geoprim` crate widen their
//! operands to a common precision and call straight into this crate.
//!
//! # Architecture
//!
//! - [`bounds`] - N-dimensional box arithmetic: union, intersection with the
//!   empty sentinel, containment, overlap, nearest-point distance
//! - [`intersect`] - ray/box slab test, ray/sphere quadratic, plane tests,
//!   sphere tests and segment classification
//!
//! Degenerate input (zero direction, negative radius, unnormalized plane) is
//! never rejected. It flows through the arithmetic and yields a
//! deterministic answer.

pub mod bounds;
pub mod intersect;

pub use intersect::{SegmentClass, SegmentHit};
