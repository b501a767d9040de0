#![warn(missing_docs)]

//! Scalar types for the geoprim primitives.
//!
//! Thin layer over nalgebra and num-traits providing the scalar
//! abstraction every shape and kernel routine is generic over:
//!
//! - [`Coord`] - any coordinate type a shape can be stored in (`f32`, `f64`, `i32`)
//! - [`Real`] - the floating-point subset used by ray, sphere and plane math
//! - [`Widen`] - the precision lattice used when two operands disagree
//!
//! Widening always goes towards the wider type. A `f64` box tested against a
//! `f32` box compares in `f64`; an `i32` box against a `f32` box compares in
//! `f32`, which is exact only up to `2^24`.

use std::fmt;
use std::ops::Neg;

use num_traits::{Float, Num};

/// A point in 2D space.
pub type Point2<T> = nalgebra::Point2<T>;

/// A point in 3D space.
pub type Point3<T> = nalgebra::Point3<T>;

/// A vector in 2D space. Also carries `(t_near, t_far)` pairs.
pub type Vec2<T> = nalgebra::Vector2<T>;

/// A vector in 3D space.
pub type Vec3<T> = nalgebra::Vector3<T>;

/// A 4x4 affine transformation matrix.
pub type Mat4<T> = nalgebra::Matrix4<T>;

// =============================================================================
// Scalar traits
// =============================================================================

/// A coordinate type shapes can be stored in.
///
/// Only ring arithmetic and ordering are available here, which is enough for
/// containment, overlap and squared-distance tests in every precision.
pub trait Coord:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + Default
    + fmt::Display
    + Send
    + Sync
    + Num
    + Neg<Output = Self>
{
    /// Minimum corner coordinate of the empty (invalid) box.
    const EMPTY_MIN: Self;
    /// Maximum corner coordinate of the empty (invalid) box.
    const EMPTY_MAX: Self;
}

/// A floating-point coordinate type.
pub trait Real: Coord + Float {
    /// `0.5` in this precision.
    const HALF: Self;
}

impl Coord for f32 {
    const EMPTY_MIN: Self = f32::INFINITY;
    const EMPTY_MAX: Self = f32::NEG_INFINITY;
}

impl Coord for f64 {
    const EMPTY_MIN: Self = f64::INFINITY;
    const EMPTY_MAX: Self = f64::NEG_INFINITY;
}

impl Coord for i32 {
    const EMPTY_MIN: Self = i32::MAX;
    const EMPTY_MAX: Self = i32::MIN;
}

impl Real for f32 {
    const HALF: Self = 0.5;
}

impl Real for f64 {
    const HALF: Self = 0.5;
}

/// Smaller of two values. Returns `b` when the values are unordered.
#[inline]
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values. Returns `b` when the values are unordered.
#[inline]
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Absolute value for any [`Coord`].
#[inline]
pub fn abs<T: Coord>(v: T) -> T {
    if v < T::zero() {
        -v
    } else {
        v
    }
}

// =============================================================================
// Widening lattice
// =============================================================================

/// Common precision of `Self` and `Rhs`.
///
/// `Wide` is the wider of the two types. Implemented for every pair of
/// `f32`, `f64` and `i32`.
///
/// Every conversion is exact except `i32` into `f32`: integers beyond
/// `2^24` in magnitude round to the nearest representable `f32`, so an
/// `i32`/`f32` pair can compare equal where the integers differ. Use an `f64`
/// operand when integer coordinates exceed that range.
pub trait Widen<Rhs: Coord>: Coord {
    /// The precision a mixed computation runs in.
    type Wide: Coord;

    /// Convert the left-hand operand.
    fn widen(self) -> Self::Wide;

    /// Convert the right-hand operand.
    fn widen_rhs(rhs: Rhs) -> Self::Wide;
}

macro_rules! widen {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Widen<$rhs> for $lhs {
                type Wide = $out;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn widen(self) -> $out {
                    self as $out
                }

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn widen_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

widen! {
    f32, f32 => f32;
    f32, f64 => f64;
    f32, i32 => f32;
    f64, f32 => f64;
    f64, f64 => f64;
    f64, i32 => f64;
    i32, f32 => f32;
    i32, f64 => f64;
    i32, i32 => i32;
}

/// Widen the components of a 3D point.
#[inline]
pub fn widen_point3<T: Widen<U>, U: Coord>(p: &Point3<U>) -> [T::Wide; 3] {
    [T::widen_rhs(p.x), T::widen_rhs(p.y), T::widen_rhs(p.z)]
}

/// Widen the components of a 2D point.
#[inline]
pub fn widen_point2<T: Widen<U>, U: Coord>(p: &Point2<U>) -> [T::Wide; 2] {
    [T::widen_rhs(p.x), T::widen_rhs(p.y)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinels() {
        assert_eq!(<f32 as Coord>::EMPTY_MIN, f32::INFINITY);
        assert_eq!(<f64 as Coord>::EMPTY_MAX, f64::NEG_INFINITY);
        assert_eq!(<i32 as Coord>::EMPTY_MIN, i32::MAX);
        assert_eq!(<i32 as Coord>::EMPTY_MAX, i32::MIN);
    }

    #[test]
    fn test_widen_goes_to_wider_type() {
        let w: f64 = <f32 as Widen<f64>>::widen(0.1f32);
        assert_eq!(w, f64::from(0.1f32));
        let w: f64 = <f64 as Widen<f32>>::widen_rhs(0.1f32);
        assert_eq!(w, f64::from(0.1f32));
        let w: f32 = <i32 as Widen<f32>>::widen(-7);
        assert_eq!(w, -7.0);
        let w: i32 = <i32 as Widen<i32>>::widen_rhs(3);
        assert_eq!(w, 3);
    }

    #[test]
    fn test_widen_keeps_double_precision() {
        // The f64 operand must not be rounded through f32.
        let fine = 1.0 + 1e-12;
        let w: f64 = <f32 as Widen<f64>>::widen_rhs(fine);
        assert_eq!(w, fine);
    }

    #[test]
    fn test_i32_into_f32_rounds_past_2_pow_24() {
        let exact: f32 = <f32 as Widen<i32>>::widen_rhs(16_777_216);
        assert_eq!(exact, 16_777_216.0);
        let rounded: f32 = <f32 as Widen<i32>>::widen_rhs(16_777_217);
        assert_eq!(rounded, 16_777_216.0);
        // Through f64 the two stay apart.
        let wide: f64 = <f64 as Widen<i32>>::widen_rhs(16_777_217);
        assert_eq!(wide, 16_777_217.0);
    }

    #[test]
    fn test_partial_min_max_abs() {
        assert_eq!(partial_min(1, 2), 1);
        assert_eq!(partial_max(1.5, -2.0), 1.5);
        assert_eq!(abs(-3), 3);
        assert_eq!(abs(2.5f32), 2.5);
        // Unordered comparisons fall through to the second operand.
        assert_eq!(partial_min(f64::NAN, 1.0), 1.0);
    }

    #[test]
    fn test_widen_point3() {
        let p = Point3::new(1i32, 2, 3);
        let w = widen_point3::<f64, i32>(&p);
        assert_eq!(w, [1.0, 2.0, 3.0]);
    }
}
