//! Line segment classification against boxes and spheres.

use geoprim_math::Real;

use super::ray_aabb::slab_window;
use super::ray_sphere::line_sphere_window;
use super::sphere::distance_squared;
use crate::bounds;

/// How a line segment relates to a closed shape.
///
/// Parameters are measured along the segment: `t = 0` is the first endpoint
/// and `t = 1` the second. Every window reported here is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentHit<T> {
    /// The segment does not touch the shape.
    Outside,
    /// Both endpoints are strictly inside. The window is always `(0, 1)`.
    Inside {
        /// Always zero.
        t_near: T,
        /// Always one.
        t_far: T,
    },
    /// The segment crosses the boundary exactly once.
    ///
    /// One endpoint is inside. The window covers the part of the segment
    /// inside the shape, so one of its ends is `0` or `1`.
    OneIntersection {
        /// Start of the inside part.
        t_near: T,
        /// End of the inside part.
        t_far: T,
    },
    /// Both endpoints are outside (or on the boundary) and the segment passes through.
    TwoIntersection {
        /// Entry parameter.
        t_near: T,
        /// Exit parameter.
        t_far: T,
    },
}

/// Fieldless form of [`SegmentHit`], convenient for `match` and equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentClass {
    /// See [`SegmentHit::Outside`].
    Outside,
    /// See [`SegmentHit::Inside`].
    Inside,
    /// See [`SegmentHit::OneIntersection`].
    OneIntersection,
    /// See [`SegmentHit::TwoIntersection`].
    TwoIntersection,
}

impl<T: Copy> SegmentHit<T> {
    /// The classification without its parameters.
    pub fn class(&self) -> SegmentClass {
        match self {
            SegmentHit::Outside => SegmentClass::Outside,
            SegmentHit::Inside { .. } => SegmentClass::Inside,
            SegmentHit::OneIntersection { .. } => SegmentClass::OneIntersection,
            SegmentHit::TwoIntersection { .. } => SegmentClass::TwoIntersection,
        }
    }

    /// The `(t_near, t_far)` window, or `None` when outside.
    pub fn window(&self) -> Option<(T, T)> {
        match *self {
            SegmentHit::Outside => None,
            SegmentHit::Inside { t_near, t_far }
            | SegmentHit::OneIntersection { t_near, t_far }
            | SegmentHit::TwoIntersection { t_near, t_far } => Some((t_near, t_far)),
        }
    }

    /// `true` unless the segment is outside.
    pub fn is_hit(&self) -> bool {
        !matches!(self, SegmentHit::Outside)
    }

    /// Convert the window parameters, keeping the classification.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SegmentHit<U> {
        match self {
            SegmentHit::Outside => SegmentHit::Outside,
            SegmentHit::Inside { t_near, t_far } => SegmentHit::Inside {
                t_near: f(t_near),
                t_far: f(t_far),
            },
            SegmentHit::OneIntersection { t_near, t_far } => SegmentHit::OneIntersection {
                t_near: f(t_near),
                t_far: f(t_far),
            },
            SegmentHit::TwoIntersection { t_near, t_far } => SegmentHit::TwoIntersection {
                t_near: f(t_near),
                t_far: f(t_far),
            },
        }
    }
}

/// Compare a raw line window with the segment's own `[0, 1]`.
fn classify<T: Real>(window: Option<(T, T)>) -> SegmentHit<T> {
    let Some((t_near, t_far)) = window else {
        return SegmentHit::Outside;
    };
    if t_near > T::one() || t_far < T::zero() {
        return SegmentHit::Outside;
    }

    let enters = t_near >= T::zero();
    let exits = t_far <= T::one();
    match (enters, exits) {
        (false, false) => SegmentHit::Inside {
            t_near: T::zero(),
            t_far: T::one(),
        },
        (true, false) => SegmentHit::OneIntersection {
            t_near,
            t_far: T::one(),
        },
        (false, true) => SegmentHit::OneIntersection {
            t_near: T::zero(),
            t_far,
        },
        (true, true) => SegmentHit::TwoIntersection { t_near, t_far },
    }
}

/// Classification of a zero-length segment from the open and closed
/// containment of its single point.
fn point_hit<T: Real>(interior: bool, closed: bool) -> SegmentHit<T> {
    let (t_near, t_far) = (T::zero(), T::one());
    if interior {
        SegmentHit::Inside { t_near, t_far }
    } else if closed {
        SegmentHit::OneIntersection { t_near, t_far }
    } else {
        SegmentHit::Outside
    }
}

/// Classify the segment `p0 -> p1` against the box.
///
/// Runs the slab method on the line through both endpoints with direction
/// `p1 - p0`, then compares the window with the segment's own `[0, 1]`.
/// An endpoint lying exactly on a face counts as a boundary crossing, so a
/// segment from the face inwards is a [`SegmentHit::OneIntersection`].
///
/// A degenerate segment (`p0 == p1`) follows the same rule: `Inside` when the
/// point is strictly inside, `OneIntersection { 0, 1 }` when it lies on the
/// boundary, `Outside` otherwise.
pub fn intersect_segment_aabb<T: Real>(
    p0: [T; 3],
    p1: [T; 3],
    min: [T; 3],
    max: [T; 3],
) -> SegmentHit<T> {
    if p0 == p1 {
        return point_hit(
            bounds::contains_point_open(&min, &max, &p0),
            bounds::contains_point_closed(&min, &max, &p0),
        );
    }
    let dir = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
    classify(slab_window(p0, dir, min, max))
}

/// Classify the segment `p0 -> p1` against the sphere.
///
/// Same classification as [`intersect_segment_aabb`], with the window given
/// by the two roots of the line through the endpoints. A degenerate segment
/// is classified like the box case, with the sphere surface as boundary.
pub fn intersect_segment_sphere<T: Real>(
    p0: [T; 3],
    p1: [T; 3],
    center: [T; 3],
    radius: T,
) -> SegmentHit<T> {
    if p0 == p1 {
        let d = distance_squared(center, p0);
        let r2 = radius * radius;
        return point_hit(d < r2, d <= r2);
    }
    let dir = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
    classify(line_sphere_window(p0, dir, center, radius))
}
