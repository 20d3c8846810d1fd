//! Geometric primitives and touch-angle math.

use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Angle of `position` around `center`, in radians normalized to `[0, 2π)`.
///
/// Screen coordinates grow downward, so the y component is flipped to keep
/// angles growing counterclockwise: a touch to the right of center is 0, a
/// touch straight above it is π/2.
pub fn touch_angle(center: Point, position: Point) -> f32 {
    let angle = (center.y - position.y).atan2(position.x - center.x);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Wraps the difference between two `[0, 2π)` angles into `(−π, π]`.
///
/// A drag crossing the 0/2π seam produces a raw difference near ±2π; one
/// correction restores the short way around.
pub fn wrap_angle_delta(delta: f32) -> f32 {
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Point at `angle` radians on the circle of `radius` around `center`.
///
/// Inverse of [`touch_angle`]; handy for hosts that synthesize circular
/// drags (demos, tests).
pub fn point_at_angle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y - radius * angle.sin(),
    )
}
