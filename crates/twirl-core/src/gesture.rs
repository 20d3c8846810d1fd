//! Pointer samples and the two-sample tracking window of an active drag.

use crate::geometry::{touch_angle, wrap_angle_delta, Point};

/// A single pointer reading delivered by the host.
///
/// The timestamp is host-supplied, in milliseconds on any monotone timeline;
/// see [`SampleClock`](crate::clock::SampleClock) for a ready-made one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub time_ms: i64,
}

impl PointerSample {
    pub const fn new(position: Point, time_ms: i64) -> Self {
        Self { position, time_ms }
    }
}

/// Sliding window over the last two samples of a drag.
///
/// Holds the last two touch angles and their timestamps. The per-move
/// rotation delta and the angular velocity are derived on demand, never
/// stored.
#[derive(Clone, Copy, Debug)]
pub struct GestureWindow {
    previous_angle: f32,
    current_angle: f32,
    start_ms: i64,
    end_ms: i64,
}

impl GestureWindow {
    /// Opens a window at the first touch of a gesture.
    ///
    /// Both angles start equal, so the initial delta and velocity are zero.
    pub fn open(center: Point, sample: PointerSample) -> Self {
        let angle = touch_angle(center, sample.position);
        Self {
            previous_angle: angle,
            current_angle: angle,
            start_ms: sample.time_ms,
            end_ms: sample.time_ms,
        }
    }

    /// Shifts the window to a new sample and returns the wrapped rotation
    /// delta between the previous and new touch angles.
    pub fn advance(&mut self, center: Point, sample: PointerSample) -> f32 {
        self.start_ms = self.end_ms;
        self.end_ms = sample.time_ms;
        self.previous_angle = self.current_angle;
        self.current_angle = touch_angle(center, sample.position);
        self.rotation_delta()
    }

    /// Wrapped angular delta of the current window, in `(−π, π]`.
    pub fn rotation_delta(&self) -> f32 {
        wrap_angle_delta(self.current_angle - self.previous_angle)
    }

    /// Angular velocity over the current window in rad/s.
    ///
    /// A window spanning zero time has zero velocity, so two samples with
    /// the same timestamp can never look like a fling.
    pub fn velocity(&self) -> f32 {
        if self.end_ms == self.start_ms {
            return 0.0;
        }
        self.rotation_delta() / ((self.end_ms - self.start_ms) as f32 / 1000.0)
    }

    /// Latest touch angle in `[0, 2π)`.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }
}
