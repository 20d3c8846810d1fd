//! Core engine for the twirl rotary dial.
//!
//! Converts raw pointer samples into accumulated rotation, estimates the
//! angular velocity of a drag, and runs the frame-by-frame inertial decay
//! after a fling release. Presentation, the view hierarchy and the timer
//! that drives decay frames all belong to the host.

pub mod clock;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod gesture;

#[cfg(test)]
mod tests;

pub use clock::SampleClock;
pub use config::DialConfig;
pub use engine::{RotationListener, SpinnerEngine};
pub use geometry::Point;
pub use gesture::PointerSample;
pub use twirl_animation::{DecayAnimation, DecayStep, ExponentialDecay};

pub mod prelude {
    pub use crate::clock::SampleClock;
    pub use crate::config::{DialConfig, FLING_VELOCITY, TICK_RATE};
    pub use crate::engine::{RotationListener, SpinnerEngine};
    pub use crate::geometry::Point;
    pub use crate::gesture::PointerSample;
}
