//! Engine configuration and default tuning constants.

use crate::geometry::Point;
use twirl_animation::{ExponentialDecay, DEFAULT_DECAY_FACTOR, DEFAULT_SNAP_THRESHOLD};

/// Minimum |release velocity| in rad/s that starts an inertial spin.
///
/// A slower release just stops the dial where the finger left it.
pub const FLING_VELOCITY: f32 = 2.0;

/// Decay frames per second the host timer is expected to deliver.
pub const TICK_RATE: f32 = 60.0;

/// Tuning and geometry of a dial engine.
///
/// The engine assumes values are sane (`tick_rate > 0`, `decay_factor` in
/// (0, 1)); it does not defend against a configuration that can never
/// settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialConfig {
    /// Whether drag gestures rotate the dial at all.
    pub spin_enabled: bool,
    /// Whether accumulated rotation may go below zero.
    ///
    /// When false the total is clamped to ≥ 0 after every update; there is
    /// no bounce-back.
    pub allow_negative: bool,
    /// Velocity multiplier applied on every decay tick.
    pub decay_factor: f32,
    /// |velocity| in rad/s below which a spin snaps to a stop.
    pub snap_threshold: f32,
    /// Minimum |release velocity| in rad/s required to start a spin.
    pub fling_threshold: f32,
    /// Decay frames per second delivered by the host timer.
    pub tick_rate: f32,
    /// Geometric center of the dial, in the same coordinate space as the
    /// pointer samples.
    pub center: Point,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            spin_enabled: true,
            allow_negative: false,
            decay_factor: DEFAULT_DECAY_FACTOR,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            fling_threshold: FLING_VELOCITY,
            tick_rate: TICK_RATE,
            center: Point::ZERO,
        }
    }
}

impl DialConfig {
    /// Default tuning around the given dial center.
    pub fn centered_at(center: Point) -> Self {
        Self {
            center,
            ..Self::default()
        }
    }

    pub fn with_allow_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    pub fn with_fling_threshold(mut self, fling_threshold: f32) -> Self {
        self.fling_threshold = fling_threshold;
        self
    }

    /// Decay parameters in the form the animation crate consumes.
    pub fn decay(&self) -> ExponentialDecay {
        ExponentialDecay::new(self.decay_factor, self.snap_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning_constants() {
        let config = DialConfig::default();
        assert!(config.spin_enabled);
        assert!(!config.allow_negative);
        assert_eq!(config.fling_threshold, FLING_VELOCITY);
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.decay(), ExponentialDecay::default());
    }
}
