//! Exponential decay for inertial spins.
//!
//! Velocity shrinks by a constant factor on every frame until it falls under
//! a snap threshold, at which point the spin stops dead rather than easing
//! asymptotically to zero.

/// Velocity multiplier applied on every decay tick.
pub const DEFAULT_DECAY_FACTOR: f32 = 0.95;

/// Angular speed in rad/s below which a spin snaps to a stop.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.1;

/// Parameters of the per-tick exponential decay.
///
/// `decay_factor` must lie in (0, 1) and `snap_threshold` must be positive
/// for the decay to terminate; out-of-range values are a caller bug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// Velocity multiplier per tick.
    pub decay_factor: f32,
    /// |velocity| below which the spin settles.
    pub snap_threshold: f32,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_FACTOR, DEFAULT_SNAP_THRESHOLD)
    }
}

impl ExponentialDecay {
    pub const fn new(decay_factor: f32, snap_threshold: f32) -> Self {
        Self {
            decay_factor,
            snap_threshold,
        }
    }

    /// Velocity after one tick.
    pub fn next_velocity(&self, velocity: f32) -> f32 {
        velocity * self.decay_factor
    }

    /// Whether a velocity is already under the snap threshold.
    pub fn is_settled(&self, velocity: f32) -> bool {
        velocity.abs() < self.snap_threshold
    }

    /// Upper bound on the number of ticks until a spin starting at
    /// `velocity` settles.
    ///
    /// Geometric decay crosses any positive threshold in
    /// `ceil(ln(threshold / |v0|) / ln(factor))` ticks, so the bound is
    /// finite for every finite starting velocity.
    pub fn ticks_until_rest(&self, velocity: f32) -> u32 {
        if self.is_settled(velocity) {
            return 0;
        }
        let ratio = self.snap_threshold / velocity.abs();
        (ratio.ln() / self.decay_factor.ln()).ceil() as u32
    }
}

/// Outcome of one decay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecayStep {
    /// Keep spinning: rotate by this many radians this frame.
    Rotate(f32),
    /// Velocity dropped under the snap threshold; no rotation this frame.
    Settled,
}

/// A running inertial spin, advanced one frame at a time.
///
/// The caller owns the timer: each scheduled frame it calls [`tick`] and
/// applies the returned rotation, stopping when the step reports
/// [`DecayStep::Settled`].
///
/// [`tick`]: DecayAnimation::tick
#[derive(Debug, Clone, Copy)]
pub struct DecayAnimation {
    spec: ExponentialDecay,
    velocity: f32,
    tick_rate: f32,
}

impl DecayAnimation {
    /// Starts a spin at `velocity` rad/s, stepped at `tick_rate` frames/sec.
    pub fn new(spec: ExponentialDecay, velocity: f32, tick_rate: f32) -> Self {
        Self {
            spec,
            velocity,
            tick_rate,
        }
    }

    /// Current angular velocity in rad/s.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advances the spin by one frame.
    ///
    /// The decayed velocity is applied first, so the rotation returned for a
    /// frame is `new_velocity / tick_rate`.
    pub fn tick(&mut self) -> DecayStep {
        let next = self.spec.next_velocity(self.velocity);
        if self.spec.is_settled(next) {
            return DecayStep::Settled;
        }
        self.velocity = next;
        DecayStep::Rotate(self.velocity / self.tick_rate)
    }
}
