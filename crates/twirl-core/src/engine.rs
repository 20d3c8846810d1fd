//! The dial engine: gesture lifecycle, rotation accounting, inertial spin.

use std::f32::consts::PI;
use std::mem;
use std::rc::Rc;

use smallvec::SmallVec;
use twirl_animation::{DecayAnimation, DecayStep};

use crate::config::DialConfig;
use crate::gesture::{GestureWindow, PointerSample};

/// Observer notified whenever the dial's reported rotation changes.
///
/// Listeners are invoked synchronously from [`SpinnerEngine::pointer_move`],
/// [`SpinnerEngine::pointer_up`] and [`SpinnerEngine::tick`], on the thread
/// driving the engine.
pub trait RotationListener {
    fn rotation_changed(&self, degrees: i32);
}

/// What the engine is currently doing.
///
/// Gesture and spin state live inside their variants, so there is no
/// "tracking fields exist but no gesture is active" limbo to check for.
enum Phase {
    Idle,
    Tracking(GestureWindow),
    Decaying(DecayAnimation),
}

/// Rotation-tracking and deceleration state machine for a spinnable dial.
///
/// The host feeds pointer samples and frame ticks; the engine accumulates
/// rotation in radians and reports whole degrees to registered listeners.
/// Strictly single-threaded: every call must come from the one logical
/// thread that delivers input events and timer ticks, and no call blocks.
///
/// Sign convention: the touch angle grows counterclockwise on screen, and
/// the dial counts clockwise turns as positive rotation, so each angular
/// delta is applied negated.
pub struct SpinnerEngine {
    config: DialConfig,
    total_radians: f32,
    phase: Phase,
    listeners: SmallVec<[Rc<dyn RotationListener>; 2]>,
}

impl SpinnerEngine {
    pub fn new(config: DialConfig) -> Self {
        Self {
            config,
            total_radians: 0.0,
            phase: Phase::Idle,
            listeners: SmallVec::new(),
        }
    }

    /// Registers an observer for rotation changes.
    ///
    /// Listeners are invoked in registration order.
    pub fn add_listener(&mut self, listener: Rc<dyn RotationListener>) {
        self.listeners.push(listener);
    }

    /// Replaces the active configuration.
    ///
    /// Accumulated rotation is untouched. A spin already in flight keeps the
    /// decay parameters captured when it started; the new values apply from
    /// the next gesture on.
    pub fn configure(&mut self, config: DialConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Accumulated rotation in radians.
    pub fn total_radians(&self) -> f32 {
        self.total_radians
    }

    /// Accumulated rotation in whole degrees, truncated toward zero.
    pub fn total_degrees(&self) -> i32 {
        (self.total_radians / PI * 180.0) as i32
    }

    /// Current angular velocity in rad/s: the live gesture's window velocity
    /// while tracking, the spin velocity while decaying, otherwise 0.
    pub fn velocity(&self) -> f32 {
        match &self.phase {
            Phase::Idle => 0.0,
            Phase::Tracking(window) => window.velocity(),
            Phase::Decaying(spin) => spin.velocity(),
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking(_))
    }

    pub fn is_decaying(&self) -> bool {
        matches!(self.phase, Phase::Decaying(_))
    }

    /// Begins tracking a new gesture.
    ///
    /// Cancels any spin still in flight; a pointer-down while a previous
    /// gesture never saw its pointer-up simply restarts tracking from the
    /// new sample.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        if !self.config.spin_enabled {
            return;
        }
        if self.is_decaying() {
            log::debug!("spin interrupted by new touch");
        }
        let window = GestureWindow::open(self.config.center, sample);
        log::trace!("gesture began at {:.3} rad", window.current_angle());
        self.phase = Phase::Tracking(window);
    }

    /// Applies the rotation between the previous sample and this one.
    pub fn pointer_move(&mut self, sample: PointerSample) {
        if !self.config.spin_enabled {
            return;
        }
        let center = self.config.center;
        let Phase::Tracking(window) = &mut self.phase else {
            return;
        };
        let delta = window.advance(center, sample);
        self.apply_rotation(-delta);
        self.notify();
    }

    /// Finalizes the gesture and, for a fast enough release, starts a spin.
    pub fn pointer_up(&mut self, sample: PointerSample) {
        let mut window = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Tracking(window) => window,
            other => {
                self.phase = other;
                return;
            }
        };

        if self.config.spin_enabled {
            // Capture the last sliver of motion between the final move and
            // the release.
            let delta = window.advance(self.config.center, sample);
            self.apply_rotation(-delta);
            self.notify();
        }

        let velocity = window.velocity();
        if velocity.abs() >= self.config.fling_threshold {
            log::debug!("fling released at {:.2} rad/s", velocity);
            self.phase = Phase::Decaying(DecayAnimation::new(
                self.config.decay(),
                velocity,
                self.config.tick_rate,
            ));
        } else {
            log::trace!("release at {:.2} rad/s, below fling threshold", velocity);
        }
    }

    /// Advances an active spin by one frame.
    ///
    /// No-op unless decaying, so ticks a host delivers after cancellation
    /// fall through harmlessly.
    pub fn tick(&mut self) {
        let Phase::Decaying(spin) = &mut self.phase else {
            return;
        };
        let step = spin.tick();
        match step {
            DecayStep::Rotate(angle) => {
                self.apply_rotation(-angle);
                self.notify();
            }
            DecayStep::Settled => {
                log::debug!("spin settled at {} deg", self.total_degrees());
                self.phase = Phase::Idle;
            }
        }
    }

    /// Force-stops any active spin.
    pub fn cancel(&mut self) {
        if self.is_decaying() {
            log::debug!("spin cancelled");
            self.phase = Phase::Idle;
        }
    }

    fn apply_rotation(&mut self, angle: f32) {
        let next = self.total_radians + angle;
        self.total_radians = if self.config.allow_negative {
            next
        } else {
            next.max(0.0)
        };
    }

    fn notify(&self) {
        let degrees = self.total_degrees();
        for listener in &self.listeners {
            listener.rotation_changed(degrees);
        }
    }
}
