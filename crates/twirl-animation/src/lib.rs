//! Animation primitives for the twirl dial.
//!
//! The dial has exactly one animation: the inertial spin that keeps a flung
//! dial rotating after the finger lifts. It is a discrete-time exponential
//! decay stepped by an external frame timer, not a time-sampled curve.

pub mod decay;

pub use decay::{
    DecayAnimation, DecayStep, ExponentialDecay, DEFAULT_DECAY_FACTOR, DEFAULT_SNAP_THRESHOLD,
};
