//! Verve gesture factories
//!
//! Declarative touch-gesture configurations for the presentation layer:
//!
//! - **Press**: tap recognition with scale-down feedback and a completion
//!   callback marshaled onto the UI context
//! - **Tilt**: pan translation mapped linearly onto X/Y rotation, snapping
//!   back to neutral on release
//!
//! A [`GestureConfig`] is an immutable description of recognizer behavior.
//! The host gesture runtime owns the begin/update/finalize lifecycle and
//! calls back into the config; this crate never tracks pointer state itself.

pub mod constants;
pub mod factory;
pub mod recognizer;

pub use constants::{
    DEFAULT_TAP_TIMEOUT, MAX_TAP_HOLD, PRESS_SCALE, TILT_MAX_DEG, TILT_RANGE_PX,
};
pub use factory::{Gestures, OnPress};
pub use recognizer::{GestureConfig, GestureEvent, GestureHandler, GestureKind, GesturePhase};
