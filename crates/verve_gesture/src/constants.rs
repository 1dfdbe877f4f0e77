//! Shared gesture constants
//!
//! Values are in logical pixels and degrees. They are deliberately fixed
//! rather than density-scaled; very high-density touch screens may want to
//! scale the pixel values by the device DPI factor.

use std::time::Duration;

/// Scale applied to pressed content for the duration of a tap.
///
/// A 4% shrink reads clearly as "held" without making the content feel like
/// it is collapsing under the finger.
pub const PRESS_SCALE: f32 = 0.96;

/// Maximum hold duration for a tap before the recognizer gives up.
///
/// Deliberately much longer than [`DEFAULT_TAP_TIMEOUT`]: a user resting a
/// finger on a pressed control must not have the gesture cancelled out from
/// under them while they decide.
pub const MAX_TAP_HOLD: Duration = Duration::from_secs(10);

/// Default tap timeout recognizers fall back to when no maximum is
/// configured. Matches common platform defaults for distinguishing a tap
/// from a long-press.
pub const DEFAULT_TAP_TIMEOUT: Duration = Duration::from_millis(500);

/// Rotation reached at [`TILT_RANGE_PX`] of drag, in degrees.
pub const TILT_MAX_DEG: f32 = 5.0;

/// Drag distance that produces [`TILT_MAX_DEG`] of rotation.
///
/// The mapping is linear and unclamped: drags beyond this distance keep
/// rotating proportionally.
pub const TILT_RANGE_PX: f32 = 100.0;
