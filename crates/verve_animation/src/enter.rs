//! Screen enter transitions
//!
//! An enter transition fades, lifts, and scales content into view when a
//! screen first becomes visible. The transition is described declaratively
//! as an [`EnterTransition`], registered with the scheduler, and sampled
//! every frame through an [`EnterBinding`].
//!
//! # Example
//!
//! ```ignore
//! let binding = EnterBinding::start(scheduler().clone(), EnterTransition::default());
//!
//! // Each frame:
//! let frame = binding.sample();
//! // frame.opacity, frame.translate_y, frame.scale
//! ```

use crate::easing::Easing;
use crate::scheduler::{SchedulerHandle, TransitionId};
use crate::spring::SpringConfig;

/// Default duration for a timed enter transition
pub const DEFAULT_ENTER_MS: u32 = 300;

/// Starting frame for the default enter transition: invisible, shifted down,
/// slightly shrunk
const DEFAULT_FROM: EnterFrame = EnterFrame {
    opacity: 0.0,
    translate_y: 24.0,
    scale: 0.95,
};

/// One sample of an enter transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnterFrame {
    /// Content opacity, 0.0..=1.0
    pub opacity: f32,
    /// Vertical offset in logical pixels
    pub translate_y: f32,
    /// Uniform content scale
    pub scale: f32,
}

impl EnterFrame {
    pub const fn new(opacity: f32, translate_y: f32, scale: f32) -> Self {
        Self {
            opacity,
            translate_y,
            scale,
        }
    }

    /// The at-rest frame: fully visible, no offset, natural size
    pub const fn settled() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }

    /// Linear interpolation between two frames
    pub fn lerp(a: &EnterFrame, b: &EnterFrame, t: f32) -> EnterFrame {
        EnterFrame {
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            translate_y: a.translate_y + (b.translate_y - a.translate_y) * t,
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }

    /// Clamp opacity into its legal range
    pub fn clamped(mut self) -> Self {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self
    }
}

impl Default for EnterFrame {
    fn default() -> Self {
        Self::settled()
    }
}

/// How a transition advances toward the settled frame
#[derive(Clone, Copy, Debug)]
pub(crate) enum EnterDrive {
    /// Fixed duration through an easing curve
    Timed { duration_ms: f32, easing: Easing },
    /// Three springs, one per channel, all targeting the settled frame
    Spring(SpringConfig),
}

/// Declarative description of an enter transition
///
/// Always animates from its `from` frame to [`EnterFrame::settled`].
#[derive(Clone, Copy, Debug)]
pub struct EnterTransition {
    pub(crate) from: EnterFrame,
    pub(crate) drive: EnterDrive,
}

impl EnterTransition {
    /// A timed transition over `duration_ms`, ease-out
    pub fn timed(duration_ms: u32) -> Self {
        Self {
            from: DEFAULT_FROM,
            drive: EnterDrive::Timed {
                duration_ms: duration_ms as f32,
                easing: Easing::EaseOut,
            },
        }
    }

    /// A spring-driven transition
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            from: DEFAULT_FROM,
            drive: EnterDrive::Spring(config),
        }
    }

    /// Override the starting frame
    pub fn from(mut self, frame: EnterFrame) -> Self {
        self.from = frame;
        self
    }

    /// Override the easing curve (timed transitions only)
    pub fn easing(mut self, easing: Easing) -> Self {
        if let EnterDrive::Timed {
            easing: ref mut e, ..
        } = self.drive
        {
            *e = easing;
        }
        self
    }
}

impl Default for EnterTransition {
    fn default() -> Self {
        Self::timed(DEFAULT_ENTER_MS)
    }
}

/// A running enter transition, sampled per frame
///
/// The binding owns its scheduler entry: dropping it removes the transition.
/// If the scheduler is gone, registration failed, or the transition has
/// finished, [`EnterBinding::sample`] returns the settled frame, so content
/// can never be left invisible.
pub struct EnterBinding {
    handle: Option<SchedulerHandle>,
    id: Option<TransitionId>,
}

impl EnterBinding {
    /// Register `transition` with the scheduler behind `handle`
    pub fn start(handle: SchedulerHandle, transition: EnterTransition) -> Self {
        let id = handle.start_transition(transition);
        if id.is_none() {
            tracing::warn!("enter transition registration failed; rendering settled");
        }
        Self {
            handle: Some(handle),
            id,
        }
    }

    /// A binding that is already at rest
    pub fn settled() -> Self {
        Self {
            handle: None,
            id: None,
        }
    }

    /// Current frame, opacity clamped; settled once finished or detached
    pub fn sample(&self) -> EnterFrame {
        match (&self.handle, self.id) {
            (Some(handle), Some(id)) => handle
                .sample_transition(id)
                .unwrap_or_else(EnterFrame::settled)
                .clamped(),
            _ => EnterFrame::settled(),
        }
    }

    /// Whether the scheduler still tracks this transition
    pub fn is_active(&self) -> bool {
        match (&self.handle, self.id) {
            (Some(handle), Some(id)) => handle.sample_transition(id).is_some(),
            _ => false,
        }
    }
}

impl Drop for EnterBinding {
    fn drop(&mut self) {
        if let (Some(handle), Some(id)) = (&self.handle, self.id) {
            handle.remove_transition(id);
        }
    }
}
