//! Verve animation system
//!
//! Spring physics and timed transitions for the presentation layer.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Easing**: cubic easing curves for timed transitions
//! - **Enter Transitions**: the opacity/offset/scale triple a screen plays
//!   when its content first becomes visible
//! - **Scheduler**: a manually ticked registry of active springs and
//!   transitions, installable as a process-wide handle

pub mod easing;
pub mod enter;
pub mod scheduler;
pub mod spring;

pub use easing::Easing;
pub use enter::{EnterBinding, EnterFrame, EnterTransition};
pub use scheduler::{
    install_scheduler, scheduler, scheduler_installed, try_scheduler, AnimatedValue,
    AnimationScheduler, SchedulerHandle, SpringId, TransitionId,
};
pub use spring::{Spring, SpringConfig};
