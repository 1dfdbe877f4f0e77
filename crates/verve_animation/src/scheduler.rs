//! Animation scheduler
//!
//! A manually ticked registry of active springs and enter transitions. The
//! host drives it once per frame:
//!
//! ```ignore
//! let scheduler = AnimationScheduler::new();
//! install_scheduler(scheduler.handle());
//!
//! // Frame loop:
//! let still_animating = scheduler.tick(dt_seconds);
//! ```
//!
//! Handles are weak: owners of [`AnimatedValue`]s and enter bindings never
//! keep the scheduler alive, and every handle operation degrades to a no-op
//! (or `None`) once the scheduler is dropped. Settled springs and finished
//! transitions are reaped during `tick`; readers fall back to the resting
//! value.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::enter::{EnterDrive, EnterFrame, EnterTransition};
use crate::spring::{Spring, SpringConfig};

new_key_type! {
    /// Identifier for a registered spring
    pub struct SpringId;
    /// Identifier for a running enter transition
    pub struct TransitionId;
}

// ============================================================================
// Global handle
// ============================================================================

static GLOBAL_SCHEDULER: Mutex<Option<SchedulerHandle>> = Mutex::new(None);

/// Install a scheduler handle for the whole process
///
/// Screens built afterwards register their enter transitions here. Installing
/// again replaces the previous handle.
pub fn install_scheduler(handle: SchedulerHandle) {
    *GLOBAL_SCHEDULER.lock().unwrap() = Some(handle);
    tracing::debug!("animation scheduler installed");
}

/// The installed scheduler handle, if any
pub fn try_scheduler() -> Option<SchedulerHandle> {
    GLOBAL_SCHEDULER.lock().unwrap().clone()
}

/// The installed scheduler handle
///
/// Panics if none was installed; use [`try_scheduler`] to degrade gracefully.
pub fn scheduler() -> SchedulerHandle {
    match try_scheduler() {
        Some(handle) => handle,
        None => panic!("no animation scheduler installed; call install_scheduler first"),
    }
}

/// Whether a scheduler handle has been installed
pub fn scheduler_installed() -> bool {
    GLOBAL_SCHEDULER.lock().unwrap().is_some()
}

// ============================================================================
// Scheduler
// ============================================================================

/// A running enter transition tracked by the scheduler
struct ActiveTransition {
    from: EnterFrame,
    drive: ActiveDrive,
}

enum ActiveDrive {
    Timed {
        duration_ms: f32,
        easing: crate::easing::Easing,
        elapsed_ms: f32,
    },
    /// One spring per channel, all targeting the settled frame
    Springs {
        opacity: Spring,
        translate_y: Spring,
        scale: Spring,
    },
}

impl ActiveTransition {
    fn start(transition: EnterTransition) -> Self {
        let drive = match transition.drive {
            EnterDrive::Timed {
                duration_ms,
                easing,
            } => ActiveDrive::Timed {
                duration_ms,
                easing,
                elapsed_ms: 0.0,
            },
            EnterDrive::Spring(config) => {
                let settled = EnterFrame::settled();
                let mut opacity = Spring::new(config, transition.from.opacity);
                let mut translate_y = Spring::new(config, transition.from.translate_y);
                let mut scale = Spring::new(config, transition.from.scale);
                opacity.set_target(settled.opacity);
                translate_y.set_target(settled.translate_y);
                scale.set_target(settled.scale);
                ActiveDrive::Springs {
                    opacity,
                    translate_y,
                    scale,
                }
            }
        };
        Self {
            from: transition.from,
            drive,
        }
    }

    fn tick(&mut self, dt: f32) {
        match &mut self.drive {
            ActiveDrive::Timed { elapsed_ms, .. } => *elapsed_ms += dt * 1000.0,
            ActiveDrive::Springs {
                opacity,
                translate_y,
                scale,
            } => {
                opacity.step(dt);
                translate_y.step(dt);
                scale.step(dt);
            }
        }
    }

    fn sample(&self) -> EnterFrame {
        match &self.drive {
            ActiveDrive::Timed {
                duration_ms,
                easing,
                elapsed_ms,
            } => {
                let progress = if *duration_ms <= 0.0 {
                    1.0
                } else {
                    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
                };
                EnterFrame::lerp(&self.from, &EnterFrame::settled(), easing.apply(progress))
            }
            ActiveDrive::Springs {
                opacity,
                translate_y,
                scale,
            } => EnterFrame::new(opacity.value(), translate_y.value(), scale.value()),
        }
    }

    fn is_finished(&self) -> bool {
        match &self.drive {
            ActiveDrive::Timed {
                duration_ms,
                elapsed_ms,
                ..
            } => *elapsed_ms >= *duration_ms,
            ActiveDrive::Springs {
                opacity,
                translate_y,
                scale,
            } => opacity.is_settled() && translate_y.is_settled() && scale.is_settled(),
        }
    }
}

#[derive(Default)]
struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    transitions: SlotMap<TransitionId, ActiveTransition>,
}

/// Registry of active animation work, ticked by the host frame loop
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner::default())),
        }
    }

    /// A weak handle for registering and reading animation work
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all registered work by `dt` seconds
    ///
    /// Settled springs and finished transitions are removed; readers fall
    /// back to resting values. Returns whether any work remains.
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();

        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt);
        }
        inner.springs.retain(|_, spring| !spring.is_settled());

        for (_, transition) in inner.transitions.iter_mut() {
            transition.tick(dt);
        }
        inner.transitions.retain(|_, transition| !transition.is_finished());

        !inner.springs.is_empty() || !inner.transitions.is_empty()
    }

    /// Number of live springs
    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    /// Number of running enter transitions
    pub fn transition_count(&self) -> usize {
        self.inner.lock().unwrap().transitions.len()
    }

    /// Whether anything is still animating
    pub fn has_active(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        !inner.springs.is_empty() || !inner.transitions.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Handle
// ============================================================================

/// Weak, cloneable access to a scheduler
///
/// All operations are no-ops (or return `None`) after the scheduler drops.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a spring; `None` if the scheduler is gone
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().springs.insert(spring))
    }

    /// Retarget a spring; returns whether the spring was found
    pub fn set_spring_target(&self, id: SpringId, target: f32) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let mut inner = inner.lock().unwrap();
        match inner.springs.get_mut(id) {
            Some(spring) => {
                spring.set_target(target);
                true
            }
            None => false,
        }
    }

    /// Current spring value, `None` once settled and reaped
    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.value()))
    }

    /// Whether the spring has settled (reaped springs count as settled)
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .springs
                    .get(id)
                    .map(|s| s.is_settled())
            })
            .unwrap_or(true)
    }

    /// Remove a spring
    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().springs.remove(id);
        }
    }

    /// Begin an enter transition; `None` if the scheduler is gone
    pub fn start_transition(&self, transition: EnterTransition) -> Option<TransitionId> {
        self.inner.upgrade().map(|inner| {
            let id = inner
                .lock()
                .unwrap()
                .transitions
                .insert(ActiveTransition::start(transition));
            tracing::trace!(?id, "enter transition started");
            id
        })
    }

    /// Current transition frame, `None` once finished and reaped
    pub fn sample_transition(&self, id: TransitionId) -> Option<EnterFrame> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .transitions
                .get(id)
                .map(|t| t.sample())
        })
    }

    /// Remove a transition
    pub fn remove_transition(&self, id: TransitionId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().transitions.remove(id);
        }
    }

    /// Whether the scheduler behind this handle is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated value (spring-backed)
// ============================================================================

/// A scalar that animates toward its target with spring physics
///
/// The spring is registered lazily on the first target change and removed
/// when the value drops, so idle values cost the scheduler nothing.
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    /// Resting value while no spring is registered
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Create with the default spring config
    pub fn with_default(handle: SchedulerHandle, initial: f32) -> Self {
        Self::new(handle, initial, SpringConfig::default())
    }

    /// Animate toward a new target
    pub fn set_target(&mut self, target: f32) {
        if let Some(id) = self.spring_id {
            if self.handle.set_spring_target(id, target) {
                self.target = target;
                return;
            }
            // Spring settled and was reaped; it rested at the old target.
            self.current = self.target;
            self.spring_id = None;
        }

        self.target = target;
        if (target - self.current).abs() > 1e-3 {
            let spring = Spring::new(self.config, self.current);
            match self.handle.register_spring(spring) {
                Some(id) => {
                    self.handle.set_spring_target(id, target);
                    self.spring_id = Some(id);
                }
                // Scheduler is gone: snap so readers still converge.
                None => self.current = target,
            }
        } else {
            self.current = target;
        }
    }

    /// Current animated value
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.get_spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Jump to a value with no animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Whether the value is still moving toward its target
    pub fn is_animating(&self) -> bool {
        match self.spring_id {
            Some(id) => !self.handle.is_spring_settled(id),
            None => false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_spring_registry_round_trip() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(10.0);
        let id = handle.register_spring(spring).unwrap();
        assert_eq!(scheduler.spring_count(), 1);

        scheduler.tick(DT);
        let value = handle.get_spring_value(id).unwrap();
        assert!(value > 0.0);
        assert!(value < 10.0);
    }

    #[test]
    fn test_tick_reaps_settled_work() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(1.0);
        let id = handle.register_spring(spring).unwrap();

        for _ in 0..600 {
            scheduler.tick(DT);
        }

        assert_eq!(scheduler.spring_count(), 0);
        assert!(handle.get_spring_value(id).is_none());
        assert!(handle.is_spring_settled(id));
        assert!(!scheduler.has_active());
    }

    #[test]
    fn test_dead_handle_degrades() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        drop(scheduler);

        assert!(!handle.is_alive());
        assert!(handle.register_spring(Spring::new(SpringConfig::stiff(), 0.0)).is_none());
        assert!(handle.start_transition(EnterTransition::default()).is_none());
    }

    #[test]
    fn test_animated_value_tracks_target() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy());

        assert_eq!(value.get(), 0.0);
        assert!(!value.is_animating());

        value.set_target(1.0);
        assert!(value.is_animating());

        for _ in 0..600 {
            scheduler.tick(DT);
        }

        assert!((value.get() - 1.0).abs() < 1e-2);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_animated_value_retarget_after_settle() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy());

        value.set_target(1.0);
        for _ in 0..600 {
            scheduler.tick(DT);
        }
        assert_eq!(scheduler.spring_count(), 0);

        // Reaped spring must not strand the value; a fresh spring registers.
        value.set_target(2.0);
        assert!(value.is_animating());
        for _ in 0..600 {
            scheduler.tick(DT);
        }
        assert!((value.get() - 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_animated_value_set_immediate() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::with_default(scheduler.handle(), 0.0);

        value.set_target(5.0);
        value.set_immediate(3.0);

        assert_eq!(value.get(), 3.0);
        assert!(!value.is_animating());
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_animated_value_drop_removes_spring() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::with_default(scheduler.handle(), 0.0);
        value.set_target(10.0);
        assert_eq!(scheduler.spring_count(), 1);

        drop(value);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_global_install_and_lookup() {
        let scheduler = AnimationScheduler::new();
        install_scheduler(scheduler.handle());

        assert!(scheduler_installed());
        let handle = try_scheduler().unwrap();
        assert!(handle.is_alive());
        assert!(crate::scheduler::scheduler().is_alive());
    }
}
