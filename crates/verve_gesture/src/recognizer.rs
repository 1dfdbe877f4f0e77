//! Declarative gesture recognizer configurations
//!
//! A [`GestureConfig`] pairs a recognizer kind with handlers for the three
//! lifecycle phases the host runtime drives:
//!
//! ```text
//! begin → update* → finalize
//! ```
//!
//! Finalize fires for completion *and* cancellation (a system gesture
//! stealing the pointer, the screen disappearing). Handlers that must run on
//! release therefore belong in `on_finalize`, never in a success-only hook.
//!
//! Handlers are shared closures; the config holds no other state and can be
//! attached to any view the runtime manages.

use std::sync::Arc;
use std::time::Duration;

/// Which recognizer the runtime should instantiate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Discrete tap with press/release feedback
    Tap,
    /// Continuous drag reporting cumulative translation
    Pan,
}

/// Lifecycle phase of a recognized gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Begin,
    Update,
    Finalize,
}

/// Event payload delivered to gesture handlers
///
/// Translation is cumulative since gesture start, in logical pixels. Begin
/// and finalize events carry zero translation.
#[derive(Clone, Copy, Debug)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl GestureEvent {
    fn at_phase(phase: GesturePhase) -> Self {
        Self {
            phase,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

/// A shared gesture lifecycle handler
pub type GestureHandler = Arc<dyn Fn(&GestureEvent) + Send + Sync>;

/// Immutable description of a recognizer's behavior
///
/// Built once with the chained setters, then handed to the gesture runtime.
/// The runtime invokes one handler at a time per recognizer; handlers are
/// never re-entered concurrently.
#[derive(Clone)]
pub struct GestureConfig {
    kind: GestureKind,
    max_duration: Option<Duration>,
    on_begin: Option<GestureHandler>,
    on_update: Option<GestureHandler>,
    on_finalize: Option<GestureHandler>,
}

impl GestureConfig {
    pub fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            max_duration: None,
            on_begin: None,
            on_update: None,
            on_finalize: None,
        }
    }

    /// Longest the gesture may stay active before the runtime abandons it
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    /// Handler for the begin phase
    pub fn on_begin(mut self, handler: impl Fn(&GestureEvent) + Send + Sync + 'static) -> Self {
        self.on_begin = Some(Arc::new(handler));
        self
    }

    /// Handler for update phases
    pub fn on_update(mut self, handler: impl Fn(&GestureEvent) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Arc::new(handler));
        self
    }

    /// Handler for the finalize phase (completion and cancellation alike)
    pub fn on_finalize(mut self, handler: impl Fn(&GestureEvent) + Send + Sync + 'static) -> Self {
        self.on_finalize = Some(Arc::new(handler));
        self
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn get_max_duration(&self) -> Option<Duration> {
        self.max_duration
    }

    // ========================================================================
    // Runtime entry points
    // ========================================================================

    /// Deliver the begin event
    pub fn begin(&self) {
        tracing::trace!(kind = ?self.kind, "gesture begin");
        if let Some(handler) = &self.on_begin {
            handler(&GestureEvent::at_phase(GesturePhase::Begin));
        }
    }

    /// Deliver an update carrying cumulative translation since begin
    pub fn update(&self, translation_x: f32, translation_y: f32) {
        if let Some(handler) = &self.on_update {
            handler(&GestureEvent {
                phase: GesturePhase::Update,
                translation_x,
                translation_y,
            });
        }
    }

    /// Deliver the finalize event
    pub fn finalize(&self) {
        tracing::trace!(kind = ?self.kind, "gesture finalize");
        if let Some(handler) = &self.on_finalize {
            handler(&GestureEvent::at_phase(GesturePhase::Finalize));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_builder_carries_kind_and_duration() {
        let config = GestureConfig::new(GestureKind::Tap).max_duration(Duration::from_secs(10));
        assert_eq!(config.kind(), GestureKind::Tap);
        assert_eq!(config.get_max_duration(), Some(Duration::from_secs(10)));

        let pan = GestureConfig::new(GestureKind::Pan);
        assert_eq!(pan.get_max_duration(), None);
    }

    #[test]
    fn test_phases_dispatch_to_matching_handlers() {
        let phases = Arc::new(Mutex::new(Vec::new()));

        let begin_log = phases.clone();
        let update_log = phases.clone();
        let finalize_log = phases.clone();
        let config = GestureConfig::new(GestureKind::Pan)
            .on_begin(move |e| begin_log.lock().unwrap().push(e.phase))
            .on_update(move |e| update_log.lock().unwrap().push(e.phase))
            .on_finalize(move |e| finalize_log.lock().unwrap().push(e.phase));

        config.begin();
        config.update(4.0, 2.0);
        config.finalize();

        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                GesturePhase::Begin,
                GesturePhase::Update,
                GesturePhase::Finalize
            ]
        );
    }

    #[test]
    fn test_update_carries_translation() {
        let seen = Arc::new(Mutex::new((0.0f32, 0.0f32)));
        let sink = seen.clone();
        let config = GestureConfig::new(GestureKind::Pan).on_update(move |e| {
            *sink.lock().unwrap() = (e.translation_x, e.translation_y);
        });

        config.update(12.5, -3.0);
        assert_eq!(*seen.lock().unwrap(), (12.5, -3.0));
    }

    #[test]
    fn test_missing_handlers_are_noops() {
        let config = GestureConfig::new(GestureKind::Tap);
        config.begin();
        config.update(1.0, 1.0);
        config.finalize();
    }

    #[test]
    fn test_cloned_config_shares_handlers() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let config = GestureConfig::new(GestureKind::Tap)
            .on_finalize(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let clone = config.clone();
        config.finalize();
        clone.finalize();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
