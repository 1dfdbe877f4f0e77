//! Press and tilt gesture factories
//!
//! Factories take ownership of the scalar-cell writers a screen created and
//! return the recognizer config to attach to a view. The screen keeps the
//! readers and feeds them to the render pipeline.

use std::sync::Arc;

use verve_core::{ScalarWriter, UiDispatchQueue};

use crate::constants::{MAX_TAP_HOLD, PRESS_SCALE, TILT_MAX_DEG, TILT_RANGE_PX};
use crate::recognizer::{GestureConfig, GestureKind};

/// Completion callback for a press gesture, run on the UI context
pub type OnPress = Arc<dyn Fn() + Send + Sync>;

/// Gesture factory bound to the UI dispatch queue
///
/// The queue is where press callbacks are marshaled; recognizer handlers
/// themselves run wherever the host input runtime runs them.
#[derive(Clone)]
pub struct Gestures {
    ui_queue: UiDispatchQueue,
}

impl Gestures {
    pub fn new(ui_queue: UiDispatchQueue) -> Self {
        Self { ui_queue }
    }

    /// A tap gesture with scale-down feedback
    ///
    /// On begin the scale cell drops to [`PRESS_SCALE`]; on finalize it
    /// returns to 1.0 and `on_press`, if supplied, is posted to the UI queue.
    /// Finalize fires for cancellation too, so the scale always recovers and
    /// the callback fires once per finalize, after the scale reset.
    ///
    /// The tap is allowed to stay held for [`MAX_TAP_HOLD`], overriding the
    /// runtime's shorter default.
    pub fn press(&self, scale: ScalarWriter, on_press: Option<OnPress>) -> GestureConfig {
        // One writer, shared between this recognizer's own serialized
        // handlers; the cell stays single-writer.
        let scale = Arc::new(scale);
        let pressed_scale = scale.clone();
        let ui_queue = self.ui_queue.clone();

        GestureConfig::new(GestureKind::Tap)
            .max_duration(MAX_TAP_HOLD)
            .on_begin(move |_| {
                pressed_scale.set(PRESS_SCALE);
            })
            .on_finalize(move |_| {
                scale.set(1.0);
                if let Some(on_press) = &on_press {
                    let on_press = on_press.clone();
                    ui_queue.post(move || on_press());
                }
            })
    }

    /// A pan gesture that tilts content toward the drag
    ///
    /// Every [`TILT_RANGE_PX`] pixels of horizontal drag rotate the content
    /// [`TILT_MAX_DEG`] degrees around the Y axis; vertical drag rotates
    /// inversely around the X axis at the same rate. The mapping is exact
    /// and unclamped. On finalize both rotations snap straight back to zero.
    pub fn tilt(&self, rotate_x: ScalarWriter, rotate_y: ScalarWriter) -> GestureConfig {
        let rotate_x = Arc::new(rotate_x);
        let rotate_y = Arc::new(rotate_y);
        let update_x = rotate_x.clone();
        let update_y = rotate_y.clone();

        GestureConfig::new(GestureKind::Pan)
            .on_update(move |event| {
                update_y.set((event.translation_x / TILT_RANGE_PX) * TILT_MAX_DEG);
                update_x.set(-(event.translation_y / TILT_RANGE_PX) * TILT_MAX_DEG);
            })
            .on_finalize(move |_| {
                rotate_x.set(0.0);
                rotate_y.set(0.0);
            })
    }
}
