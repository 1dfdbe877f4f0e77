//! Verve layout
//!
//! A slotmap-keyed view tree over Taffy flexbox styles, render properties
//! for the painting backend, and the screen enter wrapper that fades, lifts,
//! and scales content into view over an optional gradient backdrop.

pub mod element;
pub mod screen;
pub mod tree;

pub use element::{view, Brush, RenderProps, TransformBindings, View, ViewBuilder};
pub use screen::{screen, Screen};
pub use tree::{TreeError, ViewNodeId, ViewTree};

/// Common imports for building screens
pub mod prelude {
    pub use crate::element::{view, Brush, RenderProps, TransformBindings, View, ViewBuilder};
    pub use crate::screen::{screen, Screen};
    pub use crate::tree::{TreeError, ViewNodeId, ViewTree};
    pub use verve_core::{Color, ScalarCell, TransformOp};
    pub use verve_theme::ScreenTheme;
}
