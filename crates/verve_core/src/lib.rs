//! Verve core primitives
//!
//! Shared building blocks for the Verve presentation layer:
//!
//! - **Colors and gradients**: RGBA colors with hex tokens, linear gradients
//!   with ordered color stops
//! - **Geometry**: points and sizes in logical pixels
//! - **Transform ops**: ordered transform sequences consumed by the renderer
//! - **Scalar cells**: lock-free single-writer/multi-reader f32 cells that
//!   gesture handlers write and the render pipeline reads every frame
//! - **UI dispatch queue**: explicit hand-off of work from input-processing
//!   contexts onto the UI context

pub mod cell;
pub mod color;
pub mod dispatch;
pub mod geometry;
pub mod gradient;
pub mod transform;

pub use cell::{ScalarCell, ScalarReader, ScalarWriter};
pub use color::Color;
pub use dispatch::{UiDispatchQueue, UiTask};
pub use geometry::{Point, Size};
pub use gradient::{GradientStop, LinearGradient};
pub use transform::{TransformOp, TransformOps};
