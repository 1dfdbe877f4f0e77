//! Ordered transform sequences
//!
//! The renderer consumes transforms as an ordered list of named operations
//! rather than a flattened affine matrix: the tilt rotations are around the
//! X and Y axes, which a 2D matrix cannot represent, and application order
//! is part of the style contract (a translate followed by a scale is not a
//! scale followed by a translate).

use smallvec::SmallVec;

/// A single transform operation
///
/// Rotations are in degrees. Scale is uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Vertical translation in logical pixels
    TranslateY(f32),
    /// Uniform scale around the element center
    Scale(f32),
    /// Rotation around the horizontal axis, degrees
    RotateX(f32),
    /// Rotation around the vertical axis, degrees
    RotateY(f32),
}

/// An ordered transform sequence, applied first-to-last
pub type TransformOps = SmallVec<[TransformOp; 4]>;
