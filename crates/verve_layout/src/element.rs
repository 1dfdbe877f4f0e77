//! Render properties and the view builder trait

use taffy::prelude::*;

use verve_core::{Color, LinearGradient, ScalarReader, TransformOp, TransformOps};

use crate::tree::{ViewNodeId, ViewTree};

/// Background fill for an element
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Linear gradient with coordinates normalized to the element box
    LinearGradient(LinearGradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    fn from(gradient: LinearGradient) -> Self {
        Brush::LinearGradient(gradient)
    }
}

/// Visual properties the painter applies to a node
///
/// Transform ops apply first-to-last; order is part of the contract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderProps {
    /// Background fill (solid color or gradient)
    pub background: Option<Brush>,
    /// Element opacity; `None` inherits
    pub opacity: Option<f32>,
    /// Ordered transform sequence
    pub transform: TransformOps,
}

impl RenderProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background brush
    pub fn with_background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    /// Set the opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Append a transform op
    pub fn with_transform_op(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }
}

/// Read-only transform cells sampled every frame during rendering
///
/// Gesture handlers own the writing half of each cell; the tree only ever
/// holds readers. Ops resolve in a fixed order: scale, then rotate-x, then
/// rotate-y.
#[derive(Clone, Default)]
pub struct TransformBindings {
    /// Uniform scale (press feedback)
    pub scale: Option<ScalarReader>,
    /// Rotation around the horizontal axis, degrees (tilt)
    pub rotate_x: Option<ScalarReader>,
    /// Rotation around the vertical axis, degrees (tilt)
    pub rotate_y: Option<ScalarReader>,
}

impl TransformBindings {
    /// Whether any cell is bound
    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.rotate_x.is_none() && self.rotate_y.is_none()
    }

    /// Sample all bound cells into transform ops
    pub fn resolve_into(&self, transform: &mut TransformOps) {
        if let Some(scale) = &self.scale {
            transform.push(TransformOp::Scale(scale.get()));
        }
        if let Some(rotate_x) = &self.rotate_x {
            transform.push(TransformOp::RotateX(rotate_x.get()));
        }
        if let Some(rotate_y) = &self.rotate_y {
            transform.push(TransformOp::RotateY(rotate_y.get()));
        }
    }
}

/// Something that can build itself into a [`ViewTree`]
pub trait ViewBuilder {
    fn build(&self, tree: &mut ViewTree) -> ViewNodeId;
}

/// A basic container element
///
/// Defaults to a column flex container sized by its content. Used directly
/// for plain boxes and as the content of screens.
pub struct View {
    style: Style,
    props: RenderProps,
    bindings: TransformBindings,
    children: Vec<Box<dyn ViewBuilder>>,
}

/// Create a container element
pub fn view() -> View {
    View {
        style: Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            ..Style::default()
        },
        props: RenderProps::default(),
        bindings: TransformBindings::default(),
        children: Vec::new(),
    }
}

impl View {
    /// Fixed width in pixels
    pub fn w(mut self, width: f32) -> Self {
        self.style.size.width = Dimension::Length(width);
        self
    }

    /// Fixed height in pixels
    pub fn h(mut self, height: f32) -> Self {
        self.style.size.height = Dimension::Length(height);
        self
    }

    /// Fill the parent's width
    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    /// Fill the parent's height
    pub fn h_full(mut self) -> Self {
        self.style.size.height = Dimension::Percent(1.0);
        self
    }

    /// Lay out children in a row
    pub fn flex_row(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    /// Lay out children in a column
    pub fn flex_col(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Grow to fill available space
    pub fn flex_grow(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self
    }

    /// Take the element out of flow and pin it to all four parent edges
    pub fn absolute_fill(mut self) -> Self {
        self.style.position = Position::Absolute;
        self.style.inset = Rect {
            left: LengthPercentageAuto::Length(0.0),
            right: LengthPercentageAuto::Length(0.0),
            top: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Length(0.0),
        };
        self.style.size = Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Percent(1.0),
        };
        self
    }

    /// Set the background brush
    pub fn bg(mut self, brush: impl Into<Brush>) -> Self {
        self.props.background = Some(brush.into());
        self
    }

    /// Bind uniform scale to a cell written by a press gesture
    pub fn bind_scale(mut self, scale: ScalarReader) -> Self {
        self.bindings.scale = Some(scale);
        self
    }

    /// Bind both tilt rotations to cells written by a tilt gesture
    pub fn bind_tilt(mut self, rotate_x: ScalarReader, rotate_y: ScalarReader) -> Self {
        self.bindings.rotate_x = Some(rotate_x);
        self.bindings.rotate_y = Some(rotate_y);
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl ViewBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ViewBuilder for View {
    fn build(&self, tree: &mut ViewTree) -> ViewNodeId {
        let node = tree.create_node(self.style.clone(), self.props.clone());
        if !self.bindings.is_empty() {
            tree.attach_bindings(node, self.bindings.clone())
                .expect("nodes created in this tree");
        }
        for child in &self.children {
            let child_node = child.build(tree);
            tree.add_child(node, child_node)
                .expect("nodes created in this tree");
        }
        node
    }
}
