//! Screen enter wrapper
//!
//! Wraps a screen's content and plays the enter transition when the screen
//! first becomes visible, optionally over the theme's gradient backdrop.
//!
//! # Example
//!
//! ```ignore
//! use verve_layout::prelude::*;
//!
//! // Gradient backdrop, default transition
//! screen()
//!     .child(content)
//!
//! // No backdrop; the container itself animates
//! screen()
//!     .gradient(false)
//!     .child(content)
//! ```
//!
//! If no animation scheduler is installed the screen renders at rest
//! (opacity 1, no offset, natural scale). Content is never left invisible
//! because the animation source is missing.

use std::sync::Arc;

use taffy::prelude::*;

use verve_animation::{try_scheduler, EnterBinding, EnterTransition};
use verve_theme::ScreenTheme;

use crate::element::{view, Brush, RenderProps, ViewBuilder};
use crate::tree::{ViewNodeId, ViewTree};

/// Screen wrapper with an enter transition and optional gradient backdrop
pub struct Screen {
    children: Vec<Box<dyn ViewBuilder>>,
    gradient: bool,
    transition: EnterTransition,
    theme: ScreenTheme,
    style: Style,
}

/// Container style filling the parent
fn fill_style() -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Percent(1.0),
        },
        ..Style::default()
    }
}

/// Create a screen wrapper
///
/// The backdrop is on by default; the container fills its parent.
pub fn screen() -> Screen {
    Screen {
        children: Vec::new(),
        gradient: true,
        transition: EnterTransition::default(),
        theme: ScreenTheme::default(),
        style: fill_style(),
    }
}

impl Screen {
    /// Set the wrapped content
    pub fn child(mut self, child: impl ViewBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Toggle the gradient backdrop
    pub fn gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Override the enter transition
    pub fn transition(mut self, transition: EnterTransition) -> Self {
        self.transition = transition;
        self
    }

    /// Use a specific theme for the backdrop
    pub fn theme(mut self, theme: ScreenTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Lay out content in a row
    pub fn flex_row(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    /// Lay out content in a column
    pub fn flex_col(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Gap between content children, in pixels
    pub fn gap(mut self, gap: f32) -> Self {
        self.style.gap = Size {
            width: LengthPercentage::Length(gap),
            height: LengthPercentage::Length(gap),
        };
        self
    }

    /// Start the enter transition, falling back to rest when no scheduler
    /// is available
    fn start_enter(&self) -> Arc<EnterBinding> {
        match try_scheduler() {
            Some(handle) => Arc::new(EnterBinding::start(handle, self.transition)),
            None => {
                tracing::warn!("no animation scheduler installed; screen enters at rest");
                Arc::new(EnterBinding::settled())
            }
        }
    }

    fn build_children(&self, tree: &mut ViewTree, parent: ViewNodeId) {
        for child in &self.children {
            let child_node = child.build(tree);
            tree.add_child(parent, child_node)
                .expect("nodes created in this tree");
        }
    }
}

impl ViewBuilder for Screen {
    fn build(&self, tree: &mut ViewTree) -> ViewNodeId {
        let binding = self.start_enter();

        if self.gradient {
            // Backdrop behind, animated content layer in front; only the
            // content layer fades and moves. Layout settings apply to the
            // content layer, which is what actually holds the children.
            let container = tree.create_node(fill_style(), RenderProps::default());

            let backdrop = view()
                .absolute_fill()
                .bg(Brush::LinearGradient(self.theme.bg_gradient(1.0)))
                .build(tree);
            tree.add_child(container, backdrop)
                .expect("nodes created in this tree");

            let content = tree.create_node(self.style.clone(), RenderProps::default());
            tree.attach_enter(content, binding)
                .expect("nodes created in this tree");
            tree.add_child(container, content)
                .expect("nodes created in this tree");

            self.build_children(tree, content);
            container
        } else {
            // No backdrop: the container itself carries the animation.
            let container = tree.create_node(self.style.clone(), RenderProps::default());
            tree.attach_enter(container, binding)
                .expect("nodes created in this tree");
            self.build_children(tree, container);
            container
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_animation::{install_scheduler, AnimationScheduler, EnterFrame};
    use verve_core::{Color, TransformOp};

    /// Depth-first list of nodes carrying a gradient background
    fn gradient_nodes(tree: &ViewTree, root: ViewNodeId) -> Vec<ViewNodeId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(props) = tree.static_props(node) {
                if matches!(props.background, Some(Brush::LinearGradient(_))) {
                    found.push(node);
                }
            }
            stack.extend(tree.children(node));
        }
        found
    }

    #[test]
    fn test_gradient_screen_layers_backdrop_behind_content() {
        let mut tree = ViewTree::new();
        let root = screen()
            .child(view().w(100.0).h(40.0))
            .build(&mut tree);

        let layers = tree.children(root);
        assert_eq!(layers.len(), 2);

        // Backdrop first, gradient-filled, not animated
        let backdrop = layers[0];
        assert!(matches!(
            tree.static_props(backdrop).unwrap().background,
            Some(Brush::LinearGradient(_))
        ));
        assert!(!tree.has_enter(backdrop));

        // Content second, animated, holding the wrapped child
        let content = layers[1];
        assert!(tree.has_enter(content));
        assert_eq!(tree.children(content).len(), 1);
    }

    #[test]
    fn test_plain_screen_has_no_backdrop() {
        let mut tree = ViewTree::new();
        let root = screen()
            .gradient(false)
            .child(view().w(100.0).h(40.0))
            .build(&mut tree);

        assert!(gradient_nodes(&tree, root).is_empty());

        // The container itself animates and holds the content directly
        assert!(tree.has_enter(root));
        assert_eq!(tree.children(root).len(), 1);
    }

    #[test]
    fn test_backdrop_fills_container() {
        let mut tree = ViewTree::new();
        let root = screen().child(view().w(10.0).h(10.0)).build(&mut tree);

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(400.0),
                height: AvailableSpace::Definite(600.0),
            },
        );

        let backdrop = tree.children(root)[0];
        let layout = tree.layout(backdrop).unwrap();
        assert_eq!(layout.size.width, 400.0);
        assert_eq!(layout.size.height, 600.0);
    }

    #[test]
    fn test_backdrop_uses_theme_stops() {
        let mut tree = ViewTree::new();
        let theme = ScreenTheme::dark();
        let expected = theme.colors().bg_gradient;
        let root = screen().theme(theme).build(&mut tree);

        let backdrop = tree.children(root)[0];
        let props = tree.static_props(backdrop).unwrap();
        let Some(Brush::LinearGradient(gradient)) = &props.background else {
            panic!("backdrop must carry the gradient brush");
        };
        let colors: Vec<Color> = gradient.stops.iter().map(|s| s.color).collect();
        assert_eq!(colors, expected.to_vec());
    }

    #[test]
    fn test_layout_settings_reach_content_layer() {
        let mut tree = ViewTree::new();
        let root = screen().flex_row().gap(8.0).build(&mut tree);

        // Gradient mode: the content layer carries the layout settings
        let content = tree.children(root)[1];
        let style = tree.style(content).unwrap();
        assert_eq!(style.flex_direction, FlexDirection::Row);
        assert_eq!(style.gap.width, LengthPercentage::Length(8.0));

        // Plain mode: the container itself does
        let mut tree = ViewTree::new();
        let root = screen().gradient(false).flex_row().build(&mut tree);
        let style = tree.style(root).unwrap();
        assert_eq!(style.flex_direction, FlexDirection::Row);
    }

    // Global-scheduler phases live in one test so install order stays under
    // this test's control.
    #[test]
    fn test_enter_animation_lifecycle_against_scheduler() {
        // Phase 1: nothing installed, the screen renders at rest
        let mut tree = ViewTree::new();
        let root = screen().gradient(false).build(&mut tree);
        let props = tree.resolved_props(root).unwrap();
        assert_eq!(props.opacity, Some(1.0));
        assert_eq!(
            props.transform.as_slice(),
            &[TransformOp::TranslateY(0.0), TransformOp::Scale(1.0)]
        );

        // Phase 2: scheduler installed, the screen animates in
        let scheduler = AnimationScheduler::new();
        install_scheduler(scheduler.handle());

        let mut tree = ViewTree::new();
        let root = screen().gradient(false).build(&mut tree);

        let props = tree.resolved_props(root).unwrap();
        assert!(props.opacity.unwrap() < 0.5);
        let Some(&TransformOp::TranslateY(ty)) = props.transform.first() else {
            panic!("translate must come first");
        };
        assert!(ty > 0.0);
        assert!(matches!(props.transform[1], TransformOp::Scale(_)));

        for _ in 0..60 {
            scheduler.tick(1.0 / 60.0);
        }
        let props = tree.resolved_props(root).unwrap();
        assert_eq!(props.opacity, Some(1.0));
        assert_eq!(
            props.transform.as_slice(),
            &[TransformOp::TranslateY(0.0), TransformOp::Scale(1.0)]
        );

        // Phase 3: scheduler gone, new screens fail closed to rest
        drop(scheduler);
        let mut tree = ViewTree::new();
        let root = screen().gradient(false).build(&mut tree);
        let frame = EnterFrame::settled();
        let props = tree.resolved_props(root).unwrap();
        assert_eq!(props.opacity, Some(frame.opacity));
        assert_eq!(
            props.transform.as_slice(),
            &[
                TransformOp::TranslateY(frame.translate_y),
                TransformOp::Scale(frame.scale)
            ]
        );
    }
}
