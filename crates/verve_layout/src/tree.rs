//! View tree management
//!
//! Maps verve node ids onto a Taffy flexbox tree and keeps the visual side
//! (render props, enter-animation bindings) alongside. Layout structure is
//! Taffy's; visuals are sampled through [`ViewTree::resolved_props`] each
//! frame, which is where running enter animations land in the output.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;
use thiserror::Error;

use verve_animation::EnterBinding;
use verve_core::{TransformOp, TransformOps};

use crate::element::{RenderProps, TransformBindings};

new_key_type! {
    pub struct ViewNodeId;
}

/// Errors from tree structure operations
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("unknown view node {0:?}")]
    UnknownNode(ViewNodeId),
}

struct NodeEntry {
    taffy: NodeId,
    props: RenderProps,
    /// Enter animation sampled into this node's resolved props
    enter: Option<Arc<EnterBinding>>,
    /// Gesture-written transform cells sampled into resolved props
    bindings: Option<TransformBindings>,
}

/// The view tree: Taffy layout plus per-node visuals
pub struct ViewTree {
    taffy: TaffyTree<()>,
    nodes: SlotMap<ViewNodeId, NodeEntry>,
    /// Reverse mapping from Taffy node ids
    reverse: FxHashMap<NodeId, ViewNodeId>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            nodes: SlotMap::with_key(),
            reverse: FxHashMap::default(),
        }
    }

    /// Create a node with the given style and static render props
    pub fn create_node(&mut self, style: Style, props: RenderProps) -> ViewNodeId {
        let taffy_node = self.taffy.new_leaf(style).unwrap();
        let id = self.nodes.insert(NodeEntry {
            taffy: taffy_node,
            props,
            enter: None,
            bindings: None,
        });
        self.reverse.insert(taffy_node, id);
        id
    }

    /// Bind an enter animation to a node
    ///
    /// The binding is sampled by [`ViewTree::resolved_props`] and released
    /// when the node (or tree) is dropped.
    pub fn attach_enter(
        &mut self,
        id: ViewNodeId,
        binding: Arc<EnterBinding>,
    ) -> Result<(), TreeError> {
        let entry = self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        entry.enter = Some(binding);
        Ok(())
    }

    /// Bind gesture transform cells to a node
    pub fn attach_bindings(
        &mut self,
        id: ViewNodeId,
        bindings: TransformBindings,
    ) -> Result<(), TreeError> {
        let entry = self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))?;
        entry.bindings = Some(bindings);
        Ok(())
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: ViewNodeId, child: ViewNodeId) -> Result<(), TreeError> {
        let parent_taffy = self
            .nodes
            .get(parent)
            .ok_or(TreeError::UnknownNode(parent))?
            .taffy;
        let child_taffy = self
            .nodes
            .get(child)
            .ok_or(TreeError::UnknownNode(child))?
            .taffy;
        let _ = self.taffy.add_child(parent_taffy, child_taffy);
        Ok(())
    }

    /// Children of a node, in insertion order
    pub fn children(&self, parent: ViewNodeId) -> Vec<ViewNodeId> {
        let Some(entry) = self.nodes.get(parent) else {
            return Vec::new();
        };
        let Ok(children) = self.taffy.children(entry.taffy) else {
            return Vec::new();
        };
        children
            .iter()
            .filter_map(|taffy_node| self.reverse.get(taffy_node).copied())
            .collect()
    }

    /// The node's layout style
    pub fn style(&self, id: ViewNodeId) -> Option<&Style> {
        self.nodes
            .get(id)
            .and_then(|entry| self.taffy.style(entry.taffy).ok())
    }

    /// The node's static render props, as built
    pub fn static_props(&self, id: ViewNodeId) -> Option<&RenderProps> {
        self.nodes.get(id).map(|entry| &entry.props)
    }

    /// The node's render props for this frame
    ///
    /// Nodes with an enter binding get the sampled opacity and the transform
    /// pair translate-then-scale, in that order. Gesture cells resolve after
    /// the enter transform.
    pub fn resolved_props(&self, id: ViewNodeId) -> Option<RenderProps> {
        let entry = self.nodes.get(id)?;
        let mut props = entry.props.clone();

        if let Some(binding) = &entry.enter {
            let frame = binding.sample();
            props.opacity = Some(frame.opacity);
            let mut transform = TransformOps::new();
            transform.push(TransformOp::TranslateY(frame.translate_y));
            transform.push(TransformOp::Scale(frame.scale));
            props.transform = transform;
        }

        if let Some(bindings) = &entry.bindings {
            bindings.resolve_into(&mut props.transform);
        }

        Some(props)
    }

    /// Whether the node carries an enter binding
    pub fn has_enter(&self, id: ViewNodeId) -> bool {
        self.nodes
            .get(id)
            .map(|entry| entry.enter.is_some())
            .unwrap_or(false)
    }

    /// Compute layout for the tree rooted at `root`
    pub fn compute_layout(&mut self, root: ViewNodeId, available_space: Size<AvailableSpace>) {
        if let Some(entry) = self.nodes.get(root) {
            let _ = self.taffy.compute_layout(entry.taffy, available_space);
        }
    }

    /// The computed layout for a node
    pub fn layout(&self, id: ViewNodeId) -> Option<&Layout> {
        self.nodes
            .get(id)
            .and_then(|entry| self.taffy.layout(entry.taffy).ok())
    }

    /// Remove a node and its subtree
    pub fn remove_subtree(&mut self, id: ViewNodeId) {
        for child in self.children(id) {
            self.remove_subtree(child);
        }
        if let Some(entry) = self.nodes.remove(id) {
            self.reverse.remove(&entry.taffy);
            let _ = self.taffy.remove(entry.taffy);
        }
    }

    /// Whether the node exists
    pub fn contains(&self, id: ViewNodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}
