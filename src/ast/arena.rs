//! The append-only arena that backs the AST (§5, §9 "Parent back-links").
//!
//! A parse owns exactly one [`Tree`]. Nodes are appended during the walk
//! and never removed; re-parenting (quantifier wrap, optimizer collapse)
//! mutates the `parent` field of existing nodes and the child list of
//! their new owner, but never frees a node. This is option (a) from the
//! design notes: an arena with stable indices, where `parent` is an
//! index, "the simplest correct choice" once the tree is effectively
//! immutable after construction.

use serde::{Deserialize, Serialize};

use crate::ast::node::Node;

/// A stable index into a [`Tree`]'s node storage.
///
/// Mirrors the newtype-index idiom used for definition handles
/// elsewhere in this codebase's lineage (a `u32`-backed, `Copy` handle
/// rather than a pointer or `Rc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owns every node allocated during one parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates `node` and returns its id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::from_raw((self.nodes.len() - 1) as u32)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Updates `id`'s `parent` field to `parent`, without touching any
    /// child list. Callers are responsible for also adding `id` to the
    /// new parent's child container; the two updates must happen
    /// together for the back-link to stay consistent with the owning
    /// edge (§3.2).
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        *self.get_mut(id).parent_mut() = Some(parent);
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        *self.get(id).parent()
    }

    /// Walks `id`'s ancestor chain, innermost first. Used by the
    /// lookbehind variable-length guard (§4.7) to answer "is any
    /// ancestor a lookbehind assertion".
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent_of(id), move |&cur| self.parent_of(cur))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
