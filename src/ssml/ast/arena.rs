//! Node storage
//!
//!     Nodes live in a flat arena and are addressed by opaque [`NodeId`]
//!     handles. All cross-references between nodes (parent, previous and next
//!     sibling, first child) are stored as `Option<NodeId>`, which gives the
//!     intrusive doubly-linked sibling chain of the object model without
//!     ownership cycles or dangling references.
//!
//!     Allocation never fails and detached nodes are simply unreachable; the
//!     arena does not reclaim them individually. A parse or a tree lives in
//!     one arena and is dropped as a whole.
//!
//!     Children of a container are reached through its first-child handle and
//!     the sibling chain; ordering among children is exactly insertion order.
//!     The mutation operations that maintain these links live in
//!     [mutation](super::mutation).

use super::attributes::Attributes;
use super::kind::TagKind;

/// Opaque handle to a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: TagKind,
    pub(crate) attributes: Attributes,
    /// Literal payload; only meaningful for `Text` leaves.
    pub(crate) text: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
}

/// Arena of ssml nodes.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    nodes: Vec<NodeData>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever allocated, including detached ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached element node of the given kind.
    pub fn alloc_element(&mut self, kind: TagKind, attributes: Attributes) -> NodeId {
        self.alloc(NodeData {
            kind,
            attributes,
            text: String::new(),
            parent: None,
            prev: None,
            next: None,
            first_child: None,
        })
    }

    /// Allocate a detached text leaf holding the literal payload.
    pub fn alloc_text(&mut self, payload: impl Into<String>) -> NodeId {
        self.alloc(NodeData {
            kind: TagKind::Text,
            attributes: Attributes::new(),
            text: payload.into(),
            parent: None,
            prev: None,
            next: None,
            first_child: None,
        })
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }

    pub fn kind(&self, node: NodeId) -> TagKind {
        self.node(node).kind
    }

    pub fn is_container(&self, node: NodeId) -> bool {
        self.kind(node).is_container()
    }

    pub fn attribute(&self, node: NodeId, key: &str) -> Option<&str> {
        self.node(node).attributes.get(key)
    }

    pub fn set_attribute(&mut self, node: NodeId, key: &str, value: &str) {
        self.node_mut(node).attributes.insert(key, value);
    }

    pub fn attributes(&self, node: NodeId) -> &Attributes {
        &self.node(node).attributes
    }

    /// The node's identifier (`xml:id` in markup), if set.
    pub fn identifier(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "id")
    }

    /// The literal payload of a `Text` leaf; `None` for any other kind.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        let data = self.node(node);
        match data.kind {
            TagKind::Text => Some(data.text.as_str()),
            _ => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).prev
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).next
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).first_child
    }

    /// Whether the node is the head of its sibling chain.
    pub fn is_head(&self, node: NodeId) -> bool {
        self.node(node).prev.is_none()
    }

    /// Whether the node is the tail of its sibling chain.
    pub fn is_tail(&self, node: NodeId) -> bool {
        self.node(node).next.is_none()
    }

    pub(crate) fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.index()]
    }

    pub(crate) fn node_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index()]
    }
}
