//! Tree snapshot - a normalized representation of an ssml subtree
//!
//! This module provides a canonical, format-agnostic view of a subtree
//! suitable for serialization to any output (JSON, treeviz, test fixtures).
//! It captures node kinds, labels, attributes and children in one traversal
//! so serializers can focus on presentation instead of reimplementing
//! tree walking.

use super::arena::{Arena, NodeId};
use super::kind::TagKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The kind name of the node (e.g. "speak", "media", "text").
    pub node_type: String,

    /// The text payload for text leaves, otherwise the identifier or empty.
    pub label: String,

    /// The node's attributes, key-sorted for deterministic output.
    pub attributes: BTreeMap<String, String>,

    /// Child snapshots in document order.
    pub children: Vec<NodeSnapshot>,
}

/// Build the snapshot of the subtree rooted at `node`.
pub fn snapshot_from_node(arena: &Arena, node: NodeId) -> NodeSnapshot {
    let kind = arena.kind(node);
    let label = match kind {
        TagKind::Text => arena.text(node).unwrap_or_default().to_string(),
        _ => arena.identifier(node).unwrap_or_default().to_string(),
    };
    let attributes = arena
        .attributes(node)
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let children = arena
        .children(node)
        .into_iter()
        .map(|child| snapshot_from_node(arena, child))
        .collect();
    NodeSnapshot {
        node_type: kind.tag_name().to_string(),
        label,
        attributes,
        children,
    }
}
