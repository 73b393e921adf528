//! Treeviz formatter for ssml trees
//!
//! Treeviz is a visual representation of the tree, one line per node, which
//! enables quick scanning of nested structure. Nesting is encoded as
//! indentation, 2 spaces per level.
//!
//! The format is:
//!     <indentation> <icon><space><label> (labels truncated to 30 characters)
//!
//! Icons:
//!     speak:   ⧉
//!     media:   ♫
//!     audio:   ◉
//!     seq:     ⇉
//!     par:     ∥
//!     prosody: ≈
//!     break:   ‖
//!     text:    ◦

use crate::ssml::ast::{snapshot_from_node, Arena, NodeId, NodeSnapshot};

const MAX_LABEL_CHARS: usize = 30;

fn icon(node_type: &str) -> &'static str {
    match node_type {
        "speak" => "⧉",
        "media" => "♫",
        "audio" => "◉",
        "seq" => "⇉",
        "par" => "∥",
        "prosody" => "≈",
        "break" => "‖",
        "text" => "◦",
        _ => "?",
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated: String = s.chars().take(max_chars).collect();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn label_for(snapshot: &NodeSnapshot) -> String {
    let mut label = snapshot.node_type.clone();
    if snapshot.node_type == "text" {
        label = format!("text {}", snapshot.label);
    } else if !snapshot.label.is_empty() {
        label = format!("{} #{}", label, snapshot.label);
    }
    truncate(&label, MAX_LABEL_CHARS)
}

fn write_node(out: &mut String, snapshot: &NodeSnapshot, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(icon(&snapshot.node_type));
    out.push(' ');
    out.push_str(&label_for(snapshot));
    out.push('\n');
    for child in &snapshot.children {
        write_node(out, child, depth + 1);
    }
}

/// Render the subtree rooted at `node` as a treeviz string.
pub fn to_treeviz_str(arena: &Arena, node: NodeId) -> String {
    let snapshot = snapshot_from_node(arena, node);
    let mut out = String::new();
    write_node(&mut out, &snapshot, 0);
    out
}
