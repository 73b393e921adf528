//! Markup serializer
//!
//!     Renders a node and recursively its subtree back to ssml markup text.
//!     Output is deterministic: attributes emit in the fixed per-kind order
//!     from the [kind tables](crate::ssml::ast::kind), empty and absent values
//!     are omitted, and attributes outside a kind's table never render.
//!
//!     Text payloads and attribute values are written verbatim. No escaping
//!     is performed; a payload containing `<`, `>` or `"` produces markup
//!     that will not parse back. This is a known, documented limitation kept
//!     for round-trip fidelity with the original object model.

use crate::ssml::ast::{Arena, NodeId, TagKind};

/// Render the subtree rooted at `node` to markup text.
pub fn render(arena: &Arena, node: NodeId) -> String {
    match arena.kind(node) {
        TagKind::Text => arena.text(node).unwrap_or_default().to_string(),
        TagKind::Break => format!("<break{}/>", render_attributes(arena, node)),
        kind => {
            let name = kind.tag_name();
            let mut body = String::new();
            for child in arena.children(node) {
                body.push_str(&render(arena, child));
            }
            format!(
                "<{}{}>{}</{}>",
                name,
                render_attributes(arena, node),
                body,
                name
            )
        }
    }
}

/// The attribute text for a node: ` key="value"` pairs in the kind's fixed
/// order, or the empty string when no listed attribute has a value.
fn render_attributes(arena: &Arena, node: NodeId) -> String {
    let mut out = String::new();
    for (key, rendered_name) in arena.kind(node).attribute_order() {
        if let Some(value) = arena.attribute(node, key) {
            if !value.is_empty() {
                out.push_str(&format!(" {}=\"{}\"", rendered_name, value));
            }
        }
    }
    out
}
