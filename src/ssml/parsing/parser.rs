//! Recursive descent over tokenized bodies
//!
//!     `parse_into` matches the outer text against the container-element
//!     grammar, constructs the root node for this level, tokenizes the body,
//!     and materializes each token: plain text becomes a text leaf, a
//!     self-closing tag becomes the corresponding leaf kind, and a container
//!     token recurses.
//!
//!     Children are linked directly into the sibling chain in token order
//!     and the chain head becomes the root's first-child handle. This
//!     deliberately bypasses the schema check of the mutation API: parsed
//!     markup is accepted wherever it nests, matching the permissive
//!     behavior of the original object model. Parent and sibling links are
//!     still written consistently.
//!
//!     Tokens are trimmed of leading and trailing newlines when they become
//!     nodes; interior whitespace and plain spaces are preserved exactly.

use crate::ssml::ast::{Arena, NodeId, TagKind};
use crate::ssml::lexing::patterns::{is_exact_match, ENCLOSED_TAG, INLINE_TAG, TEXT};
use crate::ssml::lexing::{tokenize, SyntaxError, SyntaxResult};

use super::attributes::parse_attribute_text;

/// Parse a markup string into the arena, returning the subtree root.
///
/// The input must be a single container element. On failure nothing is
/// linked to any previously existing node; the nodes allocated by the failed
/// attempt stay detached and unreachable.
///
/// # Arguments
///
/// * `arena` - The arena receiving the constructed nodes
/// * `markup` - The markup text, a complete container element
///
/// # Returns
///
/// The handle of the constructed subtree root.
pub fn parse_into(arena: &mut Arena, markup: &str) -> SyntaxResult<NodeId> {
    let markup = markup.trim();
    let caps = ENCLOSED_TAG.captures(markup).ok_or(SyntaxError::NotEnclosed)?;
    let open_name = &caps[1];
    let close_name = &caps[4];
    if open_name != close_name {
        return Err(SyntaxError::MismatchedClose {
            expected: open_name.to_string(),
            attributes: caps[2].to_string(),
            found: close_name.to_string(),
        });
    }
    let kind = TagKind::from_name(open_name)
        .filter(|kind| kind.is_container())
        .ok_or_else(|| SyntaxError::UnknownTag {
            name: open_name.to_string(),
        })?;

    let root = arena.alloc_element(kind, parse_attribute_text(&caps[2]));
    let body = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

    let mut head: Option<NodeId> = None;
    let mut last: Option<NodeId> = None;
    for raw_token in tokenize(body)?.ordered {
        let token = raw_token.trim_matches('\n');
        if token.is_empty() {
            continue;
        }
        let child = build_child(arena, token)?;

        arena.node_mut(child).parent = Some(root);
        if let Some(prev) = last {
            arena.node_mut(prev).next = Some(child);
            arena.node_mut(child).prev = Some(prev);
        } else {
            head = Some(child);
        }
        last = Some(child);
    }
    arena.node_mut(root).first_child = head;
    Ok(root)
}

/// Materialize one token as a node: text leaf, self-closing leaf, or a
/// recursively parsed container.
fn build_child(arena: &mut Arena, token: &str) -> SyntaxResult<NodeId> {
    if is_exact_match(&TEXT, token) {
        return Ok(arena.alloc_text(token));
    }
    if is_exact_match(&INLINE_TAG, token) {
        let caps = INLINE_TAG
            .captures(token)
            .ok_or_else(|| SyntaxError::InvalidToken {
                token: token.to_string(),
            })?;
        let kind = TagKind::from_name(&caps[1])
            .filter(|kind| !kind.is_container())
            .ok_or_else(|| SyntaxError::UnknownTag {
                name: caps[1].to_string(),
            })?;
        return Ok(arena.alloc_element(kind, parse_attribute_text(&caps[2])));
    }
    if ENCLOSED_TAG.is_match(token) {
        return parse_into(arena, token);
    }
    Err(SyntaxError::InvalidToken {
        token: token.to_string(),
    })
}
