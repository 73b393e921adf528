//! Document-order token merge
//!
//!     The tokenizer matches its three token classes independently, so the
//!     class lists must be interleaved back into original source order. The
//!     same literal token text can recur (repeated words, repeated tag
//!     markup), which rules out a naive search-for-first-occurrence: it would
//!     resolve every repeat to the first position.
//!
//!     The merge keeps, per distinct token string, a cursor just past the
//!     last resolved offset. Each step locates the three lists' head tokens
//!     from their cursors, pops the earliest-positioned head into the output
//!     stream, and advances that token's cursor. No two tokens start at the
//!     same offset, so ties cannot occur.

use super::error::{SyntaxError, SyntaxResult};
use std::collections::{HashMap, VecDeque};

/// Interleave the three token lists into original document order within
/// `body`. List order on equal emptiness is text, container, inline, but the
/// output order depends only on source positions.
pub fn merge_ordered(
    body: &str,
    text_tokens: Vec<String>,
    container_tokens: Vec<String>,
    inline_tokens: Vec<String>,
) -> SyntaxResult<Vec<String>> {
    let mut lists: [VecDeque<String>; 3] = [
        text_tokens.into(),
        container_tokens.into(),
        inline_tokens.into(),
    ];
    let mut cursors: HashMap<String, usize> = HashMap::new();
    let mut ordered = Vec::new();

    loop {
        let mut earliest: Option<(usize, usize)> = None; // (position, list index)
        for (idx, list) in lists.iter().enumerate() {
            let token = match list.front() {
                Some(token) => token,
                None => continue,
            };
            let from = cursors.get(token).copied().unwrap_or(0);
            let position = body
                .get(from..)
                .and_then(|tail| tail.find(token.as_str()))
                .map(|p| p + from)
                .ok_or_else(|| SyntaxError::InvalidToken {
                    token: token.clone(),
                })?;
            if earliest.map_or(true, |(best, _)| position < best) {
                earliest = Some((position, idx));
            }
        }

        let (position, idx) = match earliest {
            Some(found) => found,
            None => break, // all lists drained
        };
        if let Some(token) = lists[idx].pop_front() {
            // Advance past the first char of the resolved occurrence; the
            // step is a char length so the cursor stays on a boundary.
            let step = token.chars().next().map_or(1, |c| c.len_utf8());
            cursors.insert(token.clone(), position + step);
            ordered.push(token);
        }
    }

    Ok(ordered)
}
