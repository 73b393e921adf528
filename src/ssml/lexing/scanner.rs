//! Balanced-tag stack scanner
//!
//!     Locates complete container-element substrings inside a body text span.
//!     The scan walks `<...>` constructs left to right. When an opening tag
//!     is found, its name and attribute text are pushed; subsequent constructs
//!     pop on a matching closing tag, push on a nested opening tag, and are
//!     ignored when self-closing. The position where the stack empties ends
//!     the container token.
//!
//!     Tag-balance validation happens inline during this scan:
//!
//!         - a `<` with no `>` before end of input is a syntax error
//!         - end of input with a non-empty stack names the unmatched tag
//!         - a closing tag that does not match the stack top is a mismatch,
//!           reported with the open tag's name and attribute text
//!
//!     Offsets are byte offsets. `<` and `>` are ASCII, so every recorded
//!     boundary is a valid char boundary even in multi-byte text.

use super::error::{SyntaxError, SyntaxResult};
use super::patterns::{is_exact_match, CLOSE_TAG, INLINE_TAG, OPEN_TAG};

/// A complete container-element substring and its byte range in the scanned
/// body (`end` exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

fn find_from(haystack: &str, needle: char, from: usize) -> Option<usize> {
    haystack[from..].find(needle).map(|i| i + from)
}

/// Scan `body` for complete container-element substrings, in source order.
pub fn scan_container_tags(body: &str) -> SyntaxResult<Vec<TagSpan>> {
    let mut spans = Vec::new();
    let mut open_idx = body.find('<');

    while let Some(start) = open_idx {
        let close = find_from(body, '>', start).ok_or(SyntaxError::MissingCloseDelimiter)?;
        let tag = &body[start..close + 1];

        // Self-closing tags at this level are not containers; skip them.
        if is_exact_match(&INLINE_TAG, tag) {
            open_idx = find_from(body, '<', close);
            continue;
        }
        if let Some(caps) = CLOSE_TAG.captures(tag) {
            return Err(SyntaxError::StrayCloseTag {
                name: caps[1].to_string(),
            });
        }
        let caps = OPEN_TAG
            .captures(tag)
            .ok_or_else(|| SyntaxError::InvalidToken {
                token: tag.to_string(),
            })?;

        let mut stack: Vec<(String, String)> = vec![(caps[1].to_string(), caps[2].to_string())];
        let mut cursor = close;
        let mut span_end = close + 1;

        while !stack.is_empty() {
            let next = match find_from(body, '<', cursor) {
                Some(idx) => idx,
                None => {
                    let (name, attributes) = stack.pop().unwrap_or_default();
                    return Err(SyntaxError::UnclosedTag { name, attributes });
                }
            };
            let next_close =
                find_from(body, '>', next).ok_or(SyntaxError::MissingCloseDelimiter)?;
            let tag = &body[next..next_close + 1];

            if let Some(caps) = CLOSE_TAG.captures(tag) {
                let found = caps[1].to_string();
                let top_matches = stack.last().map(|(name, _)| *name == found).unwrap_or(false);
                if !top_matches {
                    let (expected, attributes) = stack.pop().unwrap_or_default();
                    return Err(SyntaxError::MismatchedClose {
                        expected,
                        attributes,
                        found,
                    });
                }
                stack.pop();
            } else if is_exact_match(&INLINE_TAG, tag) {
                // Neither opens nor closes.
            } else if let Some(caps) = OPEN_TAG.captures(tag) {
                stack.push((caps[1].to_string(), caps[2].to_string()));
            } else {
                return Err(SyntaxError::InvalidToken {
                    token: tag.to_string(),
                });
            }

            cursor = next_close;
            span_end = next_close + 1;
        }

        spans.push(TagSpan {
            text: body[start..span_end].to_string(),
            start,
            end: span_end,
        });
        open_idx = find_from(body, '<', span_end);
    }

    Ok(spans)
}

/// Remove the container regions from `body`, keeping a single placeholder
/// `<` per removed region's start boundary so relative ordering of the
/// remaining text is stable.
pub fn strip_container_regions(body: &str, spans: &[TagSpan]) -> String {
    let mut cleaned = String::with_capacity(body.len());
    let mut pos = 0;
    for span in spans {
        cleaned.push_str(&body[pos..span.start]);
        cleaned.push('<');
        pos = span.end;
    }
    cleaned.push_str(&body[pos..]);
    cleaned
}
