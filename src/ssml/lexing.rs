//! Tokenizer
//!
//!     Scans a body text span (the text between an outer container's open
//!     and close tags) and produces a single token stream in original
//!     document order. Three token classes are matched independently and
//!     then merged:
//!
//!         1. Container-tag tokens: complete substrings from an opening
//!            container tag through its matching closing tag, located by the
//!            balanced-tag stack scan in [scanner](scanner). Tag-balance
//!            validation happens inline during this scan.
//!
//!         2. Self-closing (inline) tag tokens: matched against the body
//!            with all container regions removed, so an inline tag embedded
//!            inside a not-yet-extracted container region is never matched
//!            at this level. Each removed region leaves one placeholder
//!            character at its start boundary to keep ordering stable.
//!
//!         3. Plain-text tokens: the runs left between tag boundaries,
//!            skipped when empty or whitespace-only.
//!
//!     The merge back into source order is the per-token-string cursor
//!     algorithm in [ordering](ordering).

pub mod error;
pub mod ordering;
pub mod patterns;
pub mod scanner;

pub use error::{SyntaxError, SyntaxResult};
pub use scanner::TagSpan;

use scanner::strip_container_regions;

/// The tokenizer output: the merged, document-ordered token stream plus the
/// byte spans of the container tokens within the scanned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    pub ordered: Vec<String>,
    pub container_spans: Vec<TagSpan>,
}

/// Tokenize a body text span into a document-ordered token stream.
pub fn tokenize(body: &str) -> SyntaxResult<TokenStream> {
    let container_spans = scanner::scan_container_tags(body)?;
    let cleaned = strip_container_regions(body, &container_spans);
    let inline_tokens = inline_tokens(&cleaned);
    let text_tokens = text_tokens(&cleaned);
    let container_tokens = container_spans.iter().map(|s| s.text.clone()).collect();

    let ordered = ordering::merge_ordered(body, text_tokens, container_tokens, inline_tokens)?;
    Ok(TokenStream {
        ordered,
        container_spans,
    })
}

/// Self-closing tag tokens found at the top level of the cleaned body.
fn inline_tokens(cleaned: &str) -> Vec<String> {
    patterns::INLINE_TAG
        .find_iter(cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Plain-text tokens: the runs left after replacing inline tags with the
/// same placeholder the container regions use, split at placeholders and
/// filtered of whitespace-only pieces.
fn text_tokens(cleaned: &str) -> Vec<String> {
    let without_inline = patterns::INLINE_TAG.replace_all(cleaned, "<");
    without_inline
        .split('<')
        .filter(|run| !run.trim().is_empty())
        .map(|run| run.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_stream_is_source_ordered() {
        // Text, container and inline tokens interleave by position, not by
        // category.
        let stream = tokenize("A <par><media>B</media></par> A").unwrap();
        assert_eq!(
            stream.ordered,
            vec!["A ", "<par><media>B</media></par>", " A"]
        );
        assert_eq!(stream.container_spans.len(), 1);
    }

    #[test]
    fn test_inline_inside_container_is_not_a_top_level_token() {
        let stream = tokenize("<media><break/><audio>x</audio></media>").unwrap();
        assert_eq!(stream.ordered, vec!["<media><break/><audio>x</audio></media>"]);
    }

    #[test]
    fn test_whitespace_runs_are_dropped() {
        let stream = tokenize("  <seq></seq>\n   <par></par>  ").unwrap();
        assert_eq!(stream.ordered, vec!["<seq></seq>", "<par></par>"]);
    }

    #[test]
    fn test_top_level_inline_token() {
        let stream = tokenize(r#"pause <break time="2s"/> resume"#).unwrap();
        assert_eq!(
            stream.ordered,
            vec!["pause ", r#"<break time="2s"/>"#, " resume"]
        );
    }

    #[test]
    fn test_empty_body() {
        let stream = tokenize("").unwrap();
        assert!(stream.ordered.is_empty());
    }

    #[test]
    fn test_unclosed_tag_fails() {
        assert!(matches!(
            tokenize("<media>text"),
            Err(SyntaxError::UnclosedTag { .. })
        ));
    }
}
