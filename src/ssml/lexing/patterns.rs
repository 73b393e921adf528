//! Token grammar patterns
//!
//!     Lazily compiled regexes for the three token classes and the tag
//!     sub-grammars, shared crate-wide via `once_cell::sync::Lazy`.
//!
//!     The enclosed pattern is anchored and DOTALL. Its body capture is
//!     greedy, so the closing name captured is always the outermost closing
//!     tag of the matched string; same-named nested containers resolve
//!     correctly because their closing tags are swallowed by the body.

use once_cell::sync::Lazy;
use regex::Regex;

/// A complete container element: opening tag, attribute text, body, closing
/// tag. Groups: (1) open name, (2) attribute text, (3) body, (4) close name.
pub static ENCLOSED_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^<([a-z]+)\s*([^>]*?)\s*>(.*)</\s*([a-z]+)\s*>\s*$").unwrap());

/// A self-closing (inline) element. Groups: (1) name, (2) attribute text.
/// Unanchored so it can locate inline tags inside a larger text span; use
/// [`is_exact_match`] when classifying a complete token.
pub static INLINE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([a-z]+)\s*([^>]*?)\s*/\s*>").unwrap());

/// A single opening tag construct `<name attrs>`.
/// Groups: (1) name, (2) attribute text.
pub static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([a-z]+)\s*([^>]*?)\s*>$").unwrap());

/// A single closing tag construct `</name>`. Group: (1) name.
pub static CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</\s*([a-z]+)\s*>$").unwrap());

/// A bare text run: anything without tag delimiters.
pub static TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^[^<>]+$").unwrap());

/// Whether `re` matches `input` in its entirety, starting at offset 0.
pub fn is_exact_match(re: &Regex, input: &str) -> bool {
    re.find(input)
        .map(|m| m.start() == 0 && m.end() == input.len())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosed_captures_outermost_close() {
        let caps = ENCLOSED_TAG
            .captures("<media><speak>x</speak></media>")
            .unwrap();
        assert_eq!(&caps[1], "media");
        assert_eq!(&caps[3], "<speak>x</speak>");
        assert_eq!(&caps[4], "media");
    }

    #[test]
    fn test_enclosed_rejects_unclosed() {
        assert!(!ENCLOSED_TAG.is_match("<speak>text"));
        assert!(!ENCLOSED_TAG.is_match("text"));
    }

    #[test]
    fn test_inline_exact_match_classification() {
        assert!(is_exact_match(&INLINE_TAG, r#"<break time="20s"/>"#));
        assert!(is_exact_match(&INLINE_TAG, "<break/>"));
        assert!(is_exact_match(&INLINE_TAG, "<break />"));
        assert!(!is_exact_match(&INLINE_TAG, "<break></break>"));
        assert!(!is_exact_match(&INLINE_TAG, r#"x <break/>"#));
    }

    #[test]
    fn test_inline_is_checked_before_open() {
        let caps = OPEN_TAG.captures(r#"<media begin="0s">"#).unwrap();
        assert_eq!(&caps[1], "media");
        assert_eq!(&caps[2], r#"begin="0s""#);
        // `<break/>` also matches the open pattern (with "/" swallowed into
        // the attribute text), so the scanner tests the inline pattern first.
        assert!(is_exact_match(&INLINE_TAG, "<break/>"));
        assert!(is_exact_match(&OPEN_TAG, "<break/>"));
    }

    #[test]
    fn test_close_tag() {
        let caps = CLOSE_TAG.captures("</par>").unwrap();
        assert_eq!(&caps[1], "par");
        assert!(!CLOSE_TAG.is_match("<par>"));
    }
}
