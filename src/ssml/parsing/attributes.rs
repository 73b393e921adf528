//! Attribute text parsing
//!
//!     Attribute syntax in the wire format is whitespace-separated
//!     `key="value"` pairs. Keys lose an optional `xml:` namespace prefix
//!     (so `xml:lang` and `lang` are the same attribute); values lose
//!     surrounding quotes and whitespace. Values therefore cannot contain
//!     whitespace, which matches the constrained dialect.

use crate::ssml::ast::Attributes;

/// Parse a tag's raw attribute text into a normalized [`Attributes`] map.
///
/// Malformed pieces without a `=` are ignored rather than failing; the
/// enclosing tag grammar has already validated the overall construct.
pub fn parse_attribute_text(attribute_text: &str) -> Attributes {
    let mut attrs = Attributes::new();
    for pair in attribute_text.split_whitespace() {
        if let Some((key, value)) = pair.split_once('=') {
            let value = value.trim_matches(|c| c == ' ' || c == '"');
            attrs.insert(key, value);
        }
    }
    attrs
}
