//! Error types for tokenization and parsing
//!
//! Every malformed input is a hard failure surfaced synchronously to the
//! caller; nothing is locally recovered.

use std::fmt;

/// Syntax errors raised while tokenizing or parsing markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `<` was found with no matching `>` before end of input.
    MissingCloseDelimiter,
    /// End of input with the tag stack non-empty; names the unmatched tag.
    UnclosedTag { name: String, attributes: String },
    /// A closing tag did not match the innermost open tag.
    MismatchedClose {
        expected: String,
        attributes: String,
        found: String,
    },
    /// A closing tag with no corresponding open tag.
    StrayCloseTag { name: String },
    /// The document (or a recursive fragment) is not enclosed in a
    /// container tag.
    NotEnclosed,
    /// A tag name outside the recognized set.
    UnknownTag { name: String },
    /// A token that matches none of the three token grammars.
    InvalidToken { token: String },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::MissingCloseDelimiter => {
                write!(f, "found '<' with no matching '>'")
            }
            SyntaxError::UnclosedTag { name, attributes } => {
                if attributes.is_empty() {
                    write!(f, "the tag <{}> was not closed", name)
                } else {
                    write!(f, "the tag <{} {}> was not closed", name, attributes)
                }
            }
            SyntaxError::MismatchedClose {
                expected,
                attributes,
                found,
            } => {
                if attributes.is_empty() {
                    write!(
                        f,
                        "the last opened tag <{}> was not closed (found </{}>)",
                        expected, found
                    )
                } else {
                    write!(
                        f,
                        "the last opened tag <{} {}> was not closed (found </{}>)",
                        expected, attributes, found
                    )
                }
            }
            SyntaxError::StrayCloseTag { name } => {
                write!(f, "closing tag </{}> has no matching open tag", name)
            }
            SyntaxError::NotEnclosed => {
                write!(f, "document must be enclosed in a container tag")
            }
            SyntaxError::UnknownTag { name } => {
                write!(f, "{} is not a valid tag", name)
            }
            SyntaxError::InvalidToken { token } => {
                write!(f, "invalid pattern {:?}", token)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Type alias for tokenization and parsing results.
pub type SyntaxResult<T> = Result<T, SyntaxError>;
