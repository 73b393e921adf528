//! Error types for tree mutation

use super::kind::TagKind;
use std::fmt;

/// Errors raised by the schema-checked mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// The child kind is not in the container kind's allowed-child set.
    SchemaViolation { container: TagKind, child: TagKind },
    /// A node cannot be added as a child of itself.
    SelfReference,
    /// The node is already attached to a parent; detach it first.
    AlreadyChild { parent: TagKind },
    /// Child-index removal beyond the current child count.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::SchemaViolation { container, child } => {
                write!(
                    f,
                    "<{}> is not a valid child for <{}>",
                    child.tag_name(),
                    container.tag_name()
                )
            }
            MutationError::SelfReference => {
                write!(f, "a node cannot be added as its own child")
            }
            MutationError::AlreadyChild { parent } => {
                write!(
                    f,
                    "node is already a child of a <{}>; remove it first",
                    parent.tag_name()
                )
            }
            MutationError::IndexOutOfRange { index, len } => {
                write!(f, "child index {} out of range for {} children", index, len)
            }
        }
    }
}

impl std::error::Error for MutationError {}

/// Type alias for mutation results.
pub type MutationResult<T> = Result<T, MutationError>;
