//! Parsing module for the ssml wire format
//!
//!     The complete pipeline from markup text to a linked tree:
//!
//!         1. The outer text is matched against the container-element
//!            grammar: an opening tag, its attribute text, a body, and a
//!            matching closing tag of the same name.
//!         2. The body is tokenized into a document-ordered stream of
//!            container, self-closing and plain-text tokens. See the
//!            [lexing](crate::ssml::lexing) module.
//!         3. Each token is materialized as a node; container tokens recurse
//!            through the same entry point. See [parser](parser).
//!
//!     Parsing is synchronous and CPU-bound with no I/O; a failed parse
//!     propagates a [`SyntaxError`](crate::ssml::lexing::SyntaxError) and
//!     leaves no half-linked nodes reachable from any tree root.

pub mod attributes;
pub mod parser;

pub use attributes::parse_attribute_text;
pub use parser::parse_into;
