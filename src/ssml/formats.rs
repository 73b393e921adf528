//! Output formats for ssml trees
//!
//!     - [markup](markup): the wire format. Renders a subtree back to ssml
//!       markup text, attribute-order-stable and byte-exact for round trips.
//!     - [treeviz](treeviz): a one-line-per-node visual representation for
//!       quick scanning of tree structure during debugging and in tests.

pub mod markup;
pub mod treeviz;

pub use markup::render;
pub use treeviz::to_treeviz_str;
