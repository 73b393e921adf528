//! Node model for ssml trees
//!
//!     The tree is an arena of nodes addressed by opaque [`NodeId`] handles.
//!     Parent, sibling and first-child links are stored as optional handles,
//!     which keeps unlink/relink O(1) without reference cycles.
//!
//!     Every node carries a [`TagKind`] from a closed set of eight kinds.
//!     Six of them are containers and may own an ordered list of children;
//!     the other two (text and break) are leaves. Which child kinds a
//!     container may legally own is a fixed, kind-indexed schema checked on
//!     every insertion through the mutation API. See [kind](kind) for the
//!     tables.
//!
//! Module Layout
//!
//!     - [kind](kind): the tag kind enumeration and its schema tables
//!     - [attributes](attributes): the normalized attribute map
//!     - [arena](arena): node storage, handles and accessors
//!     - [mutation](mutation): schema-checked add/remove child operations
//!     - [traversal](traversal): breadth-first search utilities
//!     - [snapshot](snapshot): normalized serializable tree representation
//!     - [error](error): mutation error types

pub mod arena;
pub mod attributes;
pub mod error;
pub mod kind;
pub mod mutation;
pub mod snapshot;
pub mod traversal;

pub use arena::{Arena, NodeId};
pub use attributes::Attributes;
pub use error::{MutationError, MutationResult};
pub use kind::{AllowedChildren, TagKind};
pub use snapshot::{snapshot_from_node, NodeSnapshot};
pub use traversal::{find, find_all, find_by_id, traverse_all};
