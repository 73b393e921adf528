//! Main module for ssml library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod tree;

// Re-export the types most consumers need
pub use ast::{
    Arena, Attributes, MutationError, MutationResult, NodeId, NodeSnapshot, TagKind,
};
pub use formats::render;
pub use lexing::{SyntaxError, SyntaxResult};
pub use tree::SsmlTree;
