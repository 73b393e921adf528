//! # ssml
//!
//! A parser and object model for the subset of the Speech Synthesis Markup
//! Language used to describe narrated audio: nested containers (speak, media,
//! seq, par, prosody, audio) and two leaf kinds (plain text and the
//! self-closing break marker).
//!
//! The crate covers the full parse/tree/serialize cycle:
//!
//!     - Parsing markup text into a validated, navigable tree.
//!       See the [parsing module](ssml::parsing).
//!     - Mutating and traversing the tree through a schema-checked API.
//!       See the [ast module](ssml::ast).
//!     - Serializing any subtree back to markup text, byte-stable.
//!       See the [formats module](ssml::formats).
//!
//! The [`SsmlTree`](ssml::tree::SsmlTree) facade ties these together and is
//! the intended entry point for consumers.

#![allow(rustdoc::invalid_html_tags)]

pub mod ssml;
