//! Tree facade
//!
//!     [`SsmlTree`] owns the node arena and one root container, and exposes
//!     the parse/serialize/mutation/traversal surface consumers are expected
//!     to use. A freshly constructed tree has a `speak` root with
//!     `xml:id="root"` and `xml:lang="en"`; parsing a document replaces the
//!     root with whatever container the markup declares.
//!
//!     The tree assumes exclusive single-writer access; concurrent mutation
//!     of one tree must be prevented by the caller.

use super::ast::{
    self, snapshot_from_node, Arena, Attributes, MutationResult, NodeId, NodeSnapshot, TagKind,
};
use super::formats::{markup, treeviz};
use super::lexing::SyntaxResult;
use super::parsing::parse_into;
use std::collections::HashSet;

/// The public facade over an ssml document tree.
#[derive(Debug, Clone)]
pub struct SsmlTree {
    arena: Arena,
    root: NodeId,
}

impl SsmlTree {
    /// A new tree with the default `<speak xml:id="root" xml:lang="en">`
    /// root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc_element(
            TagKind::Speak,
            Attributes::new().set("id", "root").set("lang", "en"),
        );
        Self { arena, root }
    }

    /// Parse a complete document; the parsed container becomes the root.
    pub fn from_markup(text: &str) -> SyntaxResult<Self> {
        let mut arena = Arena::new();
        let root = parse_into(&mut arena, text)?;
        Ok(Self { arena, root })
    }

    /// Parse a markup fragment into this tree's arena, returning the root of
    /// the new detached subtree. Attach it with [`add_child`](Self::add_child).
    ///
    /// On failure the tree is unchanged: nothing reachable from the root is
    /// touched.
    pub fn parse_fragment(&mut self, text: &str) -> SyntaxResult<NodeId> {
        parse_into(&mut self.arena, text)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Render the whole document to markup text.
    pub fn to_markup(&self) -> String {
        markup::render(&self.arena, self.root)
    }

    /// Render an arbitrary subtree to markup text.
    pub fn render(&self, node: NodeId) -> String {
        markup::render(&self.arena, node)
    }

    // ------------------------------------------------------------------
    // Node construction
    // ------------------------------------------------------------------

    /// Construct a detached element node of the given kind.
    pub fn new_element(&mut self, kind: TagKind, attributes: Attributes) -> NodeId {
        self.arena.alloc_element(kind, attributes)
    }

    /// Construct a detached text leaf.
    pub fn new_text(&mut self, payload: impl Into<String>) -> NodeId {
        self.arena.alloc_text(payload)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    pub fn add_child(&mut self, container: NodeId, child: NodeId) -> MutationResult<NodeId> {
        self.arena.add_child(container, child)
    }

    pub fn remove_child(&mut self, container: NodeId, child: NodeId) -> Option<NodeId> {
        self.arena.remove_child(container, child)
    }

    pub fn remove_nth_child(&mut self, container: NodeId, n: usize) -> MutationResult<NodeId> {
        self.arena.remove_nth_child(container, n)
    }

    pub fn children(&self, container: NodeId) -> Vec<NodeId> {
        self.arena.children(container)
    }

    pub fn siblings(&self, node: NodeId) -> Vec<NodeId> {
        self.arena.siblings(node)
    }

    // ------------------------------------------------------------------
    // Traversal from the root
    // ------------------------------------------------------------------

    /// First node matching the kind name (case-insensitive), breadth-first.
    pub fn find(&self, tag: &str) -> Option<NodeId> {
        ast::find(&self.arena, self.root, tag)
    }

    /// First node with the given identifier, breadth-first.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        ast::find_by_id(&self.arena, self.root, id)
    }

    /// Every node matching the kind name, breadth-first.
    pub fn find_all(&self, tag: &str) -> Vec<NodeId> {
        ast::find_all(&self.arena, self.root, tag)
    }

    /// Every container and non-text leaf in the document.
    pub fn traverse_all(&self) -> HashSet<NodeId> {
        ast::traverse_all(&self.arena, self.root)
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Normalized serializable snapshot of the whole document.
    pub fn snapshot(&self) -> NodeSnapshot {
        snapshot_from_node(&self.arena, self.root)
    }

    /// One-line-per-node visualization of the whole document.
    pub fn to_treeviz_str(&self) -> String {
        treeviz::to_treeviz_str(&self.arena, self.root)
    }
}

impl Default for SsmlTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tree_root_markup() {
        let tree = SsmlTree::new();
        assert_eq!(
            tree.to_markup(),
            r#"<speak xml:lang="en" xml:id="root"></speak>"#
        );
    }

    #[test]
    fn test_from_markup_replaces_root_attributes() {
        let tree = SsmlTree::from_markup(r#"<speak xml:lang="fr">bonjour</speak>"#).unwrap();
        assert_eq!(tree.arena().attribute(tree.root(), "lang"), Some("fr"));
        assert_eq!(tree.arena().identifier(tree.root()), None);
    }

    #[test]
    fn test_fluent_construction_and_render() {
        let mut tree = SsmlTree::new();
        let par = tree.new_element(TagKind::Par, Attributes::new());
        let media = tree.new_element(TagKind::Media, Attributes::new().set("begin", "0s"));
        tree.add_child(tree.root(), par).unwrap();
        tree.add_child(par, media).unwrap();
        assert_eq!(
            tree.to_markup(),
            r#"<speak xml:lang="en" xml:id="root"><par><media begin="0s"></media></par></speak>"#
        );
    }

    #[test]
    fn test_parse_fragment_is_detached_until_attached() {
        let mut tree = SsmlTree::new();
        let fragment = tree.parse_fragment("<par><seq></seq></par>").unwrap();
        assert!(!tree.to_markup().contains("<par>"));
        tree.add_child(tree.root(), fragment).unwrap();
        assert!(tree.to_markup().contains("<par><seq></seq></par>"));
    }

    #[test]
    fn test_failed_fragment_parse_leaves_tree_unchanged() {
        let mut tree = SsmlTree::new();
        let before = tree.to_markup();
        assert!(tree.parse_fragment("<par>oops").is_err());
        assert_eq!(tree.to_markup(), before);
    }

    #[test]
    fn test_find_by_id_on_parsed_document() {
        let tree =
            SsmlTree::from_markup(r#"<speak><par xml:id="p1"><media xml:id="m1"></media></par></speak>"#)
                .unwrap();
        let media = tree.find_by_id("m1").unwrap();
        assert_eq!(tree.arena().kind(media), TagKind::Media);
        assert_eq!(tree.find_by_id("nope"), None);
    }
}
