//! Testing utilities
//!
//!     Verified sample documents and factory helpers shared by unit and
//!     integration tests. Keeping the markup sources in one place avoids the
//!     slow drift of slightly-wrong ad-hoc strings across test files: a test
//!     exercising the parser should reach for one of these samples rather
//!     than invent its own.
//!
//!     Everything here is plain library code so integration tests under
//!     `tests/` can use it too.

use super::ast::{Attributes, TagKind};
use super::tree::SsmlTree;

/// The canonical narrated-audio document: every container kind except
/// `audio`, an inline break, and nested same-name containers.
pub const NARRATED_SAMPLE: &str = r#"<speak xml:lang="en"><par><media begin="0s"><speak><break time="20s"/></speak></media></par></speak>"#;

/// A document whose body interleaves text, a container and more text,
/// with repeated token text. Exercises the ordering merge.
pub const INTERLEAVED_SAMPLE: &str = "<speak>A <par><media><speak>B</speak></media></par> A</speak>";

/// Build a document through the mutation API only:
///
///     speak#root > [text, break, par > media > speak > text]
///
/// Mirrors what a caption-to-tree converter would produce.
pub fn build_sample_tree() -> SsmlTree {
    let mut tree = SsmlTree::new();
    let root = tree.root();
    let intro = tree.new_text("welcome ");
    let pause = tree.new_element(TagKind::Break, Attributes::new().set("time", "500ms"));
    let par = tree.new_element(TagKind::Par, Attributes::new().set("id", "p1"));
    let media = tree.new_element(
        TagKind::Media,
        Attributes::new().set("begin", "0s").set("soundLevel", "+2dB"),
    );
    let inner = tree.new_element(TagKind::Speak, Attributes::new());
    let line = tree.new_text("first caption line");

    tree.add_child(root, intro).expect("schema-valid");
    tree.add_child(root, pause).expect("schema-valid");
    tree.add_child(root, par).expect("schema-valid");
    tree.add_child(par, media).expect("schema-valid");
    tree.add_child(media, inner).expect("schema-valid");
    tree.add_child(inner, line).expect("schema-valid");
    tree
}
