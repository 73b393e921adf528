//! Schema-checked mutation behavior across the full container/child matrix.

use rstest::rstest;
use ssml::ssml::{Arena, Attributes, MutationError, NodeId, TagKind};

fn alloc(arena: &mut Arena, kind: TagKind) -> NodeId {
    match kind {
        TagKind::Text => arena.alloc_text("x"),
        _ => arena.alloc_element(kind, Attributes::new()),
    }
}

/// Every container/child pair either links or fails with a schema violation,
/// exactly as the kind tables dictate.
#[rstest]
fn test_schema_matrix(
    #[values(
        TagKind::Speak,
        TagKind::Media,
        TagKind::Audio,
        TagKind::Seq,
        TagKind::Par,
        TagKind::Prosody,
        TagKind::Text,
        TagKind::Break
    )]
    container: TagKind,
    #[values(
        TagKind::Speak,
        TagKind::Media,
        TagKind::Audio,
        TagKind::Seq,
        TagKind::Par,
        TagKind::Prosody,
        TagKind::Text,
        TagKind::Break
    )]
    child: TagKind,
) {
    let mut arena = Arena::new();
    let parent = alloc(&mut arena, container);
    let node = alloc(&mut arena, child);

    let result = arena.add_child(parent, node);
    if container.allows_child(child) {
        assert_eq!(result, Ok(node));
        assert_eq!(arena.parent(node), Some(parent));
        assert_eq!(arena.children(parent), vec![node]);
    } else {
        assert_eq!(
            result,
            Err(MutationError::SchemaViolation { container, child })
        );
        assert_eq!(arena.parent(node), None);
        assert!(arena.children(parent).is_empty());
    }
}

#[rstest]
#[case::speak(TagKind::Speak)]
#[case::media(TagKind::Media)]
#[case::seq(TagKind::Seq)]
#[case::par(TagKind::Par)]
fn test_attaching_to_a_second_parent_fails(#[case] first_parent: TagKind) {
    let mut arena = Arena::new();
    let parent = alloc(&mut arena, first_parent);
    let speak = arena.alloc_element(TagKind::Speak, Attributes::new());
    let other = arena.alloc_element(TagKind::Speak, Attributes::new());

    if first_parent == TagKind::Media || first_parent == TagKind::Speak {
        arena.add_child(parent, speak).unwrap();
    } else {
        // seq and par reject speak children; attach under a media instead
        let media = arena.alloc_element(TagKind::Media, Attributes::new());
        arena.add_child(parent, media).unwrap();
        arena.add_child(media, speak).unwrap();
    }
    assert!(matches!(
        arena.add_child(other, speak),
        Err(MutationError::AlreadyChild { .. })
    ));
}

#[test]
fn test_detach_then_reattach_elsewhere() {
    let mut arena = Arena::new();
    let seq = arena.alloc_element(TagKind::Seq, Attributes::new());
    let par = arena.alloc_element(TagKind::Par, Attributes::new());
    let media = arena.alloc_element(TagKind::Media, Attributes::new());

    arena.add_child(seq, media).unwrap();
    assert_eq!(arena.remove_child(seq, media), Some(media));
    arena.add_child(par, media).unwrap();
    assert_eq!(arena.parent(media), Some(par));
    assert!(arena.children(seq).is_empty());
}

#[test]
fn test_remove_nth_keeps_chain_consistent() {
    let mut arena = Arena::new();
    let speak = arena.alloc_element(TagKind::Speak, Attributes::new());
    let children: Vec<NodeId> = (0..4).map(|i| arena.alloc_text(format!("t{i}"))).collect();
    for child in &children {
        arena.add_child(speak, *child).unwrap();
    }

    // remove from the middle, the head, then the tail
    arena.remove_nth_child(speak, 1).unwrap();
    assert_eq!(arena.children(speak), vec![children[0], children[2], children[3]]);
    arena.remove_nth_child(speak, 0).unwrap();
    assert_eq!(arena.first_child(speak), Some(children[2]));
    arena.remove_nth_child(speak, 1).unwrap();
    assert_eq!(arena.children(speak), vec![children[2]]);
    assert!(arena.is_head(children[2]) && arena.is_tail(children[2]));

    assert_eq!(
        arena.remove_nth_child(speak, 1),
        Err(MutationError::IndexOutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn test_mutation_matches_serialization() {
    let mut tree = ssml::ssml::SsmlTree::new();
    let seq = tree.new_element(TagKind::Seq, Attributes::new());
    let m1 = tree.new_element(TagKind::Media, Attributes::new().set("begin", "0s"));
    let m2 = tree.new_element(TagKind::Media, Attributes::new().set("begin", "3s"));
    tree.add_child(tree.root(), seq).unwrap();
    tree.add_child(seq, m1).unwrap();
    tree.add_child(seq, m2).unwrap();
    tree.remove_child(seq, m1);

    assert_eq!(
        tree.to_markup(),
        r#"<speak xml:lang="en" xml:id="root"><seq><media begin="3s"></media></seq></speak>"#
    );
}
