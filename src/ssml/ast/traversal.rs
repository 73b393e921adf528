//! Breadth-first search over subtrees
//!
//!     All searches start from a container's immediate children (the start
//!     node itself never matches) and only descend into nodes that are
//!     themselves containers. Calling any of these with a non-container start
//!     node returns `None`/empty rather than failing.

use super::arena::{Arena, NodeId};
use super::kind::TagKind;
use std::collections::{HashSet, VecDeque};

/// First node in breadth-first order whose kind name equals `tag`
/// (case-insensitive). Text leaves answer to `"text"`.
pub fn find(arena: &Arena, start: NodeId, tag: &str) -> Option<NodeId> {
    let tag = tag.to_ascii_lowercase();
    search(arena, start, |node| arena.kind(node).tag_name() == tag)
}

/// First node in breadth-first order whose identifier equals `id`.
pub fn find_by_id(arena: &Arena, start: NodeId, id: &str) -> Option<NodeId> {
    search(arena, start, |node| arena.identifier(node) == Some(id))
}

/// Every node matching the kind name, in breadth-first order.
pub fn find_all(arena: &Arena, start: NodeId, tag: &str) -> Vec<NodeId> {
    if !arena.is_container(start) {
        return Vec::new();
    }
    let tag = tag.to_ascii_lowercase();
    let mut matched = Vec::new();
    let mut queue: VecDeque<NodeId> = arena.children(start).into();
    while let Some(node) = queue.pop_front() {
        if arena.kind(node).tag_name() == tag {
            matched.push(node);
        }
        if arena.is_container(node) {
            queue.extend(arena.children(node));
        }
    }
    matched
}

/// Every container and non-text leaf reachable from `start`, including
/// `start` itself. Used for whole-tree inspection, not ordered output.
pub fn traverse_all(arena: &Arena, start: NodeId) -> HashSet<NodeId> {
    let mut nodes = HashSet::new();
    if !arena.is_container(start) {
        return nodes;
    }
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        if arena.is_container(node) {
            nodes.insert(node);
            queue.extend(arena.children(node));
        } else if arena.kind(node) != TagKind::Text {
            nodes.insert(node);
        }
    }
    nodes
}

fn search(arena: &Arena, start: NodeId, matches: impl Fn(NodeId) -> bool) -> Option<NodeId> {
    if !arena.is_container(start) {
        return None;
    }
    let mut queue: VecDeque<NodeId> = arena.children(start).into();
    while let Some(node) = queue.pop_front() {
        if matches(node) {
            return Some(node);
        }
        if arena.is_container(node) {
            queue.extend(arena.children(node));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::attributes::Attributes;
    use super::*;

    /// speak > [par > [media #m1 > audio, media #m2], break]
    fn sample() -> (Arena, NodeId) {
        let mut arena = Arena::new();
        let speak = arena.alloc_element(TagKind::Speak, Attributes::new());
        let par = arena.alloc_element(TagKind::Par, Attributes::new());
        let m1 = arena.alloc_element(TagKind::Media, Attributes::new().set("id", "m1"));
        let m2 = arena.alloc_element(TagKind::Media, Attributes::new().set("id", "m2"));
        let audio = arena.alloc_element(TagKind::Audio, Attributes::new());
        let brk = arena.alloc_element(TagKind::Break, Attributes::new());
        arena.add_child(speak, par).unwrap();
        arena.add_child(par, m1).unwrap();
        arena.add_child(par, m2).unwrap();
        arena.add_child(m1, audio).unwrap();
        arena.add_child(speak, brk).unwrap();
        (arena, speak)
    }

    #[test]
    fn test_find_is_breadth_first() {
        let (arena, speak) = sample();
        // The break sits at depth 1 and must win over the deeper audio.
        let found = find(&arena, speak, "break").unwrap();
        assert_eq!(arena.kind(found), TagKind::Break);
        let media = find(&arena, speak, "MEDIA").unwrap();
        assert_eq!(arena.identifier(media), Some("m1"));
    }

    #[test]
    fn test_find_all_collects_in_bfs_order() {
        let (arena, speak) = sample();
        let all = find_all(&arena, speak, "media");
        let ids: Vec<_> = all.iter().map(|n| arena.identifier(*n)).collect();
        assert_eq!(ids, vec![Some("m1"), Some("m2")]);
    }

    #[test]
    fn test_find_by_id() {
        let (arena, speak) = sample();
        let m2 = find_by_id(&arena, speak, "m2").unwrap();
        assert_eq!(arena.identifier(m2), Some("m2"));
        assert_eq!(find_by_id(&arena, speak, "missing"), None);
    }

    #[test]
    fn test_non_container_start_is_empty() {
        let (mut arena, _) = sample();
        let brk = arena.alloc_element(TagKind::Break, Attributes::new());
        assert_eq!(find(&arena, brk, "speak"), None);
        assert!(find_all(&arena, brk, "speak").is_empty());
        assert!(traverse_all(&arena, brk).is_empty());
    }

    #[test]
    fn test_traverse_all_excludes_text_includes_start() {
        let (mut arena, speak) = sample();
        let text = arena.alloc_text("hello");
        arena.add_child(speak, text).unwrap();
        let nodes = traverse_all(&arena, speak);
        assert!(nodes.contains(&speak));
        assert!(!nodes.contains(&text));
        // speak, par, 2 media, audio, break
        assert_eq!(nodes.len(), 6);
    }
}
