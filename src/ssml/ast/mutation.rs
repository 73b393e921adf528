//! Container mutation API
//!
//!     Schema-checked add/remove child operations. These are the only
//!     functions that write sibling and parent links from outside the parser,
//!     and they maintain the chain invariants on every call:
//!
//!         - if A.next = B then B.prev = A, for every adjacent pair
//!         - the first child of a container has no previous sibling, the
//!           last has no next sibling
//!         - a node belongs to exactly one parent at a time
//!
//!     Insertion appends at the tail of the sibling chain, which is an
//!     O(children) walk. Document sizes are small enough that keeping a tail
//!     pointer is not worth the extra link maintenance.
//!
//!     Only the immediate self-reference case is rejected; inserting a node's
//!     ancestor under it is a caller responsibility.

use super::arena::{Arena, NodeId};
use super::error::{MutationError, MutationResult};

impl Arena {
    /// Append `child` to the end of `container`'s child chain.
    ///
    /// Fails with [`MutationError::SchemaViolation`] if the child kind is not
    /// in the container kind's allowed-child set, with
    /// [`MutationError::SelfReference`] if `child` is `container`, and with
    /// [`MutationError::AlreadyChild`] if `child` is currently attached to any
    /// parent (including `container` itself).
    ///
    /// Returns the child handle so nested constructions can chain.
    pub fn add_child(&mut self, container: NodeId, child: NodeId) -> MutationResult<NodeId> {
        let container_kind = self.kind(container);
        let child_kind = self.kind(child);
        if !container_kind.allows_child(child_kind) {
            return Err(MutationError::SchemaViolation {
                container: container_kind,
                child: child_kind,
            });
        }
        if container == child {
            return Err(MutationError::SelfReference);
        }
        if let Some(parent) = self.parent(child) {
            return Err(MutationError::AlreadyChild {
                parent: self.kind(parent),
            });
        }

        match self.first_child(container) {
            None => {
                self.node_mut(container).first_child = Some(child);
            }
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.next_sibling(tail) {
                    tail = next;
                }
                self.node_mut(tail).next = Some(child);
                self.node_mut(child).prev = Some(tail);
            }
        }
        self.node_mut(child).parent = Some(container);
        Ok(child)
    }

    /// Detach `child` from `container`.
    ///
    /// Returns `None` when `child` is not currently a child of `container`.
    /// After removal the node is fully detached (no parent or sibling links)
    /// and reusable as a child elsewhere.
    pub fn remove_child(&mut self, container: NodeId, child: NodeId) -> Option<NodeId> {
        if self.parent(child) != Some(container) {
            return None;
        }
        self.unlink(child);
        Some(child)
    }

    /// Detach the `n`-th child (document order) of `container`.
    ///
    /// Fails with [`MutationError::IndexOutOfRange`] when `n` is not below the
    /// current child count.
    pub fn remove_nth_child(&mut self, container: NodeId, n: usize) -> MutationResult<NodeId> {
        let children = self.children(container);
        let child = *children
            .get(n)
            .ok_or(MutationError::IndexOutOfRange {
                index: n,
                len: children.len(),
            })?;
        self.unlink(child);
        Ok(child)
    }

    /// The container's children in document order. Empty for leaves.
    pub fn children(&self, container: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.first_child(container);
        while let Some(node) = current {
            result.push(node);
            current = self.next_sibling(node);
        }
        result
    }

    /// All other nodes sharing `node`'s parent, collected by walking both
    /// directions of the sibling chain. Order is not document order.
    pub fn siblings(&self, node: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.prev_sibling(node);
        while let Some(sibling) = current {
            result.push(sibling);
            current = self.prev_sibling(sibling);
        }
        let mut current = self.next_sibling(node);
        while let Some(sibling) = current {
            result.push(sibling);
            current = self.next_sibling(sibling);
        }
        result
    }

    /// Splice `node` out of its sibling chain and clear all of its links.
    /// Bridges prev.next and next.prev around it and fixes the parent's
    /// first-child handle when the head is removed.
    fn unlink(&mut self, node: NodeId) {
        let prev = self.prev_sibling(node);
        let next = self.next_sibling(node);
        if let Some(prev) = prev {
            self.node_mut(prev).next = next;
        } else if let Some(parent) = self.parent(node) {
            self.node_mut(parent).first_child = next;
        }
        if let Some(next) = next {
            self.node_mut(next).prev = prev;
        }
        let data = self.node_mut(node);
        data.parent = None;
        data.prev = None;
        data.next = None;
    }
}
