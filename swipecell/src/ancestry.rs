// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability-agnostic tree-ancestry tests for the outside-touch close path.
//!
//! When a touch starts anywhere on the page, an open cell must decide whether
//! the touch landed inside one of its action regions (in which case the touch
//! is a button press and the cell stays open) or outside (in which case the
//! cell closes). The host's node tree is abstracted behind a parent lookup so
//! the test works against any scene graph, DOM, or widget tree: walk from the
//! touch target towards the root, checking each node against the registered
//! action-region containers.
//!
//! ```rust
//! use swipecell::ancestry::within_any;
//!
//! // A tiny tree: 1 is the root, the left region is node 3, a button in it
//! // is node 4, and node 5 is unrelated content.
//! let parent = |node: u32| match node {
//!     2 | 5 => Some(1),
//!     3 => Some(2),
//!     4 => Some(3),
//!     _ => None,
//! };
//!
//! assert!(within_any(&parent, 4, &[3]));
//! assert!(!within_any(&parent, 5, &[3]));
//! ```

/// Parent lookup over the host's node tree.
///
/// The lookup must describe a tree: repeatedly taking parents from any node
/// must terminate at a root (`None`). Implemented for plain closures of type
/// `Fn(K) -> Option<K>`.
pub trait Ancestry<K> {
    /// Returns the parent of `node`, or `None` at a root.
    fn parent(&self, node: K) -> Option<K>;
}

impl<K, F> Ancestry<K> for F
where
    F: Fn(K) -> Option<K>,
{
    fn parent(&self, node: K) -> Option<K> {
        self(node)
    }
}

/// Returns `true` if `target` lies in the subtree rooted at `root`
/// (including `root` itself).
pub fn within_subtree<K, A>(tree: &A, target: K, root: K) -> bool
where
    K: Copy + PartialEq,
    A: Ancestry<K>,
{
    within_any(tree, target, &[root])
}

/// Returns `true` if `target` lies in any of the subtrees rooted at `roots`.
///
/// The walk visits each ancestor of `target` once, so checking both action
/// regions costs a single pass.
pub fn within_any<K, A>(tree: &A, target: K, roots: &[K]) -> bool
where
    K: Copy + PartialEq,
    A: Ancestry<K>,
{
    let mut node = Some(target);
    while let Some(current) = node {
        if roots.contains(&current) {
            return true;
        }
        node = tree.parent(current);
    }
    false
}
