// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of mounted cells for the document-level listener.
//!
//! Each mounted cell needs to hear about touches that start anywhere on the
//! page, for exactly as long as it is mounted. [`TouchRegistry`] models the
//! page-wide listener's subscriber list; [`TouchRegistry::register`] returns
//! an RAII [`Registration`] guard that removes the entry when dropped, so
//! deregistration is guaranteed on every unmount path.
//!
//! ```rust
//! use swipecell::TouchRegistry;
//!
//! let registry = TouchRegistry::new();
//! let row_a = registry.register(1_u32);
//! let row_b = registry.register(2_u32);
//! assert_eq!(registry.ids(), vec![1, 2]);
//!
//! drop(row_a);
//! assert_eq!(registry.ids(), vec![2]);
//! # drop(row_b);
//! ```
//!
//! On a document-level touch start, the host snapshots [`TouchRegistry::ids`]
//! and calls [`SwipeCell::handle_outside_touch`](crate::SwipeCell::handle_outside_touch)
//! on each registered cell, computing the inside/outside bit with
//! [`ancestry::within_any`](crate::ancestry::within_any).

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Shared subscriber list for the page-wide touch listener.
///
/// Cloning yields another handle to the same list. `I` is the host's cell
/// identifier type (an index, a generational handle, a node key).
pub struct TouchRegistry<I> {
    entries: Rc<RefCell<Vec<I>>>,
}

impl<I: Copy + PartialEq> TouchRegistry<I> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Registers a cell, returning a guard that deregisters it on drop.
    ///
    /// Duplicate ids are allowed; each guard removes one occurrence.
    #[must_use]
    pub fn register(&self, id: I) -> Registration<I> {
        self.entries.borrow_mut().push(id);
        Registration {
            entries: Rc::clone(&self.entries),
            id,
        }
    }

    /// Returns a snapshot of the registered ids, in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<I> {
        self.entries.borrow().clone()
    }

    /// Returns the number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when no cell is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<I: Copy + PartialEq> Default for TouchRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for TouchRegistry<I> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for TouchRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchRegistry")
            .field("entries", &self.entries.borrow())
            .finish()
    }
}

/// RAII guard for one cell's registration; dropping it deregisters the cell.
#[derive(Debug)]
pub struct Registration<I: Copy + PartialEq> {
    entries: Rc<RefCell<Vec<I>>>,
    id: I,
}

impl<I: Copy + PartialEq> Registration<I> {
    /// Returns the registered id.
    #[must_use]
    pub fn id(&self) -> I {
        self.id
    }
}

impl<I: Copy + PartialEq> Drop for Registration<I> {
    fn drop(&mut self) {
        let mut entries = self.entries.borrow_mut();
        if let Some(index) = entries.iter().position(|entry| *entry == self.id) {
            entries.remove(index);
        }
    }
}
