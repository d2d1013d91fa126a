// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swipecell --heading-base-level=0

//! Swipecell: a headless swipe-to-reveal row widget.
//!
//! This crate implements the interaction core of a list-row "swipeout"
//! component: swiping the row's content panel horizontally reveals a strip of
//! action buttons on the left or right, releasing past the half-width of that
//! strip snaps the row open, and releasing earlier (or touching anywhere else
//! on the page) snaps it closed.
//!
//! The crate is renderer-agnostic and does not assume any particular UI
//! framework, gesture recognizer, or node tree. [`SwipeCell`] is a small
//! stateful controller; host toolkits are responsible for:
//!
//! - Feeding cumulative pan displacements from their gesture recognizer into
//!   [`SwipeCell::on_pan_start`], [`SwipeCell::on_pan`], and
//!   [`SwipeCell::on_pan_end`].
//! - Measuring the rendered pixel widths of the two action regions after
//!   layout and feeding them back via [`SwipeCell::set_measured_widths`]
//!   (re-measure when the action lists change).
//! - Reading the [`CellView`] snapshot from [`SwipeCell::view`] and applying
//!   it to real nodes: content offset, cover visibility, prefix-derived class
//!   names, and button labels.
//! - Routing activations of rendered buttons into [`SwipeCell::press`].
//! - Routing document-level touch starts into the outside-touch close path,
//!   using the [`ancestry`] parent-walk helpers and (optionally) a
//!   [`TouchRegistry`] of mounted cells.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use swipecell::{Action, OpenState, SwipeCell};
//!
//! let mut cell = SwipeCell::new()
//!     .with_left(vec![Action::new("Archive")])
//!     .with_right(vec![Action::new("Delete")]);
//!
//! // The host measures the rendered action strips after layout.
//! cell.set_measured_widths(80.0, 120.0);
//!
//! // A rightward drag of 50px: past half the left strip's width, so the
//! // row snaps open on release and the offset lands on the full width.
//! cell.on_pan_start(Vec2::ZERO);
//! cell.on_pan(Vec2::new(50.0, 4.0));
//! cell.on_pan_end(Vec2::new(50.0, 4.0));
//!
//! assert_eq!(cell.state(), OpenState::OpenedLeft);
//! assert_eq!(cell.content_offset(), 80.0);
//!
//! cell.close();
//! assert_eq!(cell.state(), OpenState::Closed);
//! assert_eq!(cell.content_offset(), 0.0);
//! ```
//!
//! ## Gesture model
//!
//! Pan events carry the recognizer's *cumulative* displacement since the
//! gesture began. [`PanSession`] subtracts the displacement captured at
//! pan-start, classifies each move by dominant axis (vertical-dominant moves
//! are ignored so scrolling passes through), and locks the reachable side to
//! the first horizontal direction of the session — a mid-gesture reversal
//! clamps the offset at zero rather than switching sides.
//!
//! While the drag stays within the action strip's width the content tracks
//! the finger 1:1; past the fully-open position the offset grows sub-linearly
//! ([`rubber_band`]), giving resistance feedback.
//!
//! ## Outside-touch close
//!
//! An open row closes when a touch starts anywhere outside its action
//! regions. The [`ancestry`] module provides the capability-agnostic subtree
//! test (walk from the touch target toward the root via a parent lookup), and
//! [`TouchRegistry`] hands out RAII [`Registration`] guards so each mounted
//! cell is registered for the document-level listener exactly for its own
//! lifetime.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("swipecell requires either the `std` or `libm` feature");

mod action;
pub mod ancestry;
mod cell;
mod easing;
mod gesture;
mod registry;
mod view;

pub use action::Action;
pub use cell::{DEFAULT_PREFIX, OpenState, SwipeCell};
pub use easing::rubber_band;
pub use gesture::{PanSession, Side};
pub use registry::{Registration, TouchRegistry};
pub use view::{ButtonView, CellView, CoverView, RegionView};
