// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag pan session: baseline capture, axis classification, side lock.

use kurbo::Vec2;

/// One of the two action regions a row can reveal.
///
/// Swiping the content panel *rightwards* (positive x) reveals the **left**
/// region, and swiping *leftwards* reveals the **right** region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The strip of buttons on the left edge of the row.
    Left,
    /// The strip of buttons on the right edge of the row.
    Right,
}

impl Side {
    /// Returns the side revealed by a horizontal displacement, if any.
    ///
    /// Positive displacement (moving right) uncovers the left region and
    /// vice versa; a zero displacement reveals nothing.
    #[must_use]
    pub fn revealed_by(pos_x: f64) -> Option<Self> {
        if pos_x > 0.0 {
            Some(Self::Left)
        } else if pos_x < 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Tracks the transient state of a single pan gesture.
///
/// Pan recognizers report *cumulative* displacement since the gesture began;
/// the displacement present when the pan-start event fires is captured as a
/// baseline and subtracted from every later report, so the session works in
/// coordinates relative to where horizontal panning actually started.
///
/// The session also records whether the gesture has been recognized as a
/// horizontal swipe at all (`is_swiping`), and which side it is locked to.
/// The lock is set by the first horizontal move and never changes for the
/// rest of the gesture: reversing direction mid-swipe clamps at zero instead
/// of switching to the opposite region.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanSession {
    baseline: Option<Vec2>,
    locked: Option<Side>,
    swiping: bool,
}

impl PanSession {
    /// Begins a new session, capturing the recognizer's current cumulative
    /// displacement as the baseline.
    ///
    /// Any state from a previous session is discarded.
    pub fn start(&mut self, delta: Vec2) {
        self.baseline = Some(delta);
        self.locked = None;
        self.swiping = false;
    }

    /// Returns the displacement relative to the session baseline, or `None`
    /// if no session is active.
    #[must_use]
    pub fn displacement(&self, delta: Vec2) -> Option<Vec2> {
        self.baseline.map(|baseline| delta - baseline)
    }

    /// Returns `true` while a session is active (between start and finish).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// Returns `true` once the session has been recognized as a horizontal
    /// swipe.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    /// Returns the side this session is locked to, if any.
    #[must_use]
    pub fn locked_side(&self) -> Option<Side> {
        self.locked
    }

    /// Marks the session as swiping, locking it to `side` if no lock is set.
    ///
    /// A later call with the opposite side keeps the original lock.
    pub fn lock(&mut self, side: Side) {
        if self.locked.is_none() {
            self.locked = Some(side);
        }
        self.swiping = true;
    }

    /// Ends the session, returning whether it had been recognized as a swipe.
    pub fn finish(&mut self) -> bool {
        let was_swiping = self.swiping;
        self.baseline = None;
        self.locked = None;
        self.swiping = false;
        was_swiping
    }
}

/// Returns `true` when a move is horizontal-dominant.
///
/// Moves with `|x| <= |y|` are treated as vertical scrolling and ignored.
pub(crate) fn horizontal_dominant(pos: Vec2) -> bool {
    pos.x.abs() > pos.y.abs()
}
