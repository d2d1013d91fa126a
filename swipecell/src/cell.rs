// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `SwipeCell` controller: open/close state, pan handling, and dispatch.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

use crate::action::Action;
use crate::easing::rubber_band;
use crate::gesture::{PanSession, Side, horizontal_dominant};

/// Default style class prefix used for generated class names.
pub const DEFAULT_PREFIX: &str = "swipecell";

/// Open/closed state of a row.
///
/// At most one side is open at a time; the state is not persisted across
/// host unmounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenState {
    /// The content panel is at rest and no action region is revealed.
    #[default]
    Closed,
    /// The left action region is fully revealed.
    OpenedLeft,
    /// The right action region is fully revealed.
    OpenedRight,
}

impl OpenState {
    /// Returns `true` if either side is open.
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the open side, if any.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Self::Closed => None,
            Self::OpenedLeft => Some(Side::Left),
            Self::OpenedRight => Some(Side::Right),
        }
    }

    fn opened(side: Side) -> Self {
        match side {
            Side::Left => Self::OpenedLeft,
            Side::Right => Self::OpenedRight,
        }
    }
}

type TransitionCallback = Box<dyn FnMut()>;

/// A headless swipe-to-reveal row.
///
/// The cell owns the open/closed state machine, the per-drag [`PanSession`],
/// the measured widths of both action regions, and the current content
/// offset. It is driven entirely by the host: pan displacements in, a
/// [`CellView`](crate::CellView) snapshot out.
///
/// See the crate-level documentation for the full host contract and a
/// worked example.
pub struct SwipeCell {
    prefix: String,
    disabled: bool,
    auto_close: bool,
    left: Vec<Action>,
    right: Vec<Action>,
    attrs: Vec<(String, String)>,
    on_open: Option<TransitionCallback>,
    on_close: Option<TransitionCallback>,
    state: OpenState,
    offset: f64,
    left_width: f64,
    right_width: f64,
    session: PanSession,
}

impl Default for SwipeCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeCell {
    /// Creates a closed cell with no actions and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::from(DEFAULT_PREFIX),
            disabled: false,
            auto_close: false,
            left: Vec::new(),
            right: Vec::new(),
            attrs: Vec::new(),
            on_open: None,
            on_close: None,
            state: OpenState::Closed,
            offset: 0.0,
            left_width: 0.0,
            right_width: 0.0,
            session: PanSession::default(),
        }
    }

    /// Sets the style class prefix used for generated class names.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Disables or enables the cell. A disabled cell renders its content
    /// plainly and ignores gestures.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Makes every button press snap the cell closed afterwards.
    #[must_use]
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Sets the left action list (revealed by swiping right).
    #[must_use]
    pub fn with_left(mut self, left: Vec<Action>) -> Self {
        self.left = left;
        self
    }

    /// Sets the right action list (revealed by swiping left).
    #[must_use]
    pub fn with_right(mut self, right: Vec<Action>) -> Self {
        self.right = right;
        self
    }

    /// Adds a pass-through attribute applied to the root element.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Sets the callback fired on every closed→opened transition.
    #[must_use]
    pub fn with_on_open(mut self, on_open: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }

    /// Sets the callback fired on every opened→closed transition.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Feeds back the rendered pixel widths of the two action regions.
    ///
    /// Hosts measure once after the first layout and again whenever the
    /// action lists change. Negative widths are treated as zero. If the cell
    /// is currently open, the offset re-snaps to the new width.
    pub fn set_measured_widths(&mut self, left: f64, right: f64) {
        self.left_width = left.max(0.0);
        self.right_width = right.max(0.0);
        if let Some(side) = self.state.side() {
            self.apply_offset(self.full_offset(side));
        }
    }

    /// Replaces both action lists.
    ///
    /// The region widths must be re-measured afterwards. If the currently
    /// open side ends up empty the cell closes (firing the close callback).
    pub fn set_actions(&mut self, left: Vec<Action>, right: Vec<Action>) {
        self.left = left;
        self.right = right;
        if let Some(side) = self.state.side()
            && self.actions(side).is_empty()
        {
            self.close();
        }
    }

    /// Disables or enables the cell at runtime. Disabling an open cell
    /// closes it first.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.state.is_open() {
            self.close();
        }
        self.disabled = disabled;
        if disabled {
            self.session.finish();
            self.offset = 0.0;
        }
    }

    /// Changes the auto-close behavior at runtime.
    pub fn set_auto_close(&mut self, auto_close: bool) {
        self.auto_close = auto_close;
    }

    /// Returns the current open/closed state.
    #[must_use]
    pub fn state(&self) -> OpenState {
        self.state
    }

    /// Returns `true` if either side is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns `true` while an in-progress gesture has been recognized as a
    /// horizontal swipe.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.session.is_swiping()
    }

    /// Returns the content panel's current visual offset in pixels.
    ///
    /// Positive offsets move the content right (revealing the left region).
    #[must_use]
    pub fn content_offset(&self) -> f64 {
        self.offset
    }

    /// Returns `true` when the translucent cover should intercept touches,
    /// which is exactly when the content is displaced from rest.
    #[must_use]
    pub fn cover_visible(&self) -> bool {
        self.offset != 0.0
    }

    /// Returns the style class prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if the cell is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the pass-through root attributes.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Returns the actions on the given side.
    #[must_use]
    pub fn actions(&self, side: Side) -> &[Action] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns `true` when the cell renders interactively: at least one
    /// action list is non-empty and the cell is not disabled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && (!self.left.is_empty() || !self.right.is_empty())
    }

    /// Handles the pan-start event, capturing the recognizer's cumulative
    /// displacement as the session baseline.
    pub fn on_pan_start(&mut self, delta: Vec2) {
        if !self.is_interactive() {
            return;
        }
        self.session.start(delta);
    }

    /// Handles a pan-move event.
    ///
    /// Vertical-dominant moves are ignored so scrolling passes through.
    /// The first horizontal move locks the gesture to the side it reveals
    /// (provided that side has actions); later moves update the offset,
    /// clamped so it cannot cross zero towards the other side.
    pub fn on_pan(&mut self, delta: Vec2) {
        if !self.is_interactive() {
            return;
        }
        let Some(pos) = self.session.displacement(delta) else {
            return;
        };
        if !horizontal_dominant(pos) {
            return;
        }
        let side = match self.session.locked_side() {
            Some(side) => side,
            None => {
                let Some(side) = Side::revealed_by(pos.x) else {
                    return;
                };
                if self.actions(side).is_empty() {
                    return;
                }
                side
            }
        };
        self.session.lock(side);
        let raw = match side {
            Side::Left => pos.x.max(0.0),
            Side::Right => pos.x.min(0.0),
        };
        self.apply_offset(raw);
    }

    /// Handles the pan-end event, snapping open or closed.
    ///
    /// A gesture that was never recognized as a swipe is a no-op. Otherwise
    /// the cell opens if the final displacement exceeds half the width of
    /// the locked side's region, and snaps closed otherwise.
    pub fn on_pan_end(&mut self, delta: Vec2) {
        if !self.is_interactive() {
            return;
        }
        let pos = self.session.displacement(delta);
        let side = self.session.locked_side();
        if !self.session.finish() {
            return;
        }
        let (Some(pos), Some(side)) = (pos, side) else {
            return;
        };
        match side {
            Side::Right if pos.x < -self.right_width / 2.0 && !self.right.is_empty() => {
                self.open(Side::Right);
            }
            Side::Left if pos.x > self.left_width / 2.0 && !self.left.is_empty() => {
                self.open(Side::Left);
            }
            _ => self.close(),
        }
    }

    /// Opens the given side, snapping the offset to the region's full width.
    ///
    /// Fires the open callback only on a closed→opened transition; switching
    /// sides while already open fires nothing. Opening a side with no
    /// actions, or a disabled cell, is a no-op.
    pub fn open(&mut self, side: Side) {
        if !self.is_interactive() || self.actions(side).is_empty() {
            return;
        }
        if self.state == OpenState::Closed
            && let Some(on_open) = self.on_open.as_mut()
        {
            on_open();
        }
        self.state = OpenState::opened(side);
        self.apply_offset(self.full_offset(side));
    }

    /// Closes the cell, resetting the offset to zero.
    ///
    /// Fires the close callback only if the cell was open. Also used to snap
    /// back after a gesture that never crossed the open threshold, in which
    /// case no callback fires.
    pub fn close(&mut self) {
        if self.state.is_open()
            && let Some(on_close) = self.on_close.as_mut()
        {
            on_close();
        }
        self.state = OpenState::Closed;
        self.apply_offset(0.0);
    }

    /// Activates the action at `index` on `side`.
    ///
    /// Invokes the action's press callback if present, then closes the cell
    /// iff auto-close is enabled. Returns `false` when there is no such
    /// action (or the cell is not interactive), in which case nothing fires.
    pub fn press(&mut self, side: Side, index: usize) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let actions = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let Some(action) = actions.get_mut(index) else {
            return false;
        };
        action.invoke();
        if self.auto_close {
            self.close();
        }
        true
    }

    /// Handles a document-level touch start.
    ///
    /// `within_actions` is whether the touch target lies inside either of
    /// this cell's action-region subtrees (see
    /// [`ancestry::within_any`](crate::ancestry::within_any)). An open cell
    /// touched outside its regions closes; returns `true` when that
    /// happened, so the host can suppress the touch's default handling.
    pub fn handle_outside_touch(&mut self, within_actions: bool) -> bool {
        if !self.state.is_open() || within_actions {
            return false;
        }
        self.close();
        true
    }

    fn full_offset(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_width,
            Side::Right => -self.right_width,
        }
    }

    fn apply_offset(&mut self, raw: f64) {
        let limit = if raw > 0.0 {
            self.left_width
        } else {
            -self.right_width
        };
        self.offset = rubber_band(raw, limit);
    }
}

impl fmt::Debug for SwipeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCell")
            .field("prefix", &self.prefix)
            .field("disabled", &self.disabled)
            .field("auto_close", &self.auto_close)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("left_width", &self.left_width)
            .field("right_width", &self.right_width)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
