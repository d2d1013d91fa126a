// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame view snapshot that hosts render from.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::action::Action;
use crate::cell::SwipeCell;
use crate::gesture::Side;

/// Everything a host needs to render one cell for the current frame.
///
/// Class names are derived from the cell's style prefix the same way for
/// every host, so stylesheets can target `{prefix}`, `{prefix}-content`,
/// `{prefix}-cover`, `{prefix}-actions-left` / `-right`, `{prefix}-btn`,
/// and `{prefix}-btn-text`.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView<'a> {
    /// Whether the cell renders interactively. When `false` (disabled, or no
    /// actions on either side) the host renders the bare content with
    /// [`attrs`](Self::attrs) applied and ignores the remaining fields.
    pub interactive: bool,
    /// Class for the root element.
    pub root_class: String,
    /// Pass-through attributes for the root element.
    pub attrs: &'a [(String, String)],
    /// Class for the content panel.
    pub content_class: String,
    /// Horizontal offset of the content panel in pixels.
    pub content_offset: f64,
    /// The touch-intercepting cover, present whenever the cell is
    /// interactive.
    pub cover: Option<CoverView>,
    /// The left action region, present when it has actions.
    pub left: Option<RegionView<'a>>,
    /// The right action region, present when it has actions.
    pub right: Option<RegionView<'a>>,
}

/// The translucent cover rendered beneath the content panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverView {
    /// Class for the cover element.
    pub class: String,
    /// Whether the cover is currently shown (the content is displaced).
    pub visible: bool,
    /// Horizontal offset matching the content panel.
    pub offset: f64,
}

/// One action region (strip of buttons).
#[derive(Clone, Debug, PartialEq)]
pub struct RegionView<'a> {
    /// Class for the region container.
    pub class: String,
    /// The buttons, in display order.
    pub buttons: Vec<ButtonView<'a>>,
}

/// One rendered action button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView<'a> {
    /// Class for the button, including any action-specific extra class.
    pub class: String,
    /// Class for the label element inside the button.
    pub text_class: String,
    /// The label text.
    pub text: &'a str,
    /// Pass-through style attributes for the button.
    pub style: &'a [(String, String)],
}

impl SwipeCell {
    /// Builds the view snapshot for the current frame.
    #[must_use]
    pub fn view(&self) -> CellView<'_> {
        let prefix = self.prefix();
        let interactive = self.is_interactive();
        CellView {
            interactive,
            root_class: prefix.to_string(),
            attrs: self.attrs(),
            content_class: format!("{prefix}-content"),
            content_offset: self.content_offset(),
            cover: interactive.then(|| CoverView {
                class: format!("{prefix}-cover"),
                visible: self.cover_visible(),
                offset: self.content_offset(),
            }),
            left: self.region_view(Side::Left),
            right: self.region_view(Side::Right),
        }
    }

    fn region_view(&self, side: Side) -> Option<RegionView<'_>> {
        let actions = self.actions(side);
        if !self.is_interactive() || actions.is_empty() {
            return None;
        }
        let prefix = self.prefix();
        let suffix = match side {
            Side::Left => "left",
            Side::Right => "right",
        };
        Some(RegionView {
            class: format!("{prefix}-actions {prefix}-actions-{suffix}"),
            buttons: actions.iter().map(|a| button_view(prefix, a)).collect(),
        })
    }
}

fn button_view<'a>(prefix: &str, action: &'a Action) -> ButtonView<'a> {
    let class = match action.class() {
        Some(extra) => format!("{prefix}-btn {extra}"),
        None => format!("{prefix}-btn"),
    };
    ButtonView {
        class,
        text_class: format!("{prefix}-btn-text"),
        text: action.label(),
        style: action.style(),
    }
}
