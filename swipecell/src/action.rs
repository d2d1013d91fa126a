// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The action button data model.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Render label used when an action is constructed with empty text.
const FALLBACK_LABEL: &str = "Click";

/// One button inside an action region.
///
/// Actions are plain data plus an optional press callback; the host renders
/// them in list order and reports activations back through
/// [`SwipeCell::press`](crate::SwipeCell::press).
pub struct Action {
    text: String,
    class: Option<String>,
    style: Vec<(String, String)>,
    on_press: Option<Box<dyn FnMut()>>,
}

impl Action {
    /// Creates an action with the given label text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
            style: Vec::new(),
            on_press: None,
        }
    }

    /// Adds an extra class name appended to the button's generated class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds a style attribute passed through to the rendered button.
    #[must_use]
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((key.into(), value.into()));
        self
    }

    /// Sets the callback invoked when the button is activated.
    #[must_use]
    pub fn with_on_press(mut self, on_press: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Returns the label to render, falling back to `"Click"` when the
    /// configured text is empty.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.text.is_empty() {
            FALLBACK_LABEL
        } else {
            &self.text
        }
    }

    /// Returns the extra class name, if one was configured.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns the pass-through style attributes.
    #[must_use]
    pub fn style(&self) -> &[(String, String)] {
        &self.style
    }

    /// Invokes the press callback, if one is configured.
    pub(crate) fn invoke(&mut self) {
        if let Some(on_press) = self.on_press.as_mut() {
            on_press();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("text", &self.text)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}
