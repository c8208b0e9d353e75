// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use crate::mode::SelectedIndex;
use crate::typeahead::DEFAULT_TYPEAHEAD_DELAY;

/// Options for [`Listbox::new`](crate::Listbox::new).
///
/// Supplying [`focused_index`](Self::focused_index) or
/// [`selected_index`](Self::selected_index) makes the listbox controlled for its whole
/// lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListboxConfig {
    /// Allow more than one selected option.
    pub multi_select: bool,
    /// Milliseconds of inactivity after which the typeahead buffer clears.
    pub typeahead_delay: u64,
    /// Host-owned focused index.
    pub focused_index: Option<usize>,
    /// Host-owned selected index or indices.
    pub selected_index: Option<SelectedIndex>,
    /// Initial selection of an uncontrolled listbox.
    pub default_selected_index: Option<usize>,
}

impl Default for ListboxConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ListboxConfig {
    /// Single-select, uncontrolled, default typeahead delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            multi_select: false,
            typeahead_delay: DEFAULT_TYPEAHEAD_DELAY,
            focused_index: None,
            selected_index: None,
            default_selected_index: None,
        }
    }

    /// Sets whether multiple options may be selected.
    #[must_use]
    pub const fn multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Sets the typeahead clear delay in milliseconds.
    #[must_use]
    pub const fn typeahead_delay(mut self, delay: u64) -> Self {
        self.typeahead_delay = delay;
        self
    }

    /// Supplies the focused index, making the listbox controlled.
    #[must_use]
    pub const fn focused_index(mut self, index: usize) -> Self {
        self.focused_index = Some(index);
        self
    }

    /// Supplies the selected index or indices, making the listbox controlled.
    #[must_use]
    pub fn selected_index(mut self, selected: impl Into<SelectedIndex>) -> Self {
        self.selected_index = Some(selected.into());
        self
    }

    /// Seeds the selection of an uncontrolled listbox.
    ///
    /// The seed is applied silently once an option registers at `index`. Ignored by
    /// controlled listboxes.
    #[must_use]
    pub const fn default_selected_index(mut self, index: usize) -> Self {
        self.default_selected_index = Some(index);
        self
    }
}
