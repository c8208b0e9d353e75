// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility attributes for the container and its options.
//!
//! These are plain data; the host maps them onto whatever accessibility tree or
//! markup it produces.

use core::fmt;

use crate::option::OptionId;

/// ARIA role of an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `listbox`, for the container.
    Listbox,
    /// `option`, for each option.
    Option,
}

impl Role {
    /// The attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listbox => "listbox",
            Self::Option => "option",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of the listbox container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListboxProps {
    /// Always [`Role::Listbox`].
    pub role: Role,
    /// Always `0`: the container is the single tab stop.
    pub tab_index: i32,
    /// `aria-activedescendant`: the focused option, `None` before first focus.
    pub active_descendant: Option<OptionId>,
    /// `aria-multiselectable`.
    pub multiselectable: bool,
}

/// Attributes of one option.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OptionProps {
    /// Always [`Role::Option`].
    pub role: Role,
    /// Element id, the target of `aria-activedescendant`.
    pub id: OptionId,
    /// Position among registered options.
    pub index: usize,
    /// `aria-selected`.
    pub selected: bool,
}
