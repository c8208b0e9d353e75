// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys the listbox understands.

use ui_events::keyboard::{Key, KeyboardEvent, Modifiers, NamedKey};

/// A key press, reduced to what the listbox cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListboxKey {
    /// Move to the previous option.
    ArrowUp,
    /// Move to the next option.
    ArrowDown,
    /// Activate the focused option.
    Enter,
    /// Jump to the first option.
    Home,
    /// Jump to the last option.
    End,
    /// Leaves the listbox; never handled.
    Tab,
    /// A printable character for typeahead.
    Character(char),
    /// Anything else.
    Other,
}

impl ListboxKey {
    /// Maps a legacy DOM `keyCode`.
    ///
    /// Legacy codes carry no character, so typeahead input has to come through
    /// [`ListboxKey::from_key`] or [`ListboxKey::from_keyboard_event`].
    #[must_use]
    pub const fn from_key_code(code: u32) -> Self {
        match code {
            38 => Self::ArrowUp,
            40 => Self::ArrowDown,
            13 => Self::Enter,
            36 => Self::Home,
            35 => Self::End,
            9 => Self::Tab,
            _ => Self::Other,
        }
    }

    /// Maps a logical key with its modifiers.
    ///
    /// A character key counts as typeahead input only when it is exactly one
    /// printable character and no Ctrl, Meta or Alt is held, so shortcuts pass
    /// through.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Self {
        match key {
            Key::Named(NamedKey::ArrowUp) => Self::ArrowUp,
            Key::Named(NamedKey::ArrowDown) => Self::ArrowDown,
            Key::Named(NamedKey::Enter) => Self::Enter,
            Key::Named(NamedKey::Home) => Self::Home,
            Key::Named(NamedKey::End) => Self::End,
            Key::Named(NamedKey::Tab) => Self::Tab,
            Key::Character(text) => {
                if modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT) {
                    return Self::Other;
                }
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Self::Character(ch),
                    _ => Self::Other,
                }
            }
            _ => Self::Other,
        }
    }

    /// Maps a `ui-events` keyboard event. Key releases map to [`ListboxKey::Other`].
    #[must_use]
    pub fn from_keyboard_event(event: &KeyboardEvent) -> Self {
        if !event.state.is_down() {
            return Self::Other;
        }
        Self::from_key(&event.key, event.modifiers)
    }
}
