// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by listbox handlers.

use smallvec::SmallVec;

use crate::option::ListOption;
use crate::selected::SelectedValues;

/// A change the host should hear about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListboxEvent {
    /// The active option changed.
    Change(ListOption),
    /// An option was selected (single-select, or any controlled listbox).
    Select(ListOption),
    /// The multi-select set changed; carries the whole set.
    SelectMany(SelectedValues),
}

/// Events produced by one input, in emission order.
///
/// Almost every input yields zero, one or two events (a focus change followed by a
/// selection), so they are kept inline.
pub type Notifications = SmallVec<[ListboxEvent; 2]>;

/// Payload of a selection callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selected<'a> {
    /// A single option.
    One(&'a ListOption),
    /// The full multi-select set.
    Many(&'a SelectedValues),
}

/// Host callbacks for listbox notifications.
///
/// Both methods default to doing nothing, so a host implements only what it needs.
pub trait ListboxCallbacks {
    /// Called when the active option changes.
    fn on_change(&mut self, option: &ListOption) {
        let _ = option;
    }

    /// Called when the selection changes.
    fn on_select(&mut self, selected: Selected<'_>) {
        let _ = selected;
    }
}

impl ListboxEvent {
    /// Hands this event to the matching callback.
    pub fn deliver<C: ListboxCallbacks + ?Sized>(&self, callbacks: &mut C) {
        match self {
            Self::Change(option) => callbacks.on_change(option),
            Self::Select(option) => callbacks.on_select(Selected::One(option)),
            Self::SelectMany(values) => callbacks.on_select(Selected::Many(values)),
        }
    }

    /// Delivers every event in `events` in order.
    pub fn deliver_all<C: ListboxCallbacks + ?Sized>(events: &[Self], callbacks: &mut C) {
        for event in events {
            event.deliver(callbacks);
        }
    }
}
