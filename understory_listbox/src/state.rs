// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uncontrolled focus/selection state and its pure transition function.

use crate::event::{ListboxEvent, Notifications};
use crate::option::{ListOption, OptionId};
use crate::registry::Registry;
use crate::selected::SelectedValues;

/// A state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Make the option the active descendant.
    Focus(ListOption),
    /// Focus the option and make it the single selection.
    Select(ListOption),
    /// Focus the option and flip its value in the multi-select set.
    ToggleMulti(ListOption),
}

/// Focus and selection owned by an uncontrolled listbox.
///
/// `None` means "nothing focused" / "nothing selected" yet. The index and id of an
/// option always travel together, so they can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListboxState {
    /// The option that is the active descendant.
    pub focused: Option<ListOption>,
    /// The single-select selection.
    pub selected: Option<ListOption>,
    /// The multi-select accumulator.
    pub selected_values: SelectedValues,
}

impl ListboxState {
    /// Creates the idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            focused: None,
            selected: None,
            selected_values: SelectedValues::new(),
        }
    }

    /// Index of the focused option.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused.as_ref().map(|option| option.index)
    }

    /// Id of the focused option.
    #[must_use]
    pub fn focused_id(&self) -> Option<OptionId> {
        self.focused.as_ref().map(|option| option.id)
    }

    /// Value of the focused option.
    #[must_use]
    pub fn focused_value(&self) -> Option<&str> {
        self.focused.as_ref().map(|option| option.value.as_str())
    }

    /// Index of the selected option.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().map(|option| option.index)
    }

    /// Id of the selected option.
    #[must_use]
    pub fn selected_id(&self) -> Option<OptionId> {
        self.selected.as_ref().map(|option| option.id)
    }

    /// Value of the selected option.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_ref().map(|option| option.value.as_str())
    }

    /// Returns the state that results from `action`, leaving `self` untouched.
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        let mut next = self.clone();
        next.apply(action.clone());
        next
    }

    /// Applies `action` in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Focus(option) => self.focused = Some(option),
            Action::Select(option) => {
                self.selected = Some(option.clone());
                self.focused = Some(option);
            }
            Action::ToggleMulti(option) => {
                self.selected_values.toggle(option.clone());
                self.focused = Some(option);
            }
        }
    }

    /// Re-points every tracked option at its current registry entry, dropping the
    /// ones that are no longer registered.
    pub(crate) fn reconcile(&mut self, registry: &Registry) {
        let refresh = |slot: &mut Option<ListOption>| {
            *slot = slot
                .take()
                .and_then(|option| registry.find(option.id).cloned());
        };
        refresh(&mut self.focused);
        refresh(&mut self.selected);
        self.selected_values.reconcile(registry);
    }
}

/// Which observed fields differ between two states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StateDiff {
    /// The focused option changed.
    pub focused: bool,
    /// The single selection changed.
    pub selected: bool,
    /// The multi-select set changed.
    pub selected_values: bool,
}

impl StateDiff {
    /// Compares `old` with `new`.
    #[must_use]
    pub fn between(old: &ListboxState, new: &ListboxState) -> Self {
        Self {
            focused: old.focused != new.focused,
            selected: old.selected != new.selected,
            selected_values: old.selected_values != new.selected_values,
        }
    }

    /// Returns `true` if nothing observable changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.focused || self.selected || self.selected_values)
    }

    /// Notifications describing this diff, read from `new`.
    ///
    /// At most one focus change followed by at most one selection report. Single-select
    /// listboxes report the selected option; multi-select listboxes report the whole
    /// set whenever either the selection or the set moved.
    #[must_use]
    pub fn events(&self, new: &ListboxState, multi: bool) -> Notifications {
        let mut events = Notifications::new();
        if self.focused
            && let Some(option) = &new.focused
        {
            events.push(ListboxEvent::Change(option.clone()));
        }
        if multi {
            if self.selected || self.selected_values {
                events.push(ListboxEvent::SelectMany(new.selected_values.clone()));
            }
        } else if self.selected
            && let Some(option) = &new.selected
        {
            events.push(ListboxEvent::Select(option.clone()));
        }
        events
    }
}
