// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled versus uncontrolled operation.
//!
//! A listbox is controlled when the host supplies its focused or selected index at
//! construction. Controlled listboxes never mutate their own state; every transition
//! is reported back to the host, which is expected to feed the new indices in through
//! [`Listbox::set_controlled`](crate::Listbox::set_controlled).

use smallvec::SmallVec;

use crate::event::{ListboxEvent, Notifications};
use crate::intent::{Plan, Steps};
use crate::option::ListOption;
use crate::state::ListboxState;

/// Host-supplied selection: one index or a list of indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectedIndex {
    /// Exactly one selected index.
    One(usize),
    /// Any number of selected indices.
    Many(SmallVec<[usize; 4]>),
}

impl SelectedIndex {
    /// Builds a [`SelectedIndex::Many`] from any iterator of indices.
    pub fn many(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Many(indices.into_iter().collect())
    }

    /// Returns `true` if `index` is part of the selection.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::One(selected) => *selected == index,
            Self::Many(selected) => selected.contains(&index),
        }
    }

    /// The single index, if this is [`SelectedIndex::One`].
    #[must_use]
    pub fn as_one(&self) -> Option<usize> {
        match self {
            Self::One(index) => Some(*index),
            Self::Many(_) => None,
        }
    }
}

impl From<usize> for SelectedIndex {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

/// Focus and selection as supplied by the host of a controlled listbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlledState {
    /// The focused index.
    pub focused_index: Option<usize>,
    /// The selected index or indices.
    pub selected_index: Option<SelectedIndex>,
}

impl ControlledState {
    /// Creates controlled props.
    #[must_use]
    pub fn new(focused_index: Option<usize>, selected_index: Option<SelectedIndex>) -> Self {
        Self {
            focused_index,
            selected_index,
        }
    }

    /// Returns `true` if `index` is selected according to the host.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index
            .as_ref()
            .is_some_and(|selected| selected.contains(index))
    }

    /// Notifications for `plan` landing on `option`.
    ///
    /// A focus step onto the index the host already focuses is not reported, and
    /// neither is a select step onto an index the host already selects. Toggles are
    /// always reported as a selection of the toggled option.
    pub(crate) fn report(&self, plan: Plan, option: &ListOption) -> Notifications {
        let mut events = Notifications::new();
        if plan.steps.contains(Steps::FOCUS) && self.focused_index != Some(plan.target) {
            events.push(ListboxEvent::Change(option.clone()));
        }
        if plan.steps.contains(Steps::TOGGLE)
            || (plan.steps.contains(Steps::SELECT) && !self.is_selected(plan.target))
        {
            events.push(ListboxEvent::Select(option.clone()));
        }
        events
    }
}

/// Operating mode of a listbox, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The listbox owns its state.
    Uncontrolled(ListboxState),
    /// The host owns focus and selection.
    Controlled(ControlledState),
}

impl Mode {
    /// Resolves the mode from host-supplied indices: any supplied index makes the
    /// listbox controlled.
    #[must_use]
    pub fn resolve(focused_index: Option<usize>, selected_index: Option<SelectedIndex>) -> Self {
        if focused_index.is_some() || selected_index.is_some() {
            Self::Controlled(ControlledState::new(focused_index, selected_index))
        } else {
            Self::Uncontrolled(ListboxState::new())
        }
    }

    /// The discriminant without its payload.
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Uncontrolled(_) => ModeKind::Uncontrolled,
            Self::Controlled(_) => ModeKind::Controlled,
        }
    }
}

/// Which of the two modes a listbox runs in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// State is owned by the listbox.
    Uncontrolled,
    /// State is owned by the host.
    Controlled,
}
