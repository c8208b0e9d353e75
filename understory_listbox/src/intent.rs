// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition table: what each input does, independent of mode.
//!
//! [`plan`] turns an [`Intent`] and the current cursor into a target index plus the
//! [`Steps`] to take there. Uncontrolled listboxes lower the plan to an
//! [`Action`](crate::Action); controlled ones report it to the host.

use crate::error::ListboxError;
use crate::option::ListOption;
use crate::state::Action;

/// A user input, already decoded from keys or pointers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The container gained focus.
    FocusIn,
    /// `ArrowUp`.
    Previous,
    /// `ArrowDown`.
    Next,
    /// `Return`.
    Activate,
    /// `Home`.
    First,
    /// `End`.
    Last,
    /// A click on the option at the given index.
    Click(usize),
    /// Typeahead found a match at the given index.
    Typeahead(usize),
}

bitflags::bitflags! {
    /// What a planned transition does to its target.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Steps: u8 {
        /// Make the target the active option.
        const FOCUS  = 0b0000_0001;
        /// Make the target the single selection.
        const SELECT = 0b0000_0010;
        /// Flip the target in the multi-select set.
        const TOGGLE = 0b0000_0100;
    }
}

/// Where the cursor currently is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Focused index.
    pub focused: Option<usize>,
    /// Single selected index, used to pick the first-focus target.
    pub selected: Option<usize>,
}

/// A resolved transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Index the transition lands on.
    pub target: usize,
    /// What happens there.
    pub steps: Steps,
}

impl Plan {
    /// Lowers the plan to the single state action that realizes it on `option`.
    #[must_use]
    pub fn action(&self, option: ListOption) -> Action {
        if self.steps.contains(Steps::TOGGLE) {
            Action::ToggleMulti(option)
        } else if self.steps.contains(Steps::SELECT) {
            Action::Select(option)
        } else {
            Action::Focus(option)
        }
    }
}

/// Plans `intent` against a listbox of `len` options.
///
/// Returns `Ok(None)` when the input is a defined no-op: empty listbox, navigating past
/// either end, `Return` with nothing focused. Clicking an index outside the listbox is
/// an error.
pub fn plan(
    intent: Intent,
    cursor: Cursor,
    len: usize,
    multi: bool,
    controlled: bool,
) -> Result<Option<Plan>, ListboxError> {
    if let Intent::Click(index) = intent
        && index >= len
    {
        return Err(ListboxError::UnknownIndex { index, len });
    }
    let Some(last) = len.checked_sub(1) else {
        return Ok(None);
    };

    let navigate = if multi {
        Steps::FOCUS
    } else {
        Steps::FOCUS | Steps::SELECT
    };
    let jump = Steps::FOCUS | Steps::SELECT;

    let planned = match intent {
        Intent::FocusIn => match cursor.focused {
            Some(_) => None,
            None if multi => Some((0, Steps::FOCUS)),
            None => {
                let target = cursor.selected.filter(|&index| index <= last).unwrap_or(0);
                Some((target, jump))
            }
        },
        Intent::Previous => match cursor.focused {
            Some(index) if index > 0 => Some((index - 1, navigate)),
            _ => None,
        },
        Intent::Next => match cursor.focused {
            None => Some((0, navigate)),
            Some(index) if index < last => Some((index + 1, navigate)),
            Some(_) => None,
        },
        Intent::Activate => match cursor.focused {
            Some(index) if index <= last => {
                if multi {
                    Some((index, Steps::TOGGLE))
                } else if controlled {
                    Some((index, Steps::SELECT))
                } else {
                    None
                }
            }
            _ => None,
        },
        Intent::First => Some((0, jump)),
        Intent::Last => Some((last, jump)),
        Intent::Click(index) if multi => Some((index, Steps::FOCUS | Steps::TOGGLE)),
        Intent::Click(index) => Some((index, jump)),
        Intent::Typeahead(index) => (index <= last).then_some((index, jump)),
    };

    Ok(planned.map(|(target, steps)| Plan { target, steps }))
}
