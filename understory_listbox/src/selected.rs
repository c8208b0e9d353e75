// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select accumulator keyed by option value.

use alloc::vec::Vec;

use crate::option::ListOption;
use crate::registry::Registry;

/// The set of selected options in a multi-select listbox, keyed by value.
///
/// Entries live in a small `Vec` in insertion order; uniqueness is enforced on the
/// option value by scanning. [`toggle`](Self::toggle) is a symmetric difference: an
/// absent value is inserted, a present one removed.
///
/// Equality is set equality over `(value, option)` pairs and ignores insertion order.
#[derive(Clone, Debug, Default, Eq)]
pub struct SelectedValues {
    entries: Vec<ListOption>,
}

impl SelectedValues {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.position_of(value).is_some()
    }

    /// Returns the option recorded for `value`.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&ListOption> {
        self.position_of(value).map(|idx| &self.entries[idx])
    }

    /// Iterates selected options in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, ListOption> {
        self.entries.iter()
    }

    /// Iterates selected values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|option| option.value.as_str())
    }

    /// Flips membership of `option.value`.
    ///
    /// Returns `true` if the value is selected afterwards.
    pub fn toggle(&mut self, option: ListOption) -> bool {
        if let Some(idx) = self.position_of(&option.value) {
            self.entries.remove(idx);
            false
        } else {
            self.entries.push(option);
            true
        }
    }

    /// Inserts `option` unless its value is already selected.
    ///
    /// Returns `true` if the value was newly inserted.
    pub fn insert(&mut self, option: ListOption) -> bool {
        if self.contains(&option.value) {
            return false;
        }
        self.entries.push(option);
        true
    }

    /// Removes `value`, returning the option that was recorded for it.
    pub fn remove(&mut self, value: &str) -> Option<ListOption> {
        let idx = self.position_of(value)?;
        Some(self.entries.remove(idx))
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Re-points each entry at its option's current position in `registry`, dropping
    /// entries whose option is no longer registered.
    pub(crate) fn reconcile(&mut self, registry: &Registry) {
        self.entries.retain_mut(|option| match registry.find(option.id) {
            Some(current) => {
                option.clone_from(current);
                true
            }
            None => false,
        });
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.entries.iter().position(|option| option.value == value)
    }
}

impl PartialEq for SelectedValues {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|option| other.get(&option.value) == Some(option))
    }
}

impl<'a> IntoIterator for &'a SelectedValues {
    type Item = &'a ListOption;
    type IntoIter = core::slice::Iter<'a, ListOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
