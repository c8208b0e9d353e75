// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option registry: the ordered, index-addressable set of live options.
//!
//! The registry is an arena owned by the listbox. Options never write to it
//! directly; they claim positions through a [`RegistrationPass`], which hands out
//! indices in rendering order starting from zero and compacts the registry when it
//! ends. This keeps `registry.get(i).index == i` for every `i` at each settled point,
//! even when options unmount between passes.
//!
//! ```rust
//! use understory_listbox::{OptionId, Registry};
//!
//! let mut registry = Registry::new();
//! let (a, b, c) = (OptionId::next(), OptionId::next(), OptionId::next());
//!
//! {
//!     let mut pass = registry.begin_pass();
//!     pass.register(a, "ford", None).unwrap();
//!     pass.register(b, "tesla", None).unwrap();
//!     pass.register(c, "toyota", None).unwrap();
//! }
//! assert_eq!(registry.len(), 3);
//!
//! // "tesla" unmounts: the next pass only sees two options.
//! {
//!     let mut pass = registry.begin_pass();
//!     pass.register(a, "ford", None).unwrap();
//!     pass.register(c, "toyota", None).unwrap();
//! }
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.get(1).map(|o| o.id), Some(c));
//! assert_eq!(registry.get(1).map(|o| o.index), Some(1));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashMap;

use crate::error::ListboxError;
use crate::option::{ListOption, OptionId};

static NEXT_PASS: AtomicUsize = AtomicUsize::new(1);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    option: ListOption,
    label: Option<String>,
}

impl Entry {
    fn matches(&self, id: OptionId, value: &str, label: Option<&str>) -> bool {
        self.option.id == id && self.option.value == value && self.label.as_deref() == label
    }

    fn text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.option.value)
    }
}

/// Ordered collection of registered options.
///
/// Besides the positional entries, the registry keeps an id → index map for
/// reconciling state after a pass, and a revision counter that only bumps when a
/// mutation changes contents (the same convention as `understory_selection`).
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    by_id: HashMap<OptionId, usize>,
    revision: u64,
    generation: usize,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the last option, or `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Returns the option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ListOption> {
        self.entries.get(index).map(|entry| &entry.option)
    }

    /// Returns the option at `index` or [`ListboxError::UnknownIndex`].
    pub fn try_get(&self, index: usize) -> Result<&ListOption, ListboxError> {
        self.get(index).ok_or(ListboxError::UnknownIndex {
            index,
            len: self.len(),
        })
    }

    /// Returns the display label registered for `index`, if one was given.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.entries.get(index)?.label.as_deref()
    }

    /// Returns the text used for typeahead matching: the label, or the value when
    /// the option has no label.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(Entry::text)
    }

    /// Current index of the option with `id`.
    #[must_use]
    pub fn index_of(&self, id: OptionId) -> Option<usize> {
        let index = *self.by_id.get(&id)?;
        // The map may briefly point at an overwritten slot in the middle of a pass.
        (self.entries.get(index)?.option.id == id).then_some(index)
    }

    /// Returns the option with `id`.
    #[must_use]
    pub fn find(&self, id: OptionId) -> Option<&ListOption> {
        self.index_of(id).and_then(|index| self.get(index))
    }

    /// Iterates registered options in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ListOption> + '_ {
        self.entries.iter().map(|entry| &entry.option)
    }

    /// Iterates typeahead texts in index order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Entry::text)
    }

    /// Monotonic counter bumped whenever contents change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records the option `id` at `index` with `value`.
    ///
    /// See [`Registry::register_labeled`].
    pub fn register(
        &mut self,
        index: usize,
        id: OptionId,
        value: &str,
    ) -> Result<bool, ListboxError> {
        self.register_labeled(index, id, value, None)
    }

    /// Records the option `id` at `index`, with an optional typeahead label.
    ///
    /// - Re-registering the same id, value and label at the same index is a no-op
    ///   and returns `Ok(false)`.
    /// - Registering at an occupied index overwrites the entry.
    /// - `index == len()` appends.
    /// - `index > len()` fails with [`ListboxError::IndexGap`]; the registry never
    ///   holds holes.
    pub fn register_labeled(
        &mut self,
        index: usize,
        id: OptionId,
        value: &str,
        label: Option<&str>,
    ) -> Result<bool, ListboxError> {
        let len = self.entries.len();
        if index > len {
            return Err(ListboxError::IndexGap { index, len });
        }

        if let Some(entry) = self.entries.get_mut(index) {
            if entry.matches(id, value, label) {
                return Ok(false);
            }
            let previous = entry.option.id;
            entry.option = ListOption::new(id, index, value);
            entry.label = label.map(String::from);
            if previous != id && self.by_id.get(&previous) == Some(&index) {
                self.by_id.remove(&previous);
            }
        } else {
            self.entries.push(Entry {
                option: ListOption::new(id, index, value),
                label: label.map(String::from),
            });
        }

        self.by_id.insert(id, index);
        self.bump_revision();
        Ok(true)
    }

    /// Removes the option with `id`, shifting later options down by one.
    pub fn remove(&mut self, id: OptionId) -> Option<ListOption> {
        let index = self.index_of(id)?;
        let removed = self.entries.remove(index);
        self.by_id.remove(&id);
        for (offset, entry) in self.entries[index..].iter_mut().enumerate() {
            let position = index + offset;
            entry.option.index = position;
            self.by_id.insert(entry.option.id, position);
        }
        self.bump_revision();
        Some(removed.option)
    }

    /// Drops every option at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        for entry in self.entries.drain(len..) {
            let id = entry.option.id;
            if self.by_id.get(&id).is_some_and(|&index| index >= len) {
                self.by_id.remove(&id);
            }
        }
        self.bump_revision();
    }

    /// Removes all options.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Starts a registration pass.
    ///
    /// The pass hands out indices from zero in the order options register. When it
    /// is dropped, options that did not register during the pass are truncated away.
    pub fn begin_pass(&mut self) -> RegistrationPass<'_> {
        self.generation = NEXT_PASS.fetch_add(1, Ordering::Relaxed);
        RegistrationPass {
            registry: self,
            next: 0,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Scoped accessor used by options to claim their position during one pass.
///
/// Obtained from [`Registry::begin_pass`] (or, more commonly, from
/// [`Listbox::register_options`](crate::Listbox::register_options)). The counter
/// starts at zero for every pass, so registration order is rendering order.
#[derive(Debug)]
pub struct RegistrationPass<'a> {
    registry: &'a mut Registry,
    next: usize,
}

impl RegistrationPass<'_> {
    fn claim_next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices claimed so far.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.next
    }

    /// Identifies this pass. Passes of different registries never share a
    /// generation.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.registry.generation
    }

    /// Read access to the registry being filled.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Claims the next index and records the option there.
    pub fn register(
        &mut self,
        id: OptionId,
        value: &str,
        label: Option<&str>,
    ) -> Result<usize, ListboxError> {
        let index = self.claim_next_index();
        self.registry.register_labeled(index, id, value, label)?;
        Ok(index)
    }

    /// Rewrites an index already claimed during this pass.
    pub(crate) fn refresh(
        &mut self,
        index: usize,
        id: OptionId,
        value: &str,
        label: Option<&str>,
    ) -> Result<(), ListboxError> {
        if index >= self.next {
            return Err(ListboxError::UnknownIndex {
                index,
                len: self.next,
            });
        }
        self.registry.register_labeled(index, id, value, label)?;
        Ok(())
    }
}

impl Drop for RegistrationPass<'_> {
    fn drop(&mut self) {
        self.registry.truncate(self.next);
    }
}
