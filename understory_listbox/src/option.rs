// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option identity: ids, registered options and per-instance handles.

use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ListboxError;
use crate::registry::RegistrationPass;

static NEXT_OPTION_ID: AtomicUsize = AtomicUsize::new(1);

/// A stable, globally unique option identifier.
///
/// Ids are minted from a process-wide counter, so two listboxes never hand out the
/// same id. The [`Display`](fmt::Display) form (`listbox-option-{n}`) is suitable for
/// an element `id` and therefore for `aria-activedescendant`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(usize);

impl OptionId {
    /// Mints a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_OPTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw id supplied by the host.
    ///
    /// Hosts that already own stable ids can use this instead of [`OptionId::next`];
    /// they are then responsible for uniqueness.
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionId").field(&self.0).finish()
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listbox-option-{}", self.0)
    }
}

/// A registered option: its identity, current position and caller-supplied value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListOption {
    /// Stable identifier of the option instance.
    pub id: OptionId,
    /// Current 0-based position among registered options.
    pub index: usize,
    /// Discrete value supplied by the caller. Not required to be unique.
    pub value: String,
}

impl ListOption {
    /// Creates an option record.
    #[must_use]
    pub fn new(id: OptionId, index: usize, value: impl Into<String>) -> Self {
        Self {
            id,
            index,
            value: value.into(),
        }
    }
}

/// Host-side handle for one option instance.
///
/// A `ListboxOption` mints its [`OptionId`] once, when it is created, and keeps it for
/// its whole lifetime. On every registration pass it claims the next index in
/// rendering order through the pass it is handed.
///
/// ```rust
/// use understory_listbox::{Listbox, ListboxConfig, ListboxOption};
///
/// let mut listbox = Listbox::new(ListboxConfig::new());
/// let mut ford = ListboxOption::new();
/// let mut tesla = ListboxOption::new();
///
/// listbox.register_options(|pass| -> Result<(), understory_listbox::ListboxError> {
///     ford.register(Some(&mut *pass), "ford")?;
///     tesla.register(Some(&mut *pass), "tesla")?;
///     Ok(())
/// }).0.unwrap();
///
/// assert_eq!(ford.index(), Some(0));
/// assert_eq!(tesla.index(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct ListboxOption {
    id: OptionId,
    index: Option<usize>,
    pass: Option<usize>,
}

impl Default for ListboxOption {
    fn default() -> Self {
        Self::new()
    }
}

impl ListboxOption {
    /// Creates an option handle with a freshly minted id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(OptionId::next())
    }

    /// Creates an option handle with a host-supplied id.
    #[must_use]
    pub const fn with_id(id: OptionId) -> Self {
        Self {
            id,
            index: None,
            pass: None,
        }
    }

    /// Returns the stable id of this option.
    #[must_use]
    pub fn id(&self) -> OptionId {
        self.id
    }

    /// Returns the index claimed on the most recent registration, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the index or [`ListboxError::MissingIndex`] if the option never registered.
    pub fn require_index(&self) -> Result<usize, ListboxError> {
        self.index.ok_or(ListboxError::MissingIndex { id: self.id })
    }

    /// Registers this option with `value` as both its value and typeahead text.
    ///
    /// `cx` is the registration context the host looked up for this option; `None`
    /// means the option is rendered outside of any listbox and fails with
    /// [`ListboxError::NotInitialized`].
    pub fn register(
        &mut self,
        cx: Option<&mut RegistrationPass<'_>>,
        value: &str,
    ) -> Result<usize, ListboxError> {
        self.register_labeled(cx, value, None)
    }

    /// Registers this option with a separate display label used for typeahead.
    ///
    /// Registering twice within the same pass is idempotent: the index claimed first
    /// is returned again and the entry is refreshed in place.
    pub fn register_labeled(
        &mut self,
        cx: Option<&mut RegistrationPass<'_>>,
        value: &str,
        label: Option<&str>,
    ) -> Result<usize, ListboxError> {
        let pass = cx.ok_or(ListboxError::NotInitialized)?;
        let index = match self.index {
            Some(index) if self.pass == Some(pass.generation()) => {
                pass.refresh(index, self.id, value, label)?;
                index
            }
            _ => pass.register(self.id, value, label)?,
        };
        self.index = Some(index);
        self.pass = Some(pass.generation());
        Ok(index)
    }

    /// Forgets the claimed index; the registry compacts on the next pass.
    pub fn unmount(&mut self) {
        self.index = None;
        self.pass = None;
    }
}
