// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_listbox --heading-base-level=0

//! Understory Listbox: headless interaction logic for ARIA listboxes.
//!
//! This crate implements the _behavior_ of a single- or multi-select listbox following
//! the ARIA listbox pattern: one active option at a time (tracked through
//! `aria-activedescendant`), zero or more selected options, arrow/Home/End navigation
//! and typeahead. It does not render anything. The host feeds it input and reads back
//! attributes and notifications.
//!
//! The pieces:
//! - [`Registry`]: the ordered set of live options. Options claim their index through a
//!   [`RegistrationPass`] in rendering order, so indices always follow the document.
//! - [`ListboxState`] and [`Action`]: focus and selection of an uncontrolled listbox,
//!   with a pure transition function and a structural [`StateDiff`] that decides which
//!   notifications fire.
//! - [`Mode`]: a listbox is either uncontrolled (owns its state) or controlled (the
//!   host supplies the indices and the listbox only reports what should change).
//! - [`Typeahead`]: a lowercase prefix buffer with a debounced clear built on
//!   `understory_timing`.
//! - [`ListboxProps`] and [`OptionProps`]: the accessibility attributes to render.
//!
//! Time is host-supplied: every handler that cares about it takes `now` in
//! milliseconds on a monotonic clock, and [`Listbox::next_deadline`] tells the host
//! when to call [`Listbox::tick`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_listbox::{
//!     Listbox, ListboxConfig, ListboxError, ListboxEvent, ListboxKey, ListboxOption,
//! };
//!
//! let mut listbox = Listbox::new(ListboxConfig::new());
//! let mut options: Vec<ListboxOption> = (0..3).map(|_| ListboxOption::new()).collect();
//!
//! let (registered, events) = listbox.register_options(|pass| -> Result<(), ListboxError> {
//!     for (option, value) in options.iter_mut().zip(["ford", "tesla", "toyota"]) {
//!         option.register(Some(&mut *pass), value)?;
//!     }
//!     Ok(())
//! });
//! registered?;
//! // Mounting reports nothing; later passes report focus or selection they move.
//! assert!(events.is_empty());
//!
//! // First focus selects the first option.
//! let events = listbox.focus();
//! assert!(matches!(
//!     &events[..],
//!     [ListboxEvent::Change(o), ListboxEvent::Select(_)] if o.value == "ford"
//! ));
//!
//! // Arrow down moves focus and selection together.
//! listbox.key_down(ListboxKey::ArrowDown, 0);
//! assert_eq!(listbox.selected_index(), Some(1));
//!
//! // Typeahead jumps to "toyota".
//! listbox.key_down(ListboxKey::Character('t'), 10);
//! listbox.key_down(ListboxKey::Character('o'), 20);
//! assert_eq!(listbox.focused_index(), Some(2));
//!
//! let props = listbox.option_props(2)?;
//! assert!(props.selected);
//! assert_eq!(listbox.listbox_props().active_descendant, Some(props.id));
//! # Ok::<(), ListboxError>(())
//! ```
//!
//! ## Controlled listboxes
//!
//! Supplying a focused or selected index in [`ListboxConfig`] makes the listbox
//! controlled for its whole lifetime. Handlers then leave the state alone and return
//! [`ListboxEvent::Change`] / [`ListboxEvent::Select`] describing what the host should
//! apply; the host passes the new indices back with [`Listbox::set_controlled`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` records for registration passes, transitions and
//!   typeahead.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod aria;
mod config;
mod error;
mod event;
mod intent;
mod key;
mod listbox;
mod mode;
mod option;
mod registry;
mod scroll;
mod selected;
mod state;
mod typeahead;

pub use aria::{ListboxProps, OptionProps, Role};
pub use config::ListboxConfig;
pub use error::ListboxError;
pub use event::{ListboxCallbacks, ListboxEvent, Notifications, Selected};
pub use intent::{Cursor, Intent, Plan, Steps, plan};
pub use key::ListboxKey;
pub use listbox::{KeyResponse, Listbox};
pub use mode::{ControlledState, Mode, ModeKind, SelectedIndex};
pub use option::{ListOption, ListboxOption, OptionId};
pub use registry::{RegistrationPass, Registry};
pub use scroll::scroll_into_view;
pub use selected::SelectedValues;
pub use state::{Action, ListboxState, StateDiff};
pub use typeahead::{DEFAULT_TYPEAHEAD_DELAY, Typeahead};
