// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The listbox: registry, mode and typeahead wired to input handlers.

use crate::aria::{ListboxProps, OptionProps, Role};
use crate::config::ListboxConfig;
use crate::error::ListboxError;
use crate::event::Notifications;
use crate::intent::{Cursor, Intent, plan};
use crate::key::ListboxKey;
use crate::mode::{ControlledState, Mode, ModeKind, SelectedIndex};
use crate::option::{ListboxOption, OptionId};
use crate::registry::{RegistrationPass, Registry};
use crate::state::{ListboxState, StateDiff};
use crate::typeahead::Typeahead;

use ui_events::keyboard::KeyboardEvent;

/// Outcome of a key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// The listbox consumed the key; the host should suppress its default action.
    pub handled: bool,
    /// Notifications produced by the key, in order.
    pub events: Notifications,
}

impl KeyResponse {
    fn consumed(events: Notifications) -> Self {
        Self {
            handled: true,
            events,
        }
    }
}

/// A headless ARIA listbox.
///
/// The host drives it with input (focus, keys, clicks, timer ticks) and renders from
/// its projections ([`listbox_props`](Self::listbox_props),
/// [`option_props`](Self::option_props)). Handlers return the notifications the input
/// produced; nothing is delivered behind the host's back.
#[derive(Clone, Debug)]
pub struct Listbox {
    registry: Registry,
    mode: Mode,
    multi: bool,
    typeahead: Typeahead,
    seed: Option<usize>,
}

impl Default for Listbox {
    fn default() -> Self {
        Self::new(ListboxConfig::new())
    }
}

impl Listbox {
    /// Creates a listbox. The mode is decided here and never changes.
    #[must_use]
    pub fn new(config: ListboxConfig) -> Self {
        let mode = Mode::resolve(config.focused_index, config.selected_index);
        let seed = match mode {
            Mode::Uncontrolled(_) => config.default_selected_index,
            Mode::Controlled(_) => None,
        };
        Self {
            registry: Registry::new(),
            mode,
            multi: config.multi_select,
            typeahead: Typeahead::new(config.typeahead_delay),
            seed,
        }
    }

    /// Runs one registration pass.
    ///
    /// `f` registers every currently rendered option, in rendering order. Options that
    /// do not register are dropped when the pass ends, and focus and selection follow
    /// the remaining options to their new indices.
    ///
    /// Returns the output of `f` together with the notifications for any focus or
    /// selection the pass moved or dropped. The default selection is seeded silently.
    pub fn register_options<R>(
        &mut self,
        f: impl FnOnce(&mut RegistrationPass<'_>) -> R,
    ) -> (R, Notifications) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("register_options").entered();

        let result = {
            let mut pass = self.registry.begin_pass();
            f(&mut pass)
        };
        let events = self.settle();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = self.registry.len(),
            revision = self.registry.revision(),
            events = events.len(),
            "registration pass finished"
        );
        (result, events)
    }

    /// The registered options.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether more than one option may be selected.
    #[must_use]
    pub fn is_multi_select(&self) -> bool {
        self.multi
    }

    /// The mode fixed at construction.
    #[must_use]
    pub fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Internal state of an uncontrolled listbox.
    #[must_use]
    pub fn state(&self) -> Option<&ListboxState> {
        match &self.mode {
            Mode::Uncontrolled(state) => Some(state),
            Mode::Controlled(_) => None,
        }
    }

    /// Host-supplied props of a controlled listbox.
    #[must_use]
    pub fn controlled(&self) -> Option<&ControlledState> {
        match &self.mode {
            Mode::Uncontrolled(_) => None,
            Mode::Controlled(controlled) => Some(controlled),
        }
    }

    /// Replaces the props of a controlled listbox.
    ///
    /// Fails with [`ListboxError::ModeMismatch`] on an uncontrolled listbox.
    pub fn set_controlled(&mut self, controlled: ControlledState) -> Result<(), ListboxError> {
        match &mut self.mode {
            Mode::Controlled(current) => {
                *current = controlled;
                Ok(())
            }
            Mode::Uncontrolled(_) => Err(ListboxError::ModeMismatch),
        }
    }

    /// Index of the focused option, in either mode.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        match &self.mode {
            Mode::Uncontrolled(state) => state.focused_index(),
            Mode::Controlled(controlled) => controlled.focused_index,
        }
    }

    /// Single selected index, in either mode.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match &self.mode {
            Mode::Uncontrolled(state) => state.selected_index(),
            Mode::Controlled(controlled) => controlled
                .selected_index
                .as_ref()
                .and_then(SelectedIndex::as_one),
        }
    }

    /// The container received focus.
    ///
    /// The first time, this focuses the selected option (or the first one); later
    /// calls do nothing.
    pub fn focus(&mut self) -> Notifications {
        self.dispatch(Intent::FocusIn).unwrap_or_default()
    }

    /// Handles a key press at time `now` (milliseconds, host clock).
    pub fn key_down(&mut self, key: ListboxKey, now: u64) -> KeyResponse {
        let intent = match key {
            ListboxKey::ArrowUp => Intent::Previous,
            ListboxKey::ArrowDown => Intent::Next,
            ListboxKey::Enter => Intent::Activate,
            ListboxKey::Home => Intent::First,
            ListboxKey::End => Intent::Last,
            ListboxKey::Character(ch) => return KeyResponse::consumed(self.type_char(ch, now)),
            ListboxKey::Tab | ListboxKey::Other => return KeyResponse::default(),
        };
        KeyResponse::consumed(self.dispatch(intent).unwrap_or_default())
    }

    /// Handles a `ui-events` keyboard event at time `now`.
    pub fn keyboard_event(&mut self, event: &KeyboardEvent, now: u64) -> KeyResponse {
        self.key_down(ListboxKey::from_keyboard_event(event), now)
    }

    /// Handles a click on the option at `index`.
    pub fn click(&mut self, index: usize) -> Result<Notifications, ListboxError> {
        self.dispatch(Intent::Click(index))
    }

    /// Handles a click on `option`.
    pub fn click_option(&mut self, option: &ListboxOption) -> Result<Notifications, ListboxError> {
        let index = option.require_index()?;
        self.click(index)
    }

    /// Advances the typeahead clock. Returns `true` if the buffer was cleared.
    pub fn tick(&mut self, now: u64) -> bool {
        let cleared = self.typeahead.tick(now);
        #[cfg(feature = "tracing")]
        if cleared {
            tracing::trace!(now, "typeahead buffer cleared");
        }
        cleared
    }

    /// When the host should next call [`tick`](Self::tick), if at all.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.typeahead.deadline()
    }

    /// Milliseconds from `now` until the typeahead buffer clears, if it holds anything.
    #[must_use]
    pub fn typeahead_remaining(&self, now: u64) -> Option<u64> {
        self.typeahead.remaining(now)
    }

    /// The current typeahead buffer.
    #[must_use]
    pub fn typeahead_buffer(&self) -> &str {
        self.typeahead.buffer()
    }

    /// Attributes of the container.
    #[must_use]
    pub fn listbox_props(&self) -> ListboxProps {
        let active_descendant = match &self.mode {
            Mode::Uncontrolled(state) => state.focused_id(),
            Mode::Controlled(controlled) => controlled
                .focused_index
                .and_then(|index| self.registry.get(index))
                .map(|option| option.id),
        };
        ListboxProps {
            role: Role::Listbox,
            tab_index: 0,
            active_descendant,
            multiselectable: self.multi,
        }
    }

    /// Attributes of the option at `index`.
    pub fn option_props(&self, index: usize) -> Result<OptionProps, ListboxError> {
        let option = self.registry.try_get(index)?;
        let selected = match &self.mode {
            Mode::Uncontrolled(state) if self.multi => {
                state.selected_values.contains(&option.value)
            }
            Mode::Uncontrolled(state) => state.selected_index() == Some(index),
            Mode::Controlled(controlled) => controlled.is_selected(index),
        };
        Ok(OptionProps {
            role: Role::Option,
            id: option.id,
            index,
            selected,
        })
    }

    /// Attributes of `option`.
    pub fn option_props_for(&self, option: &ListboxOption) -> Result<OptionProps, ListboxError> {
        self.option_props(option.require_index()?)
    }

    /// Attributes of the option with `id`, if it is registered.
    #[must_use]
    pub fn option_props_by_id(&self, id: OptionId) -> Option<OptionProps> {
        self.option_props(self.registry.index_of(id)?).ok()
    }

    fn type_char(&mut self, ch: char, now: u64) -> Notifications {
        let buffer = self.typeahead.push(ch, now);
        let found = Typeahead::find(self.registry.texts(), buffer);

        #[cfg(feature = "tracing")]
        tracing::trace!(buffer, ?found, "typeahead");

        match found {
            Some(index) => self.dispatch(Intent::Typeahead(index)).unwrap_or_default(),
            None => Notifications::new(),
        }
    }

    fn cursor(&self) -> Cursor {
        let len = self.registry.len();
        match &self.mode {
            Mode::Uncontrolled(state) => Cursor {
                focused: state.focused_index(),
                selected: state.selected_index(),
            },
            Mode::Controlled(controlled) => Cursor {
                focused: controlled.focused_index.filter(|&index| index < len),
                selected: controlled
                    .selected_index
                    .as_ref()
                    .and_then(SelectedIndex::as_one),
            },
        }
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Notifications, ListboxError> {
        let cursor = self.cursor();
        let controlled = matches!(self.mode, Mode::Controlled(_));

        // Relative moves in a controlled listbox are relative to the host's index.
        if controlled
            && cursor.focused.is_none()
            && matches!(intent, Intent::Previous | Intent::Next | Intent::Activate)
        {
            return Ok(Notifications::new());
        }

        let planned = match plan(intent, cursor, self.registry.len(), self.multi, controlled) {
            Ok(Some(planned)) => planned,
            Ok(None) => return Ok(Notifications::new()),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?intent, error = %err, "listbox input rejected");
                return Err(err);
            }
        };
        let option = self.registry.try_get(planned.target)?.clone();

        #[cfg(feature = "tracing")]
        tracing::trace!(?intent, target = planned.target, steps = ?planned.steps, "transition");

        Ok(match &mut self.mode {
            Mode::Uncontrolled(state) => {
                let next = state.reduce(&planned.action(option));
                let events = StateDiff::between(state, &next).events(&next, self.multi);
                *state = next;
                events
            }
            Mode::Controlled(controlled) => controlled.report(planned, &option),
        })
    }

    fn settle(&mut self) -> Notifications {
        let Mode::Uncontrolled(state) = &mut self.mode else {
            return Notifications::new();
        };
        let before = state.clone();
        state.reconcile(&self.registry);
        let events = StateDiff::between(&before, state).events(state, self.multi);

        if let Some(index) = self.seed
            && let Some(option) = self.registry.get(index)
        {
            if state.selected.is_none() {
                state.selected = Some(option.clone());
            }
            self.seed = None;
        }
        events
    }
}
