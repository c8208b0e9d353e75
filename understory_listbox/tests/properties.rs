// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariants of the listbox.
//!
//! Verifies:
//! 1. Registration passes keep the registry contiguous and the id map in sync.
//! 2. Navigation never wraps and never leaves the registry.
//! 3. `aria-selected` and `aria-activedescendant` agree with the state after every input.
//! 4. A focus change is reported exactly when focus moved, at most once per input.
//! 5. Controlled listboxes never change their own focus or selection.

use proptest::prelude::*;
use understory_listbox::{
    ControlledState, Listbox, ListboxConfig, ListboxError, ListboxEvent, ListboxKey,
    ListboxOption, SelectedIndex,
};

#[derive(Clone, Debug)]
enum Input {
    Focus,
    Key(ListboxKey),
    Click(usize),
    Wait(u64),
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Focus),
        Just(Input::Key(ListboxKey::ArrowUp)),
        Just(Input::Key(ListboxKey::ArrowDown)),
        Just(Input::Key(ListboxKey::Enter)),
        Just(Input::Key(ListboxKey::Home)),
        Just(Input::Key(ListboxKey::End)),
        Just(Input::Key(ListboxKey::Tab)),
        prop::char::range('a', 'e').prop_map(|c| Input::Key(ListboxKey::Character(c))),
        (0usize..8).prop_map(Input::Click),
        (0u64..1_000).prop_map(Input::Wait),
    ]
}

fn arb_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..6)
}

fn build(config: ListboxConfig, values: &[String]) -> (Listbox, Vec<ListboxOption>) {
    let mut listbox = Listbox::new(config);
    let mut options: Vec<ListboxOption> = values.iter().map(|_| ListboxOption::new()).collect();
    listbox
        .register_options(|pass| -> Result<(), ListboxError> {
            for (option, value) in options.iter_mut().zip(values) {
                option.register(Some(&mut *pass), value)?;
            }
            Ok(())
        })
        .0
        .unwrap();
    (listbox, options)
}

/// Applies `input`, returning the events or `None` for a rejected click.
fn apply(listbox: &mut Listbox, input: &Input, now: &mut u64) -> Option<Vec<ListboxEvent>> {
    match input {
        Input::Focus => Some(listbox.focus().into_vec()),
        Input::Key(key) => Some(listbox.key_down(*key, *now).events.into_vec()),
        Input::Click(index) => listbox.click(*index).ok().map(|events| events.into_vec()),
        Input::Wait(ms) => {
            *now += ms;
            listbox.tick(*now);
            Some(Vec::new())
        }
    }
}

proptest! {
    #[test]
    fn passes_keep_registry_contiguous(
        passes in prop::collection::vec(prop::collection::vec(0usize..8, 0..8), 1..6)
    ) {
        let pool: Vec<ListboxOption> = (0..8).map(|_| ListboxOption::new()).collect();
        let mut listbox = Listbox::new(ListboxConfig::new());

        for pass in passes {
            let mut order = pass.clone();
            let mut seen = [false; 8];
            order.retain(|&i| !core::mem::replace(&mut seen[i], true));

            let mut handles: Vec<ListboxOption> = order.iter().map(|&i| pool[i].clone()).collect();
            listbox
                .register_options(|cx| -> Result<(), ListboxError> {
                    for handle in &mut handles {
                        handle.register(Some(&mut *cx), "x")?;
                    }
                    Ok(())
                })
                .0
                .unwrap();

            let registry = listbox.registry();
            prop_assert_eq!(registry.len(), order.len());
            for (i, option) in registry.iter().enumerate() {
                prop_assert_eq!(option.index, i);
                prop_assert_eq!(option.id, pool[order[i]].id());
                prop_assert_eq!(registry.index_of(option.id), Some(i));
            }
            for (i, handle) in handles.iter().enumerate() {
                prop_assert_eq!(handle.index(), Some(i));
            }
        }
    }

    #[test]
    fn inputs_respect_bounds_and_aria(
        values in arb_values(),
        multi in any::<bool>(),
        inputs in prop::collection::vec(arb_input(), 0..40),
    ) {
        let (mut listbox, _options) = build(ListboxConfig::new().multi_select(multi), &values);
        let len = values.len();
        let mut now = 0;

        for input in &inputs {
            let before = listbox.state().unwrap().clone();
            let Some(events) = apply(&mut listbox, input, &mut now) else {
                prop_assert!(matches!(input, Input::Click(k) if *k >= len));
                continue;
            };
            let state = listbox.state().unwrap();

            if let Some(focused) = state.focused_index() {
                prop_assert!(focused < len);
            }
            let old = before.focused_index();
            if let (Input::Key(ListboxKey::ArrowDown), Some(old)) = (input, old) {
                prop_assert_eq!(state.focused_index(), Some((old + 1).min(len - 1)));
            }
            if let (Input::Key(ListboxKey::ArrowUp), Some(old)) = (input, old) {
                prop_assert_eq!(state.focused_index(), Some(old.saturating_sub(1)));
            }

            let changes = events
                .iter()
                .filter(|event| matches!(event, ListboxEvent::Change(_)))
                .count();
            prop_assert!(events.len() <= 2);
            prop_assert_eq!(changes == 1, before.focused != state.focused);
            if multi {
                prop_assert!(!events.iter().any(|event| matches!(event, ListboxEvent::Select(_))));
            } else {
                prop_assert!(
                    !events.iter().any(|event| matches!(event, ListboxEvent::SelectMany(_)))
                );
            }

            for index in 0..len {
                let props = listbox.option_props(index).unwrap();
                let expected = if multi {
                    state.selected_values.contains(&values[index])
                } else {
                    state.selected_index() == Some(index)
                };
                prop_assert_eq!(props.selected, expected);
            }
            prop_assert_eq!(listbox.listbox_props().active_descendant, state.focused_id());
        }
    }

    #[test]
    fn controlled_listbox_is_read_only(
        values in arb_values(),
        multi in any::<bool>(),
        focused in prop::option::of(0usize..6),
        selected in prop::collection::vec(0usize..6, 0..3),
        inputs in prop::collection::vec(arb_input(), 0..30),
    ) {
        let selected = SelectedIndex::many(selected);
        let config = ListboxConfig::new()
            .multi_select(multi)
            .selected_index(selected.clone());
        let config = match focused {
            Some(index) => config.focused_index(index),
            None => config,
        };
        let (mut listbox, _options) = build(config, &values);
        let expected = ControlledState::new(focused, Some(selected));

        let mut now = 0;
        for input in &inputs {
            let events = apply(&mut listbox, input, &mut now).unwrap_or_default();
            prop_assert!(events.len() <= 2);
            prop_assert!(!events.iter().any(|event| matches!(event, ListboxEvent::SelectMany(_))));
            prop_assert_eq!(listbox.controlled(), Some(&expected));
            prop_assert!(listbox.state().is_none());
        }
    }
}
