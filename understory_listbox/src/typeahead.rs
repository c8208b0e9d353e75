// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead: jump to an option by typing the start of its text.
//!
//! Printable keys accumulate into a lowercase buffer. Every keystroke restarts a
//! single clear timer; once it fires the next keystroke starts a fresh buffer.
//!
//! ```rust
//! use understory_listbox::Typeahead;
//!
//! let texts = ["bmw", "ford", "tesla", "toyota"];
//! let mut typeahead = Typeahead::new(500);
//!
//! typeahead.push('t', 0);
//! assert_eq!(Typeahead::find(texts, typeahead.buffer()), Some(2));
//! typeahead.push('o', 100);
//! assert_eq!(Typeahead::find(texts, typeahead.buffer()), Some(3));
//!
//! // More than 500ms later the buffer starts over.
//! typeahead.push('b', 700);
//! assert_eq!(typeahead.buffer(), "b");
//! assert_eq!(Typeahead::find(texts, typeahead.buffer()), Some(0));
//! ```

use alloc::string::String;

use understory_timing::TimerSlot;

/// Default idle time, in milliseconds, after which the buffer clears.
pub const DEFAULT_TYPEAHEAD_DELAY: u64 = 500;

/// Rolling typeahead buffer with its clear timer.
#[derive(Clone, Debug)]
pub struct Typeahead {
    buffer: String,
    clear: TimerSlot<()>,
    delay: u64,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new(DEFAULT_TYPEAHEAD_DELAY)
    }
}

impl Typeahead {
    /// Creates an empty buffer that clears `delay` milliseconds after the last key.
    #[must_use]
    pub fn new(delay: u64) -> Self {
        Self {
            buffer: String::new(),
            clear: TimerSlot::new(),
            delay,
        }
    }

    /// Current buffer contents, lowercase.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Clear delay in milliseconds.
    #[must_use]
    pub fn delay(&self) -> u64 {
        self.delay
    }

    /// When the buffer will clear, if it holds anything.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.clear.deadline()
    }

    /// Milliseconds until the buffer clears, for hosts that arm relative timers.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.clear.remaining(now)
    }

    /// Appends `ch` at time `now` and restarts the clear timer.
    ///
    /// A buffer whose timer already ran out is discarded first, so a host that never
    /// calls [`tick`](Self::tick) still gets correct behavior.
    pub fn push(&mut self, ch: char, now: u64) -> &str {
        self.tick(now);
        self.buffer.extend(ch.to_lowercase());
        self.clear.schedule(now, self.delay, ());
        &self.buffer
    }

    /// Clears the buffer if its timer is due at `now`. Returns `true` if it cleared.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.clear.poll(now).is_some() {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// Drops the buffer and cancels the timer.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.clear.cancel();
    }

    /// Index of the first text starting with `prefix`, ignoring case.
    ///
    /// The scan always starts at index 0; it does not continue from the current
    /// option or wrap around. An empty prefix never matches.
    pub fn find<'a>(texts: impl IntoIterator<Item = &'a str>, prefix: &str) -> Option<usize> {
        if prefix.is_empty() {
            return None;
        }
        texts
            .into_iter()
            .position(|text| starts_with_ignore_case(text, prefix))
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text.next() == Some(expected))
}
