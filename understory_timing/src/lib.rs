// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI kernels frequently need "do this later, unless something else happens first"
//! behavior: debounced input buffers, hover intent delays, key repeat. This crate
//! keeps the _bookkeeping_ of such timers and leaves the actual clock to the host.
//! Time is expressed as plain `u64` milliseconds on a monotonic clock chosen by the
//! caller (the same convention used by the click recognizer in `understory_event_state`).
//!
//! The core type is [`TimerSlot`], which holds **at most one** pending single-shot
//! timer. Scheduling a new timer cancels and replaces the previous one, so there are
//! never two timers alive at once (last write wins). The host asks for the
//! [`deadline`](TimerSlot::deadline), arranges a wake-up, and then calls
//! [`poll`](TimerSlot::poll) with the current time to collect the payload if it is due.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerSlot;
//!
//! let mut slot = TimerSlot::new();
//!
//! // Schedule a clear 500ms from t=1000.
//! slot.schedule(1_000, 500, "clear");
//! assert_eq!(slot.deadline(), Some(1_500));
//!
//! // A second schedule replaces the first one.
//! let replaced = slot.schedule(1_200, 500, "clear again");
//! assert_eq!(replaced, Some("clear"));
//! assert_eq!(slot.deadline(), Some(1_700));
//! assert_eq!(slot.remaining(1_450), Some(250));
//!
//! // Not due yet.
//! assert_eq!(slot.poll(1_600), None);
//! // Due: the payload is handed back exactly once.
//! assert_eq!(slot.poll(1_700), Some("clear again"));
//! assert_eq!(slot.poll(1_800), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[derive(Clone, Debug)]
struct Pending<T> {
    deadline: u64,
    payload: T,
}

/// A slot holding at most one pending single-shot timer.
///
/// - [`schedule`](Self::schedule) cancels any pending timer and arms a new one.
/// - [`cancel`](Self::cancel) disarms the pending timer, returning its payload.
/// - [`poll`](Self::poll) fires the pending timer if its deadline has been reached.
///
/// The slot never reads a clock; every time-dependent call takes `now` in
/// milliseconds. Deadlines saturate at `u64::MAX` instead of overflowing.
#[derive(Clone, Debug)]
pub struct TimerSlot<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arms a timer that becomes due `delay` milliseconds after `now`.
    ///
    /// Any pending timer is cancelled first and its payload is returned.
    pub fn schedule(&mut self, now: u64, delay: u64, payload: T) -> Option<T> {
        self.pending
            .replace(Pending {
                deadline: now.saturating_add(delay),
                payload,
            })
            .map(|pending| pending.payload)
    }

    /// Cancels the pending timer, if any, and returns its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }

    /// Returns `true` while a timer is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the absolute deadline of the pending timer, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Returns `true` if a timer is armed and due at `now`.
    #[must_use]
    pub fn is_due(&self, now: u64) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Milliseconds left until the pending timer is due, saturating at zero.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline().map(|deadline| deadline.saturating_sub(now))
    }

    /// Fires the pending timer if it is due at `now`, returning its payload.
    ///
    /// A fired timer is disarmed; polling again returns `None` until the next
    /// [`schedule`](Self::schedule).
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.is_due(now) { self.cancel() } else { None }
    }
}
