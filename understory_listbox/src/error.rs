// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the listbox.

use crate::option::OptionId;

/// Errors surfaced by listbox registration, handlers and attribute projection.
///
/// These all indicate integration bugs. Ordinary edge conditions (navigating past the
/// first or last option, an empty registry, typeahead without a match) are defined
/// no-ops and never produce an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListboxError {
    /// An option tried to register without an enclosing registration pass.
    #[error("listbox option registered outside of a listbox registration pass")]
    NotInitialized,
    /// An option was used before it was assigned an index.
    #[error("listbox option {id} has no index; register it before using it")]
    MissingIndex {
        /// The option lacking an index.
        id: OptionId,
    },
    /// An index does not resolve to a registered option.
    #[error("no option registered at index {index} (registry holds {len})")]
    UnknownIndex {
        /// The index that was requested.
        index: usize,
        /// Number of registered options.
        len: usize,
    },
    /// A direct registration would leave a gap in the index sequence.
    #[error("cannot register at index {index}: registry holds {len} options")]
    IndexGap {
        /// The index that was requested.
        index: usize,
        /// Number of registered options.
        len: usize,
    },
    /// Controlled props were applied to an uncontrolled listbox, or vice versa.
    #[error("listbox mode is fixed at construction and cannot switch")]
    ModeMismatch,
}
