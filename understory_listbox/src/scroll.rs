// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the active option visible.

use core::ops::Range;

/// Scroll offset that brings `item` into `viewport`, or `None` if it is visible.
///
/// Both ranges are in the scroll container's content coordinates along the scroll
/// axis; `viewport.start` is the current scroll offset. An item below the viewport is
/// aligned to the bottom edge, one above it to the top edge. Items taller than the
/// viewport are top-aligned.
///
/// ```rust
/// use understory_listbox::scroll_into_view;
///
/// // Viewport shows 0..100; an option at 120..140 scrolls so its bottom is at 100.
/// assert_eq!(scroll_into_view(0.0..100.0, 120.0..140.0), Some(40.0));
/// assert_eq!(scroll_into_view(40.0..140.0, 20.0..40.0), Some(20.0));
/// assert_eq!(scroll_into_view(0.0..100.0, 20.0..40.0), None);
/// ```
#[must_use]
pub fn scroll_into_view(viewport: Range<f64>, item: Range<f64>) -> Option<f64> {
    let height = viewport.end - viewport.start;
    if item.start < viewport.start || item.end - item.start > height {
        Some(item.start)
    } else if item.end > viewport.end {
        Some(item.end - height)
    } else {
        None
    }
}
