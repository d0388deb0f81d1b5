// SPDX-License-Identifier: MPL-2.0
//! Index movement inside a deck.

use serde::{Deserialize, Serialize};

/// What happens when moving past either end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Stay on the first/last card; the matching control is disabled.
    #[default]
    Clamp,
    /// Continue from the other end.
    Wrap,
}

/// Snapshot of navigation state for rendering the controls.
/// Under wrap-around both moves stay enabled at either end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub has_next: bool,
    pub has_previous: bool,
}

impl NavigationInfo {
    #[must_use]
    pub fn new(index: usize, deck_len: usize, policy: BoundaryPolicy) -> Self {
        if deck_len == 0 {
            return Self::default();
        }
        let at_first = index == 0;
        let at_last = index + 1 == deck_len;
        let wraps = policy == BoundaryPolicy::Wrap && deck_len > 1;
        Self {
            has_next: !at_last || wraps,
            has_previous: !at_first || wraps,
        }
    }
}

/// Index after moving forward, or `None` if the move is a no-op.
#[must_use]
pub fn next_index(index: usize, deck_len: usize, policy: BoundaryPolicy) -> Option<usize> {
    if deck_len == 0 {
        return None;
    }
    if index + 1 < deck_len {
        return Some(index + 1);
    }
    match policy {
        BoundaryPolicy::Wrap if deck_len > 1 => Some(0),
        _ => None,
    }
}

/// Index after moving backward, or `None` if the move is a no-op.
#[must_use]
pub fn previous_index(index: usize, deck_len: usize, policy: BoundaryPolicy) -> Option<usize> {
    if deck_len == 0 {
        return None;
    }
    if index > 0 {
        return Some(index - 1);
    }
    match policy {
        BoundaryPolicy::Wrap if deck_len > 1 => Some(deck_len - 1),
        _ => None,
    }
}
