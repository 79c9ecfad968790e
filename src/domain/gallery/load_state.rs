// SPDX-License-Identifier: MPL-2.0
//! Loading lifecycle of a rendered box.
//!
//! A box starts as a placeholder, moves to loading once it nears the viewport
//! and its real source is requested, then settles as loaded when the fetch
//! completes (successfully or not). The lifecycle never goes backward.

use std::fmt;

/// Loading state of a single gallery box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Showing the stand-in; the real source has not been requested.
    #[default]
    Placeholder,
    /// The real source has been requested and is in flight.
    Loading,
    /// The fetch finished. A failed fetch also ends here.
    Loaded,
}

/// Rejected lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    pub from: LoadState,
    pub to: LoadState,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid load state transition {:?} -> {:?}", self.from, self.to)
    }
}

impl std::error::Error for TransitionError {}

impl LoadState {
    /// Returns the next state in the lifecycle, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            LoadState::Placeholder => Some(LoadState::Loading),
            LoadState::Loading => Some(LoadState::Loaded),
            LoadState::Loaded => None,
        }
    }

    /// Validates a move to `to`.
    ///
    /// Only single forward steps are accepted.
    pub fn transition(self, to: LoadState) -> Result<LoadState, TransitionError> {
        if self.next() == Some(to) {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }

    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self == LoadState::Placeholder
    }

    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == LoadState::Loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_steps_are_accepted() {
        let state = LoadState::default();
        let state = state.transition(LoadState::Loading).unwrap();
        let state = state.transition(LoadState::Loaded).unwrap();
        assert!(state.is_loaded());
    }

    #[test]
    fn skipping_loading_is_rejected() {
        let err = LoadState::Placeholder
            .transition(LoadState::Loaded)
            .unwrap_err();
        assert_eq!(err.from, LoadState::Placeholder);
        assert_eq!(err.to, LoadState::Loaded);
    }

    #[test]
    fn backward_and_repeated_steps_are_rejected() {
        assert!(LoadState::Loaded.transition(LoadState::Placeholder).is_err());
        assert!(LoadState::Loading.transition(LoadState::Placeholder).is_err());
        assert!(LoadState::Loading.transition(LoadState::Loading).is_err());
        assert!(LoadState::Loaded.next().is_none());
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = LoadState::Loaded
            .transition(LoadState::Loading)
            .unwrap_err();
        assert!(err.to_string().contains("Loaded -> Loading"));
    }
}
