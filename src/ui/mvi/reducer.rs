//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen and must
/// stay free of side effects: logging and notification belong to the caller.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
