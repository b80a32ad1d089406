//! Transition events for the fetch state machine.

use crate::ui::mvi::Intent;

use super::error::FetchError;

/// Events that move a [`FetchModel`](super::FetchModel) between states.
///
/// Every event carries the generation of the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchIntent<T> {
    /// A request was issued and owns the model from now on.
    Started { generation: u64 },

    /// The request returned a validated payload.
    Succeeded { generation: u64, data: T },

    /// The request failed (transport, validation or simulated fault).
    Failed { generation: u64, error: FetchError },
}

impl<T> FetchIntent<T> {
    pub fn generation(&self) -> u64 {
        match self {
            FetchIntent::Started { generation }
            | FetchIntent::Succeeded { generation, .. }
            | FetchIntent::Failed { generation, .. } => *generation,
        }
    }
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
