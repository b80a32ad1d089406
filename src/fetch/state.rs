//! State published by a fetch controller.

use crate::ui::mvi::UiState;

use super::error::FetchError;

/// Discriminant of [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    /// `Success` or `Error`: only an explicit retry leaves these.
    pub fn is_terminal(self) -> bool {
        matches!(self, FetchStatus::Success | FetchStatus::Error)
    }
}

/// Outcome of the latest fetch cycle.
///
/// Payload and error live inside their variants, so they can never be
/// populated at the same time and entering `Loading` drops both.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Success(T),
    Error(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_info(&self) -> Option<&FetchError> {
        match self {
            FetchState::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Controller-owned model: the published state plus the generation of the
/// request that currently owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchModel<T> {
    pub generation: u64,
    pub state: FetchState<T>,
}

impl<T> Default for FetchModel<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: FetchState::Idle,
        }
    }
}

impl<T> FetchModel<T> {
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchModel<T> {}
