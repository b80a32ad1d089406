//! Reducer for fetch state transitions.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchModel, FetchState};

/// Pure `(model, intent) -> model` transition function.
///
/// Events from a generation other than the current one are dropped, so a
/// slow response can never overwrite the outcome of a newer request.
pub struct FetchReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchModel<T>;
    type Intent = FetchIntent<T>;

    fn reduce(model: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Started { generation } if generation > model.generation => FetchModel {
                generation,
                state: FetchState::Loading,
            },

            FetchIntent::Succeeded { generation, data }
                if model.is_current(generation) && model.state.is_loading() =>
            {
                FetchModel {
                    generation,
                    state: FetchState::Success(data),
                }
            }

            FetchIntent::Failed { generation, error }
                if model.is_current(generation) && model.state.is_loading() =>
            {
                FetchModel {
                    generation,
                    state: FetchState::Error(error),
                }
            }

            // Stale or out-of-order event
            _ => model,
        }
    }
}
