//! Fetch-state controller and its state machine.
//!
//! # Architecture
//!
//! Uses the MVI primitives from [`crate::ui::mvi`]:
//! - `state.rs` - `FetchState` and the generation-tagged model
//! - `intent.rs` - transition events
//! - `reducer.rs` - pure transitions, drops stale events
//! - `controller.rs` - runs the cycle: fault injector, HTTP, validation
//! - `client.rs` - HTTP capability

mod client;
mod controller;
mod error;
mod intent;
mod reducer;
mod state;

pub use client::{HttpClient, ReqwestClient, MAX_ERROR_BODY};
pub use controller::{Endpoint, FetchController, StateObserver};
pub use error::{FetchError, FetchErrorKind, TransportError};
pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchModel, FetchState, FetchStatus};
