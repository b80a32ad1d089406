//! Base trait for transition events.

/// Marker trait for intent objects.
///
/// Intents are produced by the controller as a request progresses and are
/// consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
