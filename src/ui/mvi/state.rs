//! Base trait for renderable state.

/// Marker trait for state objects.
///
/// States are replaced wholesale on every transition, cloned for readers
/// and compared to detect whether a transition changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
