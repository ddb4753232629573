//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are owned values replaced wholesale by their reducer, comparable
/// for change detection, and default to their initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
