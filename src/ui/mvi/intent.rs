//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, form edits)
/// - Settled asynchronous work (a section fetch, a form submission)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
