//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - Edits to an input field
///
/// Intents are processed by reducers to produce new states. They are
/// cloned when a view handler fires, so they should stay small.
pub trait Intent: Clone + Debug + Send + 'static {}
