//! Two small terminal programs built on one message-driven update loop:
//! a calorie counter and a weather tracker.
//!
//! Each program is a model ([`ui::mvi::UiState`]), a set of intents, a
//! reducer and a view. [`ui::runtime::Program`] owns the model and applies
//! intents one at a time.

pub mod calories;
pub mod cli;
pub mod config;
pub mod ids;
pub mod logging;
pub mod ui;
pub mod weather;
