//! Calorie tracker: meal drafts, saved entries and their running total.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CalorieIntent;
pub use reducer::CalorieReducer;
pub use state::{CalorieState, Entry};
pub use view::view;

pub const TITLE: &str = "Calories Counter";
