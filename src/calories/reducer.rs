use std::sync::Arc;

use crate::calories::intent::CalorieIntent;
use crate::calories::state::{CalorieState, Entry};
use crate::ids::IdSource;
use crate::ui::mvi::Reducer;

pub struct CalorieReducer {
    ids: Arc<dyn IdSource>,
}

impl CalorieReducer {
    pub fn new(ids: Arc<dyn IdSource>) -> Self {
        Self { ids }
    }
}

impl Reducer for CalorieReducer {
    type State = CalorieState;
    type Intent = CalorieIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalorieIntent::UpdateMeal(meal_draft) => CalorieState { meal_draft, ..state },
            CalorieIntent::UpdateCalories(calorie_draft) => CalorieState {
                calorie_draft,
                ..state
            },
            CalorieIntent::Save => {
                let calories = match state.calorie_draft {
                    Some(calories) if state.can_save() => calories,
                    _ => {
                        tracing::debug!(
                            meal = %state.meal_draft,
                            calories = ?state.calorie_draft,
                            "Save rejected: meal name and calories are both required"
                        );
                        return state;
                    }
                };
                let CalorieState {
                    meal_draft,
                    mut entries,
                    total_calories,
                    ..
                } = state;
                entries.push(Entry {
                    id: self.ids.next_id(),
                    meal_name: meal_draft.trim().to_string(),
                    calories,
                });
                CalorieState {
                    meal_draft: String::new(),
                    calorie_draft: None,
                    entries,
                    total_calories: total_calories + u64::from(calories),
                }
            }
            CalorieIntent::Delete { id } => {
                let Some(index) = state.entries.iter().position(|entry| entry.id == id) else {
                    tracing::debug!(id, "Delete ignored: no such entry");
                    return state;
                };
                let mut state = state;
                let removed = state.entries.remove(index);
                state.total_calories -= u64::from(removed.calories);
                state
            }
        }
    }
}
