use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalorieIntent {
    UpdateMeal(String),
    /// `None` when the field is empty or does not hold a valid count.
    UpdateCalories(Option<u32>),
    Save,
    Delete { id: u64 },
}

impl Intent for CalorieIntent {}
