use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub meal_name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalorieState {
    pub meal_draft: String,
    pub calorie_draft: Option<u32>,
    pub entries: Vec<Entry>,
    /// Kept equal to the sum of `entries[..].calories`.
    pub total_calories: u64,
}

impl UiState for CalorieState {}

impl CalorieState {
    pub fn can_save(&self) -> bool {
        !self.meal_draft.trim().is_empty() && self.calorie_draft.is_some()
    }

    pub fn entry(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
