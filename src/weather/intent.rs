use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherIntent {
    AddLocation,
    DeleteLocation { id: u64 },
    UpdateLocationInput(String),
}

impl Intent for WeatherIntent {}
