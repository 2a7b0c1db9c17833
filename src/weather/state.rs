use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub current_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub locations: Vec<Location>,
    pub location_input: String,
    /// Why the last lookup failed. Cleared on edit and on success.
    pub error: Option<String>,
}

impl UiState for WeatherState {}
