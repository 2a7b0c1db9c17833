use std::sync::Arc;

use async_trait::async_trait;

use crate::ids::IdSource;
use crate::ui::mvi::Update;
use crate::weather::error::WeatherError;
use crate::weather::intent::WeatherIntent;
use crate::weather::provider::WeatherProvider;
use crate::weather::query::LocationQuery;
use crate::weather::state::{Location, WeatherState};

/// Weather transitions. `AddLocation` awaits the provider, so this is an
/// [`Update`] rather than a pure reducer.
pub struct WeatherReducer {
    provider: Arc<dyn WeatherProvider>,
    ids: Arc<dyn IdSource>,
}

impl WeatherReducer {
    pub fn new(provider: Arc<dyn WeatherProvider>, ids: Arc<dyn IdSource>) -> Self {
        Self { provider, ids }
    }

    async fn lookup(&self, input: &str) -> Result<Location, WeatherError> {
        let query = LocationQuery::parse(input).ok_or(WeatherError::EmptyQuery)?;
        let observation = self.provider.current(&query).await?;
        Ok(Location {
            id: self.ids.next_id(),
            name: observation.name,
            current_temp: observation.temp,
            min_temp: observation.temp_min,
            max_temp: observation.temp_max,
        })
    }
}

#[async_trait]
impl Update for WeatherReducer {
    type State = WeatherState;
    type Intent = WeatherIntent;

    async fn update(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::UpdateLocationInput(location_input) => WeatherState {
                location_input,
                error: None,
                ..state
            },
            WeatherIntent::DeleteLocation { id } => {
                let mut state = state;
                state.locations.retain(|location| location.id != id);
                state
            }
            WeatherIntent::AddLocation => match self.lookup(&state.location_input).await {
                Ok(location) => {
                    tracing::info!(id = location.id, name = %location.name, "Location added");
                    let mut locations = state.locations;
                    locations.push(location);
                    WeatherState {
                        locations,
                        location_input: String::new(),
                        error: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        input = %state.location_input,
                        error_type = err.error_type(),
                        "Location lookup failed: {}",
                        err
                    );
                    WeatherState {
                        error: Some(err.to_string()),
                        ..state
                    }
                }
            },
        }
    }
}
