//! Weather tracker: looks up current conditions for typed-in places.

mod error;
mod intent;
mod provider;
mod query;
mod reducer;
mod state;
mod view;

pub use error::WeatherError;
pub use intent::WeatherIntent;
pub use provider::{Observation, OpenWeatherClient, WeatherProvider};
pub use query::LocationQuery;
pub use reducer::WeatherReducer;
pub use state::{Location, WeatherState};
pub use view::WeatherView;

pub const TITLE: &str = "Weather Forecast";
