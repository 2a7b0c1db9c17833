mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, Units, WeatherConfig, API_KEY_ENV};
