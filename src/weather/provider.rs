use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::{ConfigError, Units, WeatherConfig};
use crate::weather::error::WeatherError;
use crate::weather::query::LocationQuery;

/// Current conditions for one resolved place.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub name: String,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, query: &LocationQuery) -> Result<Observation, WeatherError>;
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: String,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderMessage {
    message: String,
}

impl From<CurrentWeather> for Observation {
    fn from(payload: CurrentWeather) -> Self {
        Self {
            name: payload.name,
            temp: payload.main.temp,
            temp_min: payload.main.temp_min,
            temp_max: payload.main.temp_max,
        }
    }
}

/// Client for the OpenWeatherMap "current weather" endpoint.
pub struct OpenWeatherClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    units: Units,
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        units: Units,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| WeatherError::Transport {
                source: source.without_url(),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            units,
            timeout,
        })
    }

    /// Builds a client from the `[weather]` section. Fails when no API key
    /// is configured.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?;
        let endpoint = config.endpoint()?;
        Self::new(
            endpoint,
            api_key,
            config.units,
            Duration::from_secs(config.timeout_seconds),
        )
        .map_err(|e| ConfigError::ValidationError {
            message: format!("Failed to build HTTP client: {}", e),
        })
    }

    pub fn request_url(&self, query: &LocationQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match query {
                LocationQuery::Coordinates { lat, lon } => {
                    pairs.append_pair("lat", &lat.to_string());
                    pairs.append_pair("lon", &lon.to_string());
                }
                LocationQuery::Name(name) => {
                    pairs.append_pair("q", name);
                }
            }
            pairs.append_pair("appid", &self.api_key);
            pairs.append_pair("units", self.units.as_param());
        }
        url
    }

    /// The request URL carries the API key, so it is stripped from errors.
    fn classify(&self, source: reqwest::Error) -> WeatherError {
        if source.is_timeout() {
            WeatherError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            WeatherError::Transport {
                source: source.without_url(),
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, query: &LocationQuery) -> Result<Observation, WeatherError> {
        tracing::debug!(%query, "Requesting current weather");

        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            // Provider errors carry a JSON body like {"cod":"404","message":"city not found"}
            let message = serde_json::from_str::<ProviderMessage>(&body)
                .map(|m| m.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(WeatherError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: CurrentWeather =
            serde_json::from_str(&body).map_err(|e| WeatherError::Decode(e.to_string()))?;
        Ok(payload.into())
    }
}
