use thiserror::Error;

/// Errors that can occur while looking up a location.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Enter a place name or \"latitude, longitude\"")]
    EmptyQuery,

    #[error("Could not reach weather provider: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Weather provider did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Weather provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected weather provider response: {0}")]
    Decode(String),
}

impl WeatherError {
    pub fn error_type(&self) -> &'static str {
        match self {
            WeatherError::EmptyQuery => "empty_query",
            WeatherError::Transport { .. } => "transport_error",
            WeatherError::Timeout { .. } => "timeout",
            WeatherError::Status { .. } => "status_error",
            WeatherError::Decode(_) => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_provider_text() {
        let err = WeatherError::Status {
            status: 404,
            message: "city not found".to_string(),
        };
        assert_eq!(err.to_string(), "Weather provider returned 404: city not found");
        assert_eq!(err.error_type(), "status_error");
    }
}
