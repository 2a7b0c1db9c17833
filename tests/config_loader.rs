use elmish_demos::config::{Config, ConfigError, Units, WeatherConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(
        config.weather.base_url,
        "https://api.openweathermap.org/data/2.5/weather"
    );
    assert!(config.weather.api_key.is_none());
    assert_eq!(config.weather.units, Units::Metric);
    assert_eq!(config.weather.timeout_seconds, 10);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("elmish-demos/config.toml"));
}

#[test]
fn test_default_log_path_is_per_program() {
    let path = Config::default_log_path("weather");
    assert!(path.ends_with("elmish-demos/weather.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[weather]
api_key = "abc123"
units = "imperial"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.weather.units, Units::Imperial);
    assert_eq!(config.weather.timeout_seconds, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_full_file_round_trips_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[weather]
base_url = "http://localhost:8080/weather"
units = "standard"
timeout_seconds = 3

[logging]
level = "debug"
file = "/tmp/demos.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.weather.base_url, "http://localhost:8080/weather");
    assert_eq!(config.weather.units, Units::Standard);
    assert_eq!(config.weather.timeout_seconds, 3);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/demos.log"))
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[weather\nunits = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_units_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[weather]\nunits = \"kelvinish\"\n");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[weather]\ntimeout_seconds = 0\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("timeout_seconds"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_non_http_endpoint_fails_validation() {
    let config = Config {
        weather: WeatherConfig {
            base_url: "file:///etc/passwd".to_string(),
            ..WeatherConfig::default()
        },
        ..Config::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("http or https"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_unparseable_endpoint_fails_validation() {
    let config = Config {
        weather: WeatherConfig {
            base_url: "not a url".to_string(),
            ..WeatherConfig::default()
        },
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_env_key_wins_over_file_key() {
    let config = WeatherConfig {
        api_key: Some("from-file".to_string()),
        ..WeatherConfig::default()
    };

    assert_eq!(
        config.resolve_api_key(Some("from-env".to_string())),
        Some("from-env".to_string())
    );
}

#[test]
fn test_blank_env_key_falls_back_to_file() {
    let config = WeatherConfig {
        api_key: Some("from-file".to_string()),
        ..WeatherConfig::default()
    };

    assert_eq!(
        config.resolve_api_key(Some("   ".to_string())),
        Some("from-file".to_string())
    );
}

#[test]
fn test_no_key_anywhere_resolves_to_none() {
    let config = WeatherConfig {
        api_key: Some(String::new()),
        ..WeatherConfig::default()
    };

    assert_eq!(config.resolve_api_key(None), None);
}

#[test]
fn test_missing_key_error_names_env_var() {
    let err = ConfigError::MissingApiKey {
        env_var: "OPENWEATHER_API_KEY",
    };
    assert!(err.to_string().contains("OPENWEATHER_API_KEY"));
}
