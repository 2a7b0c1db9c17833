use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use elmish_demos::calories::{self, CalorieReducer, CalorieState};
use elmish_demos::cli::{Cli, Command};
use elmish_demos::config::Config;
use elmish_demos::ids::{IdSource, MonotonicClock};
use elmish_demos::logging::init_tracing;
use elmish_demos::ui;
use elmish_demos::weather::{OpenWeatherClient, WeatherReducer, WeatherState, WeatherView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| Config::default_log_path(cli.command.name()));
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let ids: Arc<dyn IdSource> = Arc::new(MonotonicClock::new());
    tracing::info!(program = cli.command.name(), "Starting");

    match cli.command {
        Command::Calories => {
            ui::run(CalorieState::default(), CalorieReducer::new(ids), calories::view).await?;
        }
        Command::Weather => {
            let provider = OpenWeatherClient::from_config(&config.weather)?;
            let view = WeatherView::new(config.weather.units);
            ui::run(
                WeatherState::default(),
                WeatherReducer::new(Arc::new(provider), ids),
                move |state: &WeatherState| view.render(state),
            )
            .await?;
        }
    }

    Ok(())
}
