use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "elmish-demos",
    version,
    about = "Calorie counter and weather tracker for the terminal"
)]
pub struct Cli {
    /// Config file (default: <config dir>/elmish-demos/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostics to this file instead of the default log file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Track meals and their calories
    Calories,
    /// Track current weather for a list of places
    Weather,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Calories => "calories",
            Command::Weather => "weather",
        }
    }
}
