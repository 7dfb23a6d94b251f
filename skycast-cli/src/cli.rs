use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use skycast_core::{Config, provider_from_config};

use crate::{app, view};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    /// With no subcommand, starts the interactive city prompt.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com credential.
    Configure,

    /// Show weather for a location once, without prompts.
    Show {
        /// Location name, e.g. "France" or "Kyiv".
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => {
                let config = Config::load()?;
                app::run(&config).await
            }
            Some(Command::Configure) => configure(),
            Some(Command::Show { location }) => show_once(&location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show_once(location: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let snapshot = provider
        .forecast(location)
        .await
        .with_context(|| format!("Failed to fetch weather for '{location}'"))?;

    view::print_panel(&snapshot, chrono::Local::now().date_naive());
    Ok(())
}
