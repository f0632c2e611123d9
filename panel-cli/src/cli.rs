use anyhow::Context;
use clap::{Parser, Subcommand};
use panel_core::{Config, IpLocationSource, OpenWeatherProvider, WeatherPanel};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-panel", version, about = "Weather panel for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Locate this machine and show current conditions plus the weekly forecast.
    Show,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => show().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?.to_string();

    let provider = match &config.api_base {
        Some(base) => OpenWeatherProvider::with_base_url(api_key, base.clone()),
        None => OpenWeatherProvider::new(api_key),
    };

    let mut panel = WeatherPanel::new(Box::new(provider));
    let source = IpLocationSource::new();
    panel.refresh(Some(&source)).await;

    print!("{}", render::render(panel.state()));
    Ok(())
}
