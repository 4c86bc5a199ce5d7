use std::sync::Arc;

use aqi_core::{
    AirQualityProvider, AqiResult, Config, aqi_for_city, aqi_for_coords,
    provider::provider_from_config,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::Password;

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "aqi", version, about = "Air quality and weather facade over OpenWeather")]
pub struct Cli {
    /// OpenWeather API key; overrides the one stored by `aqi configure`.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "AQI_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Serve the HTTP API.
    Serve {
        /// Interface to bind; defaults to the configured host.
        #[arg(long)]
        host: Option<String>,

        /// Port to bind; defaults to the configured port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print air quality and weather for a city.
    City {
        /// City name, e.g. "London" or "Paris,FR".
        name: String,
    },

    /// Print air quality and weather for a coordinate pair.
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(Config::load_or_default()),
            Command::Serve { host, port } => {
                let config = Config::load()?;
                let provider = build_provider(&config, self.api_key)?;
                let host = host.unwrap_or_else(|| config.server.host.clone());
                let port = port.unwrap_or(config.server.port);
                server::serve(&host, port, provider).await
            }
            Command::City { name } => {
                let provider = build_provider(&Config::load()?, self.api_key)?;
                print_result(aqi_for_city(provider.as_ref(), &name).await?)
            }
            Command::Coords { lat, lon } => {
                let provider = build_provider(&Config::load()?, self.api_key)?;
                print_result(aqi_for_coords(provider.as_ref(), lat, lon).await?)
            }
        }
    }
}

fn build_provider(config: &Config, api_key: Option<String>) -> Result<Arc<dyn AirQualityProvider>> {
    let config = config.clone().with_api_key_override(api_key);
    Ok(Arc::from(provider_from_config(&config)?))
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Create one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn print_result(result: AqiResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}
