use clap::{Parser, Subcommand};
use skycheck_core::{
    Config, Coordinates, FetchState, Platform, UnitSystem, WeatherClient, WeatherController,
};

use crate::terminal;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycheck", version, about = "Current weather for your location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Fetch and display the current conditions for a coordinate pair.
    Show {
        /// Latitude of the location fix.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the location fix.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Locale tag deciding the displayed unit suffix, e.g. "en_IN".
        /// Defaults to the configured locale, then the LANG environment value.
        #[arg(long)]
        locale: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lat, lon, locale } => show(lat, lon, locale).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(lat: f64, lon: f64, locale: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?.to_owned();

    let locale = locale
        .or_else(|| config.locale.clone())
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    let unit_system = UnitSystem::from_locale(&locale);
    tracing::debug!(%locale, ?unit_system, "resolved display units");

    let platform = Platform {
        gate: Box::new(terminal::PromptGate),
        location: Box::new(terminal::ManualFix {
            coords: Coordinates {
                latitude: lat,
                longitude: lon,
            },
        }),
        network: Box::new(terminal::AssumeOnline),
        settings: Box::new(terminal::SettingsHints),
        progress: Box::new(terminal::LineProgress::default()),
        notice: Box::new(terminal::StderrNotice),
        display: Box::new(terminal::StdoutDisplay),
    };

    let mut controller = WeatherController::new(WeatherClient::new(api_key), unit_system, platform);

    // Failures were already surfaced as notices or log lines; the exit code
    // is the only thing left to set.
    if let FetchState::Failed(_) = controller.run().await {
        std::process::exit(1);
    }

    Ok(())
}
