use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_core::{
    Config, Coordinates, DisplayUnit, FixedGeolocator, ProxyClient, UiEvent, ViewController,
    WeatherSource, provider_from_config,
};

use crate::terminal::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather widget: proxy server and terminal front-end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI key and default location.
    Configure,

    /// Run the proxy endpoint and static file server.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Directory served for paths outside `/api`.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show current conditions and the forecast once.
    Show {
        /// Location name or "lat,lon"; defaults to your position or the configured default.
        location: Option<String>,

        /// Temperature unit: c or f.
        #[arg(long, default_value = "c")]
        unit: DisplayUnit,

        /// Position to use instead of the configured coordinates, as "lat,lon".
        #[arg(long)]
        coords: Option<Coordinates>,
    },

    /// Search repeatedly; `/c` and `/f` switch units, `/quit` exits.
    Interactive {
        #[arg(long, default_value = "c")]
        unit: DisplayUnit,

        #[arg(long)]
        coords: Option<Coordinates>,
    },
}

/// Input typed at the interactive prompt.
#[derive(Debug, PartialEq)]
enum Input {
    Quit,
    Unit(DisplayUnit),
    Search(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "/quit" | "/q" | "/exit" => Input::Quit,
        "/c" => Input::Unit(DisplayUnit::Celsius),
        "/f" => Input::Unit(DisplayUnit::Fahrenheit),
        other => Input::Search(other.to_string()),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Serve { host, port, static_dir } => {
                let mut config = Config::load()?;
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                if let Some(dir) = static_dir {
                    config.server.static_dir = dir;
                }

                let provider = provider_from_config(&config)?;
                weather_server::serve(&config.server, provider).await
            }
            Command::Show { location, unit, coords } => {
                let config = Config::load()?;
                let mut ctl = controller(&config, unit, coords);

                match location {
                    Some(location) => ctl.fetch_weather(Some(&location)).await,
                    None => ctl.initialize().await,
                }

                if ctl.snapshot().is_none() {
                    anyhow::bail!("No weather data available");
                }
                Ok(())
            }
            Command::Interactive { unit, coords } => {
                let config = Config::load()?;
                let mut ctl = controller(&config, unit, coords);
                ctl.initialize().await;
                interactive_loop(&mut ctl).await
            }
        }
    }
}

fn controller(
    config: &Config,
    unit: DisplayUnit,
    coords: Option<Coordinates>,
) -> ViewController<TerminalView> {
    let source: Arc<dyn WeatherSource> = Arc::new(ProxyClient::new(config.client.proxy_url.clone()));

    let ctl = ViewController::new(source, TerminalView::default())
        .with_default_location(config.client.default_location.clone())
        .with_unit(unit);

    match coords.or(config.client.coordinates) {
        Some(position) => ctl.with_geolocator(Box::new(FixedGeolocator::new(position))),
        None => ctl,
    }
}

async fn interactive_loop(ctl: &mut ViewController<TerminalView>) -> anyhow::Result<()> {
    loop {
        let line = match Text::new("Location (/c, /f, /quit):").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Unit(unit) => ctl.handle_event(UiEvent::SelectUnit(unit)).await,
            Input::Search(text) if text.is_empty() => println!("Please enter a location"),
            Input::Search(text) => {
                ctl.view_mut().set_search_text(text);
                ctl.handle_event(UiEvent::Search).await;
                ctl.view_mut().set_search_text("");
            }
        }
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.upstream.api_key = Some(api_key.trim().to_string());
    }

    let default_location = Text::new("Default location:")
        .with_default(&config.client.default_location)
        .prompt()
        .context("Failed to read default location")?;
    config.client.default_location = default_location.trim().to_string();

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}
