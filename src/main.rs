use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cityweather::config::AppConfig;
use cityweather::models::Units;
use cityweather::render::render_report;
use cityweather::{OpenWeatherClient, WeatherAppError, WeatherService, logging, web};

#[derive(Parser, Debug)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather and 5-day forecast for any city",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging and print configuration details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show current weather and the forecast for a city
    Weather {
        /// City to search for (defaults to defaults.city)
        city: Option<String>,

        /// metric or imperial
        #[arg(short, long)]
        units: Option<Units>,
    },
    /// Serve the search page and JSON API
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<WeatherAppError>() {
                Some(app_err) if matches!(app_err, WeatherAppError::Config { .. }) => {
                    eprintln!("Error: {app_err}");
                }
                Some(app_err) => eprintln!("Error: {}", app_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    // Details go to stderr so the report on stdout stays clean
    if cli.verbose {
        print_config_details(&cli, &config);
    }

    match cli.command {
        Some(Command::Weather { city, units }) => {
            let city = city.unwrap_or_else(|| config.defaults.city.clone());
            let units = units.unwrap_or(config.weather.units);
            tracing::debug!("Fetching weather for: {}", city);

            // An empty search is rejected before the API key is needed
            if city.trim().is_empty() {
                return Err(WeatherAppError::validation("City cannot be empty").into());
            }

            let client = OpenWeatherClient::new(&config.weather)?;
            let service = WeatherService::new(Arc::new(client), config.defaults.forecast_days);
            let report = service.report(&city, units).await?;
            print!("{}", render_report(&report));
        }
        Some(Command::Serve { port }) => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            let client = OpenWeatherClient::new(&config.weather)?;
            web::run(&config, Arc::new(client)).await?;
        }
        None => print_banner(),
    }

    Ok(())
}

fn print_banner() {
    println!("cityweather {}", cityweather::VERSION);
    println!("Current weather and 5-day forecast powered by OpenWeatherMap.");
    println!();
    println!("  cityweather weather <CITY>   show the weather for a city");
    println!("  cityweather serve            start the search page on http://localhost:8080");
    println!();
    println!(
        "An OpenWeatherMap API key is required: set weather.api_key or {}.",
        cityweather::config::API_KEY_ENV_VAR
    );
}

fn print_config_details(cli: &Cli, config: &AppConfig) {
    let path = cli
        .config
        .clone()
        .or_else(AppConfig::get_config_path)
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());
    eprintln!("Using config from: {path}");
    eprintln!("Weather API: {}", config.weather.base_url);
    eprintln!(
        "API key: {}",
        if config.weather.resolve_api_key().is_some() {
            "configured"
        } else {
            "missing"
        }
    );
    eprintln!("Default city: {}", config.defaults.city);
    eprintln!("Log level: {}", config.logging.level);
}
