//! NWS weather CLI
//!
//! Command-line host for the weather plugin: matches typed questions
//! against the plugin's intent templates, runs the handler and prints each
//! spoken line.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::{KeywordMatcher, ProfileStorePort, WEATHER_INTENT, settings};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use domain::{Locale, ProfilePath};
use infrastructure::{
    AppConfig, ConsoleSpeechAdapter, build_weather_handler, init_tracing, open_profile_store,
};
use tracing::{debug, info};

/// NWS weather plugin CLI
#[derive(Debug, Parser)]
#[command(name = "nws-weather")]
#[command(author, version, about = "Ask the National Weather Service about your forecast", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "NWS_WEATHER_CONFIG")]
    config: Option<PathBuf>,

    /// Locale override, e.g. "en-US" or "fr-FR"
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Profile file override
    #[arg(short, long)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ask a weather question
    ///
    /// Example: nws-weather ask what is the weather for tomorrow
    Ask {
        /// The question, as it would be spoken
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Answer as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Store the city and state used for forecasts
    ///
    /// Example: nws-weather set-address "Springfield, IL"
    SetAddress {
        /// Free-text city and state
        address: String,
    },

    /// Print the intent keyword and template tables as JSON
    Intents,

    /// Print the settings descriptor as JSON
    Settings,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let name = path
                .to_str()
                .with_context(|| format!("non UTF-8 config path: {}", path.display()))?;
            AppConfig::load_from(name, None)
        },
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(locale) = cli.locale {
        config.plugin.locale = locale;
    }
    if let Some(profile) = &cli.profile {
        config.profile.path.clone_from(profile);
    }
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    Ok(config)
}

async fn ask(config: &AppConfig, text: &str, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let matcher = KeywordMatcher::new(config.plugin.locale)?;
    let Some(intent) = matcher.match_input(text) else {
        bail!("\"{text}\" does not sound like a weather question");
    };
    debug!(matches = ?intent.matches, "Intent matched");

    let profile = open_profile_store(&config.profile).await?;
    let speech = Arc::new(ConsoleSpeechAdapter::stdout());
    let handler = build_weather_handler(config, profile, speech)?;

    match date {
        Some(today) => handler.handle_on(&intent, today).await?,
        None => handler.handle(&intent).await?,
    }
    Ok(())
}

async fn set_address(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let address = address.trim();
    if address.is_empty() {
        bail!("address must not be empty");
    }

    let profile = open_profile_store(&config.profile).await?;
    profile
        .set(&ProfilePath::address(), serde_json::Value::from(address))
        .await?;
    profile.save().await?;

    info!(path = %config.profile.path.display(), "Address saved");
    println!("Address set to {address}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Ask { text, date } => {
            ask(&config, &text.join(" "), date).await?;
        },

        Commands::SetAddress { address } => {
            set_address(&config, &address).await?;
        },

        Commands::Intents => {
            println!("{}", serde_json::to_string_pretty(&*WEATHER_INTENT)?);
        },

        Commands::Settings => {
            let fields = settings(config.plugin.locale);
            println!("{}", serde_json::to_string_pretty(&fields)?);
        },
    }

    Ok(())
}
