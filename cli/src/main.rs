//! Ride Pricing — CLI
//!
//! Loads pricing configurations from a TOML policy file and prices rides
//! against them.
//!
//! ```sh
//! # Quote a ride with the active configuration
//! ride-pricing --policy policy.toml quote --distance 7 --duration 15 --waiting 5 --date 2024-01-01
//!
//! # Pick a configuration by name, print JSON
//! ride-pricing --policy policy.toml quote --pricing Night --distance 3.2 --duration 9 --date 2024-01-06 --json
//!
//! # Validate config and policy without pricing anything
//! ride-pricing --config /etc/ride-pricing/config.toml check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};

use ride_pricing::application::dto::RideRequest;
use ride_pricing::config::AppConfig;
use ride_pricing::domain::RepositoryProvider;
use ride_pricing::{
    default_config_path, init_tracing, load_policy_file, FareService, InMemoryRepositoryProvider,
    PricingConfigService,
};

/// Ride Pricing — tiered fare calculator.
#[derive(Parser, Debug)]
#[command(name = "ride-pricing", version, about = "Price rides against tiered pricing policies")]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "RIDE_PRICING_CONFIG")]
    config: Option<PathBuf>,

    /// Policy file with pricing configurations (overrides `pricing.policy_file`).
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a single ride.
    Quote {
        /// Pricing configuration name (defaults to `pricing.active_config`,
        /// then the first active configuration).
        #[arg(long)]
        pricing: Option<String>,

        /// Distance in kilometers.
        #[arg(long, allow_hyphen_values = true)]
        distance: Decimal,

        /// Duration in minutes.
        #[arg(long, allow_hyphen_values = true)]
        duration: i64,

        /// Waiting time in minutes.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        waiting: i64,

        /// Ride date, YYYY-MM-DD.
        #[arg(long)]
        date: String,

        /// Print the quote as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and policy files and exit.
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            AppConfig::default()
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);
    info!("Configuration: {}", config_path.display());

    // ── Load pricing policy ────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
    let configs = PricingConfigService::new(repos.clone())
        .with_default_free_waiting_minutes(config.pricing.default_free_waiting_minutes);
    let fares = FareService::new(repos);

    if let Some(policy_path) = cli.policy.clone().or_else(|| config.pricing.policy_file.clone()) {
        let document = load_policy_file(&policy_path).map_err(|e| {
            error!("Failed to load policy {}: {}", policy_path.display(), e);
            e
        })?;
        let imported = configs.import_policy(document).await?;
        info!(count = imported.len(), "Loaded policy {}", policy_path.display());
    }

    match cli.command {
        Command::Check => {
            println!("Configuration is valid");
            println!("   Config file : {}", config_path.display());
            println!("   Log level   : {}", config.logging.level);
            for cfg in configs.list_configs().await? {
                println!(
                    "   Pricing     : {} - {} distance tier(s), {} duration tier(s), {} day factor(s)",
                    cfg,
                    cfg.distance_prices.len(),
                    cfg.time_prices.len(),
                    cfg.day_factors.len()
                );
            }
        }
        Command::Quote {
            pricing,
            distance,
            duration,
            waiting,
            date,
            json,
        } => {
            let selected = match pricing.or_else(|| config.pricing.active_config.clone()) {
                Some(name) => Some(configs.find_by_name(&name).await?.ok_or_else(|| {
                    format!("Pricing configuration '{}' not found", name)
                })?),
                None => configs.active_config().await?,
            };

            let request = RideRequest {
                distance,
                duration,
                waiting_time: waiting,
                ride_date: date,
            };
            let quote = fares.quote(request, selected.map(|c| c.id)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!(
                    "Pricing        : {}",
                    quote.pricing_config.as_deref().unwrap_or("(none)")
                );
                println!("Base fare      : {}", quote.base_fare);
                println!("Distance price : {}", quote.distance_price);
                println!("Time price     : {}", quote.time_price);
                println!("Waiting charge : {}", quote.waiting_charge);
                println!("Day factor     : {}", quote.day_factor);
                println!("Total          : {}", quote.total);
            }
        }
    }

    Ok(())
}
