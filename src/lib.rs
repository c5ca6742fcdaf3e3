//! # Ride Pricing
//!
//! Computes ride fares from tiered, configurable pricing policies.
//!
//! ## Architecture
//!
//! - **domain**: Pricing configuration, rides, and the fare calculator
//! - **application**: Request DTOs and services (quoting, rule authoring)
//! - **infrastructure**: In-memory configuration/ride stores, policy files
//! - **shared**: Errors, validation helpers, logging setup
//! - **config**: TOML application configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{FareService, PricingConfigService};
pub use domain::{calculate_breakdown, calculate_price, FareBreakdown, PricingConfig, Ride};
pub use infrastructure::{load_policy_file, InMemoryRepositoryProvider};
pub use shared::logging::init_tracing;
