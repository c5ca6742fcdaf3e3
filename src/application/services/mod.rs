//! Application services

mod fare;
mod pricing_config;

pub use fare::FareService;
pub use pricing_config::PricingConfigService;
