pub mod dto;
pub mod services;

// Re-export key types for convenience
pub use dto::{FareQuoteResponse, PolicyDocument, RideRequest};
pub use services::{FareService, PricingConfigService};
