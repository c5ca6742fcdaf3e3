//! Pricing aggregate
//!
//! Contains the pricing configuration, its rule records, and fare calculation.

pub mod calculator;
pub mod model;
pub mod repository;

pub use calculator::{calculate_breakdown, calculate_price, round_price, FareBreakdown};
pub use model::{
    BaseFare, DayOfWeekFactor, DistanceBasedPrice, PricingConfig, Tier, TimeBasedPrice,
    WaitingCharge, DEFAULT_FREE_WAITING_MINUTES,
};
pub use repository::PricingConfigRepository;
