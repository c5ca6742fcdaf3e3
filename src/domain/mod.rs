pub mod pricing;
pub mod repositories;
pub mod ride;

// Re-export commonly used types
pub use pricing::{
    calculate_breakdown, calculate_price, BaseFare, DayOfWeekFactor, DistanceBasedPrice,
    FareBreakdown, PricingConfig, PricingConfigRepository, TimeBasedPrice, WaitingCharge,
};
pub use repositories::{DomainResult, RepositoryProvider};
pub use ride::{Ride, RideMeasurements, RideRepository};

pub use crate::shared::errors::DomainError;
