//! Pricing configuration request types
//!
//! Each request carries the authoring constraints of its rule; services
//! validate before storing.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::pricing::{
    BaseFare, DayOfWeekFactor, DistanceBasedPrice, TimeBasedPrice, WaitingCharge,
};
use crate::shared::validations::{non_negative_decimal, positive_decimal};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePricingConfigRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DayFactorRequest {
    /// 0 = Monday .. 6 = Sunday
    #[validate(range(max = 6, message = "day must be between 0 (Monday) and 6 (Sunday)"))]
    pub day: u8,
    #[validate(custom(function = "positive_decimal", message = "Multiplier must be greater than 0."))]
    pub multiplier: Decimal,
}

impl From<DayFactorRequest> for DayOfWeekFactor {
    fn from(r: DayFactorRequest) -> Self {
        Self {
            day: r.day,
            multiplier: r.multiplier,
        }
    }
}

fn bounded_range(min: u32, max: Option<u32>, unit: &str) -> Result<(), ValidationError> {
    match max {
        Some(max) if max != 0 && min >= max => {
            let mut err = ValidationError::new("range_order");
            err.message = Some(format!("Minimum {unit} must be less than maximum {unit}.").into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn time_tier_bounds(r: &TimeTierRequest) -> Result<(), ValidationError> {
    bounded_range(r.min_duration, r.max_duration, "duration")
}

fn distance_tier_bounds(r: &DistanceTierRequest) -> Result<(), ValidationError> {
    bounded_range(r.min_distance, r.max_distance, "distance")
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "time_tier_bounds"))]
pub struct TimeTierRequest {
    pub min_duration: u32,
    pub max_duration: Option<u32>,
    #[validate(custom(function = "non_negative_decimal", message = "Price per minute cannot be negative."))]
    pub price_per_minute: Decimal,
}

impl From<TimeTierRequest> for TimeBasedPrice {
    fn from(r: TimeTierRequest) -> Self {
        Self {
            min_duration: r.min_duration,
            max_duration: r.max_duration,
            price_per_minute: r.price_per_minute,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "distance_tier_bounds"))]
pub struct DistanceTierRequest {
    pub min_distance: u32,
    pub max_distance: Option<u32>,
    #[validate(custom(function = "non_negative_decimal", message = "Price per km cannot be negative."))]
    pub price_per_km: Decimal,
}

impl From<DistanceTierRequest> for DistanceBasedPrice {
    fn from(r: DistanceTierRequest) -> Self {
        Self {
            min_distance: r.min_distance,
            max_distance: r.max_distance,
            price_per_km: r.price_per_km,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WaitingChargeRequest {
    /// Falls back to the configured default allowance when omitted.
    pub free_waiting_minutes: Option<u32>,
    #[validate(custom(function = "non_negative_decimal", message = "Price per minute cannot be negative."))]
    pub price_per_minute: Decimal,
}

impl WaitingChargeRequest {
    pub fn into_rule(self, default_free_minutes: u32) -> WaitingCharge {
        WaitingCharge {
            free_waiting_minutes: self.free_waiting_minutes.unwrap_or(default_free_minutes),
            price_per_minute: self.price_per_minute,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BaseFareRequest {
    #[validate(custom(function = "non_negative_decimal", message = "Base fare cannot be negative."))]
    pub amount: Decimal,
}

impl From<BaseFareRequest> for BaseFare {
    fn from(r: BaseFareRequest) -> Self {
        Self { amount: r.amount }
    }
}
