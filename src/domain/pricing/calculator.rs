//! Fare calculation
//!
//! `total = (base_fare + distance_price + time_price + waiting_charge) * day_factor`,
//! rounded to 2 fraction digits with round-half-to-even.
//!
//! Tiers are consumed greedily: sorted ascending by lower bound, each tier
//! takes `min(remaining, width)` of the measurement (everything left for an
//! open-ended tier) until nothing remains. Gaps and overlaps between tier
//! bounds are not interpreted; only tier widths and order matter.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::model::{PricingConfig, Tier};
use crate::domain::ride::RideMeasurements;
use crate::shared::errors::DomainError;

/// Fraction digits of a computed fare.
pub const PRICE_SCALE: u32 = 2;

/// Component amounts of a fare, before and after the day factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FareBreakdown {
    pub base_fare: Decimal,
    pub distance_price: Decimal,
    pub time_price: Decimal,
    pub waiting_charge: Decimal,
    pub day_factor: Decimal,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl FareBreakdown {
    fn zero() -> Self {
        Self {
            base_fare: Decimal::ZERO,
            distance_price: Decimal::ZERO,
            time_price: Decimal::ZERO,
            waiting_charge: Decimal::ZERO,
            day_factor: Decimal::ONE,
            subtotal: Decimal::ZERO,
            total: round_price(Decimal::ZERO),
        }
    }
}

/// Round half to even, padded to [`PRICE_SCALE`] digits.
pub fn round_price(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(PRICE_SCALE);
    rounded
}

fn too_large(what: &str) -> DomainError {
    DomainError::InvalidInput(format!("{} is too large to price", what))
}

/// Price `quantity` against `tiers` by sequential consumption.
///
/// Fails with [`DomainError::InvalidInput`] when the amount overflows.
pub fn tiered_price<T: Tier>(tiers: &[T], quantity: Decimal) -> Result<Decimal, DomainError> {
    let mut ordered: Vec<&T> = tiers.iter().collect();
    // stable: tiers sharing a lower bound keep their stored order
    ordered.sort_by_key(|t| t.lower_bound());

    let mut remaining = quantity;
    let mut price = Decimal::ZERO;

    for tier in ordered {
        if remaining <= Decimal::ZERO {
            break;
        }
        let applicable = match tier.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        price = applicable
            .checked_mul(tier.rate())
            .and_then(|amount| price.checked_add(amount))
            .ok_or_else(|| too_large("tiered price"))?;
        remaining = remaining
            .checked_sub(applicable)
            .ok_or_else(|| too_large("tiered quantity"))?;
    }

    Ok(price)
}

/// Waiting minutes beyond the free allowance, times the rate.
pub fn waiting_charge(config: &PricingConfig, waiting_time: i64) -> Result<Decimal, DomainError> {
    match config.waiting_charge() {
        Some(rule) if waiting_time > i64::from(rule.free_waiting_minutes) => {
            let chargeable = waiting_time - i64::from(rule.free_waiting_minutes);
            Decimal::from(chargeable)
                .checked_mul(rule.price_per_minute)
                .ok_or_else(|| too_large("waiting charge"))
        }
        Some(_) => Ok(Decimal::ZERO),
        None => {
            debug!(config = %config.name, "No waiting charge rule; waiting is free");
            Ok(Decimal::ZERO)
        }
    }
}

/// Compute the fare with its components.
///
/// Invalid measurements are rejected before anything else. A missing
/// configuration prices the ride at zero; missing optional rules (day factor,
/// waiting charge, base fare) fall back to neutral values.
pub fn calculate_breakdown(
    ride: &RideMeasurements,
    config: Option<&PricingConfig>,
) -> Result<FareBreakdown, DomainError> {
    ride.validate()?;

    let Some(config) = config else {
        debug!("No pricing configuration linked; fare is zero");
        return Ok(FareBreakdown::zero());
    };

    let day_factor = match config.day_factor(ride.weekday()) {
        Some(factor) => factor.multiplier,
        None => {
            debug!(config = %config.name, weekday = %ride.weekday(), "No day factor; using 1.0");
            Decimal::ONE
        }
    };

    let distance_price = tiered_price(&config.distance_prices, ride.distance)?;
    let time_price = tiered_price(&config.time_prices, Decimal::from(ride.duration))?;
    let waiting_charge = waiting_charge(config, ride.waiting_time)?;

    let base_fare = match config.base_fare() {
        Some(fare) => fare.amount,
        None => {
            debug!(config = %config.name, "No base fare; using 0");
            Decimal::ZERO
        }
    };

    let subtotal = [distance_price, time_price, waiting_charge]
        .into_iter()
        .try_fold(base_fare, |acc, part| acc.checked_add(part))
        .ok_or_else(|| too_large("fare subtotal"))?;
    let total = subtotal
        .checked_mul(day_factor)
        .map(round_price)
        .ok_or_else(|| too_large("fare total"))?;

    Ok(FareBreakdown {
        base_fare,
        distance_price,
        time_price,
        waiting_charge,
        day_factor,
        subtotal,
        total,
    })
}

/// Total fare for a ride, rounded to 2 fraction digits.
pub fn calculate_price(
    ride: &RideMeasurements,
    config: Option<&PricingConfig>,
) -> Result<Decimal, DomainError> {
    calculate_breakdown(ride, config).map(|b| b.total)
}

// ── Tests ──────────────────────────────────────────────────────
