//! Ride domain entity

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

/// Raw measurements of a ride, the input of a fare calculation.
///
/// Durations are signed so that negative values coming from callers can be
/// rejected with [`DomainError::InvalidInput`] instead of wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RideMeasurements {
    /// Kilometers
    pub distance: Decimal,
    /// Minutes
    pub duration: i64,
    /// Minutes
    pub waiting_time: i64,
    pub ride_date: NaiveDate,
}

impl RideMeasurements {
    pub fn new(distance: Decimal, duration: i64, waiting_time: i64, ride_date: NaiveDate) -> Self {
        Self {
            distance,
            duration,
            waiting_time,
            ride_date,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.distance < Decimal::ZERO {
            return Err(DomainError::InvalidInput(format!(
                "distance must be non-negative, got {}",
                self.distance
            )));
        }
        if self.duration < 0 {
            return Err(DomainError::InvalidInput(format!(
                "duration must be non-negative, got {}",
                self.duration
            )));
        }
        if self.waiting_time < 0 {
            return Err(DomainError::InvalidInput(format!(
                "waiting_time must be non-negative, got {}",
                self.waiting_time
            )));
        }
        Ok(())
    }

    pub fn weekday(&self) -> Weekday {
        self.ride_date.weekday()
    }
}

/// Parse a `YYYY-MM-DD` ride date.
pub fn parse_ride_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::InvalidInput(format!("invalid ride date '{}': {}", raw, e)))
}

/// A priced (or not yet priced) ride.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: i32,
    pub pricing_config_id: Option<i32>,
    pub measurements: RideMeasurements,
    /// Set once; later configuration edits never change it.
    pub total_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    pub fn new(pricing_config_id: Option<i32>, measurements: RideMeasurements) -> Self {
        Self {
            id: 0,
            pricing_config_id,
            measurements,
            total_price: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_priced(&self) -> bool {
        self.total_price.is_some()
    }

    /// Store `price` unless the ride already carries one.
    /// Returns `true` when the price was applied.
    pub fn apply_price(&mut self, price: Decimal) -> bool {
        if self.total_price.is_some() {
            return false;
        }
        self.total_price = Some(price);
        true
    }
}

impl std::fmt::Display for Ride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ride on {} - {}km, {}min",
            self.measurements.ride_date, self.measurements.distance, self.measurements.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> RideMeasurements {
        RideMeasurements::new(
            Decimal::from_str("7.5").unwrap(),
            15,
            5,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn valid_measurements_pass() {
        assert!(sample().validate().is_ok());
        assert_eq!(sample().weekday(), Weekday::Mon);
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut m = sample();
        m.distance = Decimal::from_str("-0.1").unwrap();
        assert!(matches!(m.validate(), Err(DomainError::InvalidInput(_))));

        let mut m = sample();
        m.duration = -1;
        assert!(matches!(m.validate(), Err(DomainError::InvalidInput(_))));

        let mut m = sample();
        m.waiting_time = -3;
        assert!(matches!(m.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn parse_date() {
        assert_eq!(
            parse_ride_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_ride_date("2023-02-29"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(parse_ride_date("yesterday").is_err());
    }

    #[test]
    fn price_is_applied_once() {
        let mut ride = Ride::new(Some(1), sample());
        assert!(!ride.is_priced());
        assert!(ride.apply_price(Decimal::from(12)));
        assert!(!ride.apply_price(Decimal::from(99)));
        assert_eq!(ride.total_price, Some(Decimal::from(12)));
    }

    #[test]
    fn zero_price_is_final_too() {
        let mut ride = Ride::new(None, sample());
        assert!(ride.apply_price(Decimal::ZERO));
        assert!(!ride.apply_price(Decimal::from(5)));
        assert_eq!(ride.total_price, Some(Decimal::ZERO));
    }

    #[test]
    fn display() {
        let ride = Ride::new(None, sample());
        assert_eq!(ride.to_string(), "Ride on 2024-01-01 - 7.5km, 15min");
    }
}
