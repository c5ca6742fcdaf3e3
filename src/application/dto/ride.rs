//! Ride request/response types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::pricing::FareBreakdown;
use crate::domain::ride::{parse_ride_date, RideMeasurements};
use crate::shared::errors::DomainError;
use crate::shared::validations::{non_negative_decimal, validate_with};

/// Ride measurements as supplied by a caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RideRequest {
    /// Kilometers
    #[validate(custom(function = "non_negative_decimal", message = "distance must be non-negative"))]
    pub distance: Decimal,
    /// Minutes
    #[validate(range(min = 0, message = "duration must be non-negative"))]
    pub duration: i64,
    /// Minutes
    #[validate(range(min = 0, message = "waiting_time must be non-negative"))]
    pub waiting_time: i64,
    /// `YYYY-MM-DD`
    pub ride_date: String,
}

impl TryFrom<RideRequest> for RideMeasurements {
    type Error = DomainError;

    fn try_from(req: RideRequest) -> Result<Self, Self::Error> {
        validate_with(&req, DomainError::InvalidInput)?;
        let ride_date = parse_ride_date(&req.ride_date)?;
        Ok(RideMeasurements::new(
            req.distance,
            req.duration,
            req.waiting_time,
            ride_date,
        ))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FareQuoteResponse {
    pub pricing_config: Option<String>,
    pub base_fare: Decimal,
    pub distance_price: Decimal,
    pub time_price: Decimal,
    pub waiting_charge: Decimal,
    pub day_factor: Decimal,
    pub total: Decimal,
}

impl FareQuoteResponse {
    pub fn new(pricing_config: Option<String>, breakdown: FareBreakdown) -> Self {
        Self {
            pricing_config,
            base_fare: breakdown.base_fare,
            distance_price: breakdown.distance_price,
            time_price: breakdown.time_price,
            waiting_charge: breakdown.waiting_charge,
            day_factor: breakdown.day_factor,
            total: breakdown.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn request(distance: &str, duration: i64, waiting: i64, date: &str) -> RideRequest {
        RideRequest {
            distance: Decimal::from_str(distance).unwrap(),
            duration,
            waiting_time: waiting,
            ride_date: date.to_string(),
        }
    }

    #[test]
    fn converts_valid_request() {
        let m = RideMeasurements::try_from(request("7.25", 15, 5, "2024-01-01")).unwrap();
        assert_eq!(m.distance, Decimal::from_str("7.25").unwrap());
        assert_eq!(m.ride_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn rejects_negative_fields() {
        let err = RideMeasurements::try_from(request("-1", 15, 5, "2024-01-01")).unwrap_err();
        match err {
            DomainError::InvalidInput(msg) => assert!(msg.contains("distance")),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = RideMeasurements::try_from(request("1", 1, -5, "2024-01-01")).unwrap_err();
        match err {
            DomainError::InvalidInput(msg) => assert!(msg.contains("waiting_time")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_date() {
        let err = RideMeasurements::try_from(request("1", 1, 1, "01/02/2024")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn deserializes_from_json() {
        let req: RideRequest = serde_json::from_str(
            r#"{"distance": "7", "duration": 15, "waiting_time": 5, "ride_date": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(req.distance, Decimal::from(7));
    }
}
