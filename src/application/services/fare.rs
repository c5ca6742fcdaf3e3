//! Fare service: quoting and pricing rides

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dto::{FareQuoteResponse, RideRequest};
use crate::domain::{
    calculate_breakdown, DomainResult, PricingConfig, RepositoryProvider, Ride, RideMeasurements,
};
use crate::shared::errors::DomainError;

/// Service for pricing rides against stored configurations
pub struct FareService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FareService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Price a ride without storing it.
    pub async fn quote(
        &self,
        request: RideRequest,
        config_id: Option<i32>,
    ) -> DomainResult<FareQuoteResponse> {
        let measurements = RideMeasurements::try_from(request)?;
        let config = self.require_config(config_id).await?;
        let breakdown = calculate_breakdown(&measurements, config.as_ref())?;
        Ok(FareQuoteResponse::new(config.map(|c| c.name), breakdown))
    }

    /// Store a new ride and price it once against the current configuration.
    pub async fn create_ride(
        &self,
        request: RideRequest,
        config_id: Option<i32>,
    ) -> DomainResult<Ride> {
        let measurements = RideMeasurements::try_from(request)?;
        let config = self.require_config(config_id).await?;

        let mut ride = Ride::new(config_id, measurements);
        let breakdown = calculate_breakdown(&ride.measurements, config.as_ref())?;
        ride.apply_price(breakdown.total);

        let ride = self.repos.rides().save(ride).await?;

        info!(
            ride_id = ride.id,
            config = config.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
            total = %breakdown.total,
            "Ride priced"
        );
        Ok(ride)
    }

    /// Price a stored ride only if it has no total yet.
    ///
    /// A reference to a configuration that no longer exists prices at zero.
    pub async fn reprice_if_unpriced(&self, ride_id: i32) -> DomainResult<Ride> {
        let mut ride = self.get_ride(ride_id).await?;
        if ride.is_priced() {
            return Ok(ride);
        }

        let config = match ride.pricing_config_id {
            Some(id) => {
                let found = self.repos.pricing_configs().find_by_id(id).await?;
                if found.is_none() {
                    warn!(ride_id, config_id = id, "Linked pricing config missing; pricing at zero");
                }
                found
            }
            None => None,
        };

        let breakdown = calculate_breakdown(&ride.measurements, config.as_ref())?;
        ride.apply_price(breakdown.total);
        self.repos.rides().update(ride.clone()).await?;

        info!(ride_id, total = %breakdown.total, "Ride priced");
        Ok(ride)
    }

    pub async fn get_ride(&self, id: i32) -> DomainResult<Ride> {
        self.repos
            .rides()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Ride", "id", id))
    }

    pub async fn list_rides(&self) -> DomainResult<Vec<Ride>> {
        self.repos.rides().find_all().await
    }

    async fn require_config(&self, config_id: Option<i32>) -> DomainResult<Option<PricingConfig>> {
        match config_id {
            Some(id) => self
                .repos
                .pricing_configs()
                .find_by_id(id)
                .await?
                .map(Some)
                .ok_or_else(|| DomainError::not_found("PricingConfig", "id", id)),
            None => Ok(None),
        }
    }
}
