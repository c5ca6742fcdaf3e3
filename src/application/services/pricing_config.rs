//! Pricing configuration management

use std::sync::Arc;

use tracing::info;

use crate::application::dto::{
    BaseFareRequest, CreatePricingConfigRequest, DayFactorRequest, DistanceTierRequest,
    PolicyDocument, TimeTierRequest, WaitingChargeRequest,
};
use crate::domain::pricing::DEFAULT_FREE_WAITING_MINUTES;
use crate::domain::{DayOfWeekFactor, DomainResult, PricingConfig, RepositoryProvider};
use crate::shared::errors::DomainError;
use crate::shared::validations::validate_with;

/// Service for authoring pricing configurations and their rules
pub struct PricingConfigService {
    repos: Arc<dyn RepositoryProvider>,
    default_free_waiting_minutes: u32,
}

impl PricingConfigService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            default_free_waiting_minutes: DEFAULT_FREE_WAITING_MINUTES,
        }
    }

    pub fn with_default_free_waiting_minutes(mut self, minutes: u32) -> Self {
        self.default_free_waiting_minutes = minutes;
        self
    }

    pub async fn create_config(
        &self,
        request: CreatePricingConfigRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        let name = request.name.trim().to_string();
        self.ensure_unique_name(&name, None).await?;

        let mut config = PricingConfig::new(name);
        config.is_active = request.is_active.unwrap_or(true);
        let config = self.repos.pricing_configs().save(config).await?;

        info!(config_id = config.id, name = %config.name, is_active = config.is_active, "Pricing config created");
        Ok(config)
    }

    pub async fn get_config(&self, id: i32) -> DomainResult<PricingConfig> {
        self.repos
            .pricing_configs()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("PricingConfig", "id", id))
    }

    pub async fn find_by_name(&self, name: &str) -> DomainResult<Option<PricingConfig>> {
        self.repos.pricing_configs().find_by_name(name).await
    }

    pub async fn list_configs(&self) -> DomainResult<Vec<PricingConfig>> {
        self.repos.pricing_configs().find_all().await
    }

    /// Lowest-id active configuration.
    pub async fn active_config(&self) -> DomainResult<Option<PricingConfig>> {
        Ok(self
            .repos
            .pricing_configs()
            .find_all()
            .await?
            .into_iter()
            .find(|c| c.is_active))
    }

    pub async fn set_active(&self, id: i32, is_active: bool) -> DomainResult<PricingConfig> {
        let config = self
            .modify(id, |config| {
                config.is_active = is_active;
                Ok(())
            })
            .await?;
        info!(config_id = id, is_active, "Pricing config activation changed");
        Ok(config)
    }

    pub async fn rename(&self, id: i32, name: &str) -> DomainResult<PricingConfig> {
        let request = CreatePricingConfigRequest {
            name: name.to_string(),
            is_active: None,
        };
        validate_with(&request, DomainError::Validation)?;
        let name = name.trim().to_string();
        self.ensure_unique_name(&name, Some(id)).await?;

        self.modify(id, |config| {
            config.name = name;
            Ok(())
        })
        .await
    }

    /// Delete a configuration and its rules.
    ///
    /// Rides priced with it keep their stored total and lose the reference.
    pub async fn delete_config(&self, id: i32, actor: &str) -> DomainResult<()> {
        let config = self.get_config(id).await?;
        // rides must never point at a removed id
        let detached_rides = self.repos.rides().detach_config(id).await?;
        self.repos.pricing_configs().delete(id).await?;

        info!(
            target: "audit",
            action = "DELETE",
            config_id = id,
            name = %config.name,
            actor,
            detached_rides,
            "Pricing config deleted"
        );
        Ok(())
    }

    /// Replace the configuration's base fare.
    pub async fn set_base_fare(
        &self,
        id: i32,
        request: BaseFareRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        self.modify(id, |config| {
            config.base_fares = vec![request.into()];
            Ok(())
        })
        .await
    }

    /// Insert or replace the factor for one weekday.
    pub async fn set_day_factor(
        &self,
        id: i32,
        request: DayFactorRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        let factor: DayOfWeekFactor = request.into();
        self.modify(id, |config| {
            match config.day_factors.iter_mut().find(|f| f.day == factor.day) {
                Some(existing) => existing.multiplier = factor.multiplier,
                None => config.day_factors.push(factor),
            }
            Ok(())
        })
        .await
    }

    pub async fn add_time_tier(
        &self,
        id: i32,
        request: TimeTierRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        self.modify(id, |config| {
            config.time_prices.push(request.into());
            Ok(())
        })
        .await
    }

    pub async fn add_distance_tier(
        &self,
        id: i32,
        request: DistanceTierRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        self.modify(id, |config| {
            config.distance_prices.push(request.into());
            Ok(())
        })
        .await
    }

    /// Replace the configuration's waiting charge.
    pub async fn set_waiting_charge(
        &self,
        id: i32,
        request: WaitingChargeRequest,
    ) -> DomainResult<PricingConfig> {
        validate_with(&request, DomainError::Validation)?;
        let rule = request.into_rule(self.default_free_waiting_minutes);
        self.modify(id, |config| {
            config.waiting_charges = vec![rule];
            Ok(())
        })
        .await
    }

    /// Create every configuration of a policy document.
    ///
    /// Stops at the first invalid entry; entries before it stay stored.
    pub async fn import_policy(&self, document: PolicyDocument) -> DomainResult<Vec<PricingConfig>> {
        let mut imported = Vec::with_capacity(document.pricing.len());

        for entry in document.pricing {
            let config = self
                .create_config(CreatePricingConfigRequest {
                    name: entry.name,
                    is_active: Some(entry.is_active),
                })
                .await?;
            let id = config.id;

            if let Some(base_fare) = entry.base_fare {
                self.set_base_fare(id, base_fare).await?;
            }
            for factor in entry.day_factors {
                self.set_day_factor(id, factor).await?;
            }
            for tier in entry.distance_tiers {
                self.add_distance_tier(id, tier).await?;
            }
            for tier in entry.time_tiers {
                self.add_time_tier(id, tier).await?;
            }
            if let Some(waiting) = entry.waiting_charge {
                self.set_waiting_charge(id, waiting).await?;
            }

            imported.push(self.get_config(id).await?);
        }

        info!(count = imported.len(), "Pricing policy imported");
        Ok(imported)
    }

    async fn modify<F>(&self, id: i32, edit: F) -> DomainResult<PricingConfig>
    where
        F: FnOnce(&mut PricingConfig) -> DomainResult<()>,
    {
        let mut config = self.get_config(id).await?;
        edit(&mut config)?;
        config.touch();
        self.repos.pricing_configs().update(config.clone()).await?;
        Ok(config)
    }

    async fn ensure_unique_name(&self, name: &str, except_id: Option<i32>) -> DomainResult<()> {
        let taken = self
            .repos
            .pricing_configs()
            .find_all()
            .await?
            .into_iter()
            .any(|c| Some(c.id) != except_id && c.has_name(name));

        if taken {
            return Err(DomainError::Conflict(format!(
                "A pricing configuration named '{}' already exists",
                name
            )));
        }
        Ok(())
    }
}
