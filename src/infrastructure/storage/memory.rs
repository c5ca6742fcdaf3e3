//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, PricingConfig, PricingConfigRepository, RepositoryProvider, Ride,
    RideRepository,
};

/// In-memory pricing configuration store.
///
/// Configurations are stored and returned whole, so a reader never observes
/// a half-applied edit.
pub struct InMemoryPricingConfigRepository {
    configs: DashMap<i32, PricingConfig>,
    counter: AtomicI32,
}

impl InMemoryPricingConfigRepository {
    pub fn new() -> Self {
        Self {
            configs: DashMap::new(),
            counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryPricingConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingConfigRepository for InMemoryPricingConfigRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PricingConfig>> {
        Ok(self.configs.get(&id).map(|c| c.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<PricingConfig>> {
        Ok(self
            .configs
            .iter()
            .find(|e| e.value().has_name(name))
            .map(|e| e.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<PricingConfig>> {
        let mut all: Vec<PricingConfig> = self.configs.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn save(&self, mut config: PricingConfig) -> DomainResult<PricingConfig> {
        config.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.configs.insert(config.id, config.clone());
        Ok(config)
    }

    async fn update(&self, config: PricingConfig) -> DomainResult<()> {
        match self.configs.get_mut(&config.id) {
            Some(mut existing) => {
                *existing = config;
                Ok(())
            }
            None => Err(DomainError::not_found("PricingConfig", "id", config.id)),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.configs
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("PricingConfig", "id", id))?;
        Ok(())
    }
}

/// In-memory ride store.
pub struct InMemoryRideRepository {
    rides: DashMap<i32, Ride>,
    counter: AtomicI32,
}

impl InMemoryRideRepository {
    pub fn new() -> Self {
        Self {
            rides: DashMap::new(),
            counter: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryRideRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RideRepository for InMemoryRideRepository {
    async fn save(&self, mut ride: Ride) -> DomainResult<Ride> {
        ride.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.rides.insert(ride.id, ride.clone());
        Ok(ride)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ride>> {
        Ok(self.rides.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Ride>> {
        let mut all: Vec<Ride> = self.rides.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn update(&self, ride: Ride) -> DomainResult<()> {
        match self.rides.get_mut(&ride.id) {
            Some(mut existing) => {
                *existing = ride;
                Ok(())
            }
            None => Err(DomainError::not_found("Ride", "id", ride.id)),
        }
    }

    async fn detach_config(&self, config_id: i32) -> DomainResult<u64> {
        let mut detached = 0;
        for mut entry in self.rides.iter_mut() {
            if entry.pricing_config_id == Some(config_id) {
                entry.pricing_config_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }
}

/// [`RepositoryProvider`] backed by process memory.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    pricing_configs: InMemoryPricingConfigRepository,
    rides: InMemoryRideRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn pricing_configs(&self) -> &dyn PricingConfigRepository {
        &self.pricing_configs
    }

    fn rides(&self) -> &dyn RideRepository {
        &self.rides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BaseFare, RideMeasurements};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn measurements() -> RideMeasurements {
        RideMeasurements::new(
            Decimal::from(3),
            10,
            0,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        )
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryPricingConfigRepository::new();
        let a = repo.save(PricingConfig::new("A")).await.unwrap();
        let b = repo.save(PricingConfig::new("B")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn update_replaces_whole_config() {
        let repo = InMemoryPricingConfigRepository::new();
        let mut cfg = repo.save(PricingConfig::new("A")).await.unwrap();
        cfg.base_fares.push(BaseFare {
            amount: Decimal::from(2),
        });
        repo.update(cfg.clone()).await.unwrap();

        let loaded = repo.find_by_id(cfg.id).await.unwrap().unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(repo.find_by_name("A").await.unwrap().unwrap().id, cfg.id);
    }

    #[tokio::test]
    async fn find_by_name_ignores_case() {
        let repo = InMemoryPricingConfigRepository::new();
        let city = repo.save(PricingConfig::new("City")).await.unwrap();
        let tag = repo.save(PricingConfig::new("Ärzte")).await.unwrap();

        assert_eq!(repo.find_by_name("city").await.unwrap().unwrap().id, city.id);
        assert_eq!(repo.find_by_name("ÄRZTE").await.unwrap().unwrap().id, tag.id);
        assert!(repo.find_by_name("town").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_unknown_is_not_found() {
        let repo = InMemoryPricingConfigRepository::new();
        let mut ghost = PricingConfig::new("Ghost");
        ghost.id = 42;
        assert!(matches!(
            repo.update(ghost).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(42).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn snapshot_is_isolated_from_later_edits() {
        let repo = InMemoryPricingConfigRepository::new();
        let cfg = repo.save(PricingConfig::new("A")).await.unwrap();
        let snapshot = repo.find_by_id(cfg.id).await.unwrap().unwrap();

        let mut edited = snapshot.clone();
        edited.base_fares.push(BaseFare {
            amount: Decimal::from(9),
        });
        repo.update(edited).await.unwrap();

        assert!(snapshot.base_fares.is_empty());
    }

    #[tokio::test]
    async fn detach_config_clears_references() {
        let repo = InMemoryRideRepository::new();
        repo.save(Ride::new(Some(1), measurements())).await.unwrap();
        repo.save(Ride::new(Some(2), measurements())).await.unwrap();
        repo.save(Ride::new(Some(1), measurements())).await.unwrap();

        assert_eq!(repo.detach_config(1).await.unwrap(), 2);
        let refs: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.pricing_config_id)
            .collect();
        assert_eq!(refs, vec![None, Some(2), None]);
    }
}
