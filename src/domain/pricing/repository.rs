//! Configuration store interface

use async_trait::async_trait;

use super::model::PricingConfig;
use crate::domain::DomainResult;

/// Source of pricing configurations.
///
/// Every read returns a whole [`PricingConfig`] with its rules, so callers
/// price against one consistent snapshot.
#[async_trait]
pub trait PricingConfigRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PricingConfig>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<PricingConfig>>;
    async fn find_all(&self) -> DomainResult<Vec<PricingConfig>>;
    async fn save(&self, config: PricingConfig) -> DomainResult<PricingConfig>;
    async fn update(&self, config: PricingConfig) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
