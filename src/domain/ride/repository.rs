//! Ride repository interface

use async_trait::async_trait;

use super::model::Ride;
use crate::domain::DomainResult;

#[async_trait]
pub trait RideRepository: Send + Sync {
    async fn save(&self, ride: Ride) -> DomainResult<Ride>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Ride>>;
    async fn find_all(&self) -> DomainResult<Vec<Ride>>;
    async fn update(&self, ride: Ride) -> DomainResult<()>;
    /// Drop the configuration reference from every ride pointing at `config_id`.
    async fn detach_config(&self, config_id: i32) -> DomainResult<u64>;
}
