//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::pricing::PricingConfigRepository;
use super::ride::RideRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let cfg = repos.pricing_configs().find_by_name("City").await?;
///     let ride = repos.rides().find_by_id(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn pricing_configs(&self) -> &dyn PricingConfigRepository;
    fn rides(&self) -> &dyn RideRepository;
}
