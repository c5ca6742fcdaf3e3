//! Storage implementations

mod memory;
mod policy_file;

pub use memory::{
    InMemoryPricingConfigRepository, InMemoryRepositoryProvider, InMemoryRideRepository,
};
pub use policy_file::{load_policy_file, parse_policy};
