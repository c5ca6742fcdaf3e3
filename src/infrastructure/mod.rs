//! Infrastructure layer - external concerns

pub mod storage;

pub use storage::{load_policy_file, InMemoryRepositoryProvider};
