pub mod logging;
pub mod types;
pub mod validations;

pub use types::*;
