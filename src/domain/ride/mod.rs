//! Ride aggregate

pub mod model;
pub mod repository;

pub use model::{parse_ride_date, Ride, RideMeasurements};
pub use repository::RideRepository;
