//! Policy document: a batch of pricing configurations with their rules.
//!
//! ```toml
//! [[pricing]]
//! name = "City"
//! base_fare = { amount = "2.50" }
//! waiting_charge = { free_waiting_minutes = 3, price_per_minute = "0.50" }
//!
//! [[pricing.distance_tiers]]
//! min_distance = 0
//! max_distance = 5
//! price_per_km = "1.00"
//! ```

use serde::Deserialize;

use super::pricing::{
    BaseFareRequest, DayFactorRequest, DistanceTierRequest, TimeTierRequest, WaitingChargeRequest,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub pricing: Vec<PolicyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyEntry {
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub base_fare: Option<BaseFareRequest>,
    pub waiting_charge: Option<WaitingChargeRequest>,
    #[serde(default)]
    pub day_factors: Vec<DayFactorRequest>,
    #[serde(default)]
    pub time_tiers: Vec<TimeTierRequest>,
    #[serde(default)]
    pub distance_tiers: Vec<DistanceTierRequest>,
}

fn default_active() -> bool {
    true
}
