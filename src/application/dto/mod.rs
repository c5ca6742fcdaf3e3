pub mod policy;
pub mod pricing;
pub mod ride;

pub use policy::{PolicyDocument, PolicyEntry};
pub use pricing::{
    BaseFareRequest, CreatePricingConfigRequest, DayFactorRequest, DistanceTierRequest,
    TimeTierRequest, WaitingChargeRequest,
};
pub use ride::{FareQuoteResponse, RideRequest};
