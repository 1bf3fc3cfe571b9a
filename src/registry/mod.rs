mod storage;
mod types;

pub use storage::load_registry;
pub use types::{Capacity, CapacityUpdate, Facility, FacilityTier};
