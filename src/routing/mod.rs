pub mod config;
pub mod geo;
pub mod ranker;

pub use config::RankerConfig;
pub use ranker::{FacilityRanker, RankedFacility};
