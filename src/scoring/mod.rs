pub mod capabilities;
pub mod config;
pub mod engine;
pub mod factors;
pub mod levels;
pub mod validation;

pub use capabilities::{required_capabilities, Capability};
pub use config::ScoringConfig;
pub use engine::{RiskResult, RiskScorer, ScoreBreakdown};
pub use factors::{FactorCategory, GaBucket, RiskFactor, Severity};
pub use levels::{classify, RiskLevel, Urgency};
pub use validation::validate_scoring;
