//! Maternal health risk triage engine.
//!
//! Pipeline: an [`assessment::Assessment`] flows into the
//! [`scoring::RiskScorer`], which produces a score, risk factors, and
//! recommendations; the level classifier and capability resolver derive the
//! risk level and required facility capabilities; the
//! [`routing::FacilityRanker`] then filters and ranks a facility registry
//! snapshot into a referral shortlist.
//!
//! Every stage is a pure function over immutable inputs, so assessments can
//! be scored and ranked concurrently from shared references.

pub mod assessment;
pub mod config;
pub mod demo;
pub mod output;
pub mod registry;
pub mod routing;
pub mod scoring;
