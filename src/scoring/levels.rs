use serde::{Deserialize, Serialize};

use super::config::LevelBands;

/// Discrete risk level derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Emergency,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Emergency => "EMERGENCY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Priority,
    Urgent,
    Immediate,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Priority => "priority",
            Urgency::Urgent => "urgent",
            Urgency::Immediate => "immediate",
        }
    }
}

/// Map a total score onto the ordered band partition.
///
/// Bands are checked lowest first with inclusive upper bounds; any score
/// above the HIGH band is EMERGENCY, which also serves as the fail-safe
/// for a misconfigured partition.
pub fn classify(score: u32, bands: &LevelBands) -> RiskLevel {
    if score <= bands.low_max {
        RiskLevel::Low
    } else if score <= bands.medium_max {
        RiskLevel::Medium
    } else if score <= bands.high_max {
        RiskLevel::High
    } else {
        RiskLevel::Emergency
    }
}

pub fn urgency(level: RiskLevel) -> Urgency {
    match level {
        RiskLevel::Low => Urgency::Routine,
        RiskLevel::Medium => Urgency::Priority,
        RiskLevel::High => Urgency::Urgent,
        RiskLevel::Emergency => Urgency::Immediate,
    }
}

/// Human-readable window within which care should be sought.
pub fn timeframe(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "1-2 weeks",
        RiskLevel::Medium => "2-3 days",
        RiskLevel::High => "< 24 hours",
        RiskLevel::Emergency => "< 1 hour",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let bands = LevelBands::default();
        assert_eq!(classify(0, &bands), RiskLevel::Low);
        assert_eq!(classify(5, &bands), RiskLevel::Low);
        assert_eq!(classify(6, &bands), RiskLevel::Medium);
        assert_eq!(classify(12, &bands), RiskLevel::Medium);
        assert_eq!(classify(13, &bands), RiskLevel::High);
        assert_eq!(classify(25, &bands), RiskLevel::High);
        assert_eq!(classify(26, &bands), RiskLevel::Emergency);
    }

    #[test]
    fn test_partition_is_total() {
        // Exactly one level applies for every score in a wide range
        let bands = LevelBands::default();
        let mut last = RiskLevel::Low;
        for score in 0..=1000 {
            let level = classify(score, &bands);
            assert!(level >= last, "levels must be monotone in score");
            last = level;
        }
        assert_eq!(last, RiskLevel::Emergency);
    }

    #[test]
    fn test_urgency_and_timeframe_lookups() {
        assert_eq!(urgency(RiskLevel::Low), Urgency::Routine);
        assert_eq!(urgency(RiskLevel::Medium), Urgency::Priority);
        assert_eq!(urgency(RiskLevel::High), Urgency::Urgent);
        assert_eq!(urgency(RiskLevel::Emergency), Urgency::Immediate);
        assert_eq!(timeframe(RiskLevel::Low), "1-2 weeks");
        assert_eq!(timeframe(RiskLevel::Emergency), "< 1 hour");
    }

    #[test]
    fn test_level_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Emergency).unwrap(),
            "\"EMERGENCY\""
        );
        assert_eq!(serde_json::to_string(&Urgency::Urgent).unwrap(), "\"urgent\"");
    }
}
