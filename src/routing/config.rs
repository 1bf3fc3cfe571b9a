use serde::{Deserialize, Serialize};

use crate::registry::FacilityTier;

/// Facility ranking configuration.
///
/// Like the scoring tables, these weights are immutable data injected into
/// the ranker at construction. The defaults reproduce the source protocol:
/// capability completeness dominates (up to 50 points), then proximity
/// (up to 25), availability (up to 15), and a tier bonus (up to 10).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Points for a facility offering every required capability
    pub capability_points: f64,

    /// Proximity points: `max(0, distance_points - distance_km)`, so any
    /// facility at or beyond this many km gets nothing
    pub distance_points: f64,

    /// Points each for available beds, staff on duty, and ob-gyn on call
    pub availability_points: f64,

    pub tier_bonus: TierBonus,
    pub travel: TravelProfile,

    /// Shortlist length after sorting
    pub shortlist_size: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            capability_points: 50.0,
            distance_points: 25.0,
            availability_points: 5.0,
            tier_bonus: TierBonus::default(),
            travel: TravelProfile::default(),
            shortlist_size: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TierBonus {
    pub primary: f64,
    pub secondary: f64,
    pub tertiary: f64,
}

impl Default for TierBonus {
    fn default() -> Self {
        Self {
            primary: 3.0,
            secondary: 7.0,
            tertiary: 10.0,
        }
    }
}

impl TierBonus {
    pub fn for_tier(&self, tier: FacilityTier) -> f64 {
        match tier {
            FacilityTier::Primary => self.primary,
            FacilityTier::Secondary => self.secondary,
            FacilityTier::Tertiary => self.tertiary,
        }
    }
}

/// Ground-transport assumptions per destination tier. Speeds account for
/// road quality on each route class; preparation time covers ambulance
/// dispatch and patient handover.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TravelProfile {
    pub primary_speed_kmh: f64,
    pub secondary_speed_kmh: f64,
    pub tertiary_speed_kmh: f64,
    pub primary_prep_minutes: f64,
    pub other_prep_minutes: f64,
}

impl Default for TravelProfile {
    fn default() -> Self {
        Self {
            primary_speed_kmh: 35.0,
            secondary_speed_kmh: 45.0,
            tertiary_speed_kmh: 50.0,
            primary_prep_minutes: 10.0,
            other_prep_minutes: 15.0,
        }
    }
}

impl TravelProfile {
    pub fn speed_kmh(&self, tier: FacilityTier) -> f64 {
        match tier {
            FacilityTier::Primary => self.primary_speed_kmh,
            FacilityTier::Secondary => self.secondary_speed_kmh,
            FacilityTier::Tertiary => self.tertiary_speed_kmh,
        }
    }

    /// Travel time plus preparation time, in minutes.
    pub fn eta_minutes(&self, distance_km: f64, tier: FacilityTier) -> f64 {
        let prep = match tier {
            FacilityTier::Primary => self.primary_prep_minutes,
            _ => self.other_prep_minutes,
        };
        (distance_km / self.speed_kmh(tier)) * 60.0 + prep
    }
}

/// Validate the ranking tables at startup, collecting every error.
pub fn validate_ranking(config: &RankerConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, value) in [
        ("ranking.capability_points", config.capability_points),
        ("ranking.distance_points", config.distance_points),
        ("ranking.availability_points", config.availability_points),
    ] {
        if value < 0.0 {
            errors.push(format!("{}: must be non-negative", name));
        }
    }

    for (name, speed) in [
        ("ranking.travel.primary_speed_kmh", config.travel.primary_speed_kmh),
        ("ranking.travel.secondary_speed_kmh", config.travel.secondary_speed_kmh),
        ("ranking.travel.tertiary_speed_kmh", config.travel.tertiary_speed_kmh),
    ] {
        if speed <= 0.0 {
            errors.push(format!("{}: must be positive", name));
        }
    }

    for (name, prep) in [
        (
            "ranking.travel.primary_prep_minutes",
            config.travel.primary_prep_minutes,
        ),
        (
            "ranking.travel.other_prep_minutes",
            config.travel.other_prep_minutes,
        ),
    ] {
        if prep < 0.0 {
            errors.push(format!("{}: must be non-negative", name));
        }
    }

    if config.shortlist_size == 0 {
        errors.push("ranking.shortlist_size: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranker_config() {
        let config = RankerConfig::default();
        assert_eq!(config.capability_points, 50.0);
        assert_eq!(config.shortlist_size, 3);
        assert_eq!(config.tier_bonus.for_tier(FacilityTier::Tertiary), 10.0);
    }

    #[test]
    fn test_eta_includes_preparation_time() {
        let travel = TravelProfile::default();
        // 35 km to a primary facility at 35 km/h: 60 min drive + 10 min prep
        let eta = travel.eta_minutes(35.0, FacilityTier::Primary);
        assert!((eta - 70.0).abs() < 1e-9);
        // 45 km to a secondary facility at 45 km/h: 60 min drive + 15 min prep
        let eta = travel.eta_minutes(45.0, FacilityTier::Secondary);
        assert!((eta - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_ranking_config_fills_defaults() {
        let yaml = r#"
shortlist_size: 5
"#;
        let config: RankerConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.shortlist_size, 5);
        assert_eq!(config.distance_points, 25.0);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut config = RankerConfig::default();
        config.travel.secondary_speed_kmh = 0.0;
        let errors = validate_ranking(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("secondary_speed_kmh")));
    }

    #[test]
    fn test_negative_prep_time_rejected() {
        let mut config = RankerConfig::default();
        config.travel.primary_prep_minutes = -10.0;
        config.travel.other_prep_minutes = -5.0;
        let errors = validate_ranking(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("primary_prep_minutes")));
        assert!(errors.iter().any(|e| e.contains("other_prep_minutes")));
    }

    #[test]
    fn test_zero_prep_time_allowed() {
        let mut config = RankerConfig::default();
        config.travel.primary_prep_minutes = 0.0;
        assert!(validate_ranking(&config).is_ok());
    }

    #[test]
    fn test_default_ranking_config_is_valid() {
        assert!(validate_ranking(&RankerConfig::default()).is_ok());
    }
}
