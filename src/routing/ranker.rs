use serde::Serialize;

use crate::registry::Facility;
use crate::scoring::Capability;

use super::config::RankerConfig;
use super::geo::{self, Coordinates};

/// A facility that survived capability filtering, with its derived routing
/// metrics. Computed per ranking call, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedFacility {
    #[serde(flatten)]
    pub facility: Facility,
    /// Great-circle distance, rounded to one decimal
    pub distance_km: f64,
    /// Ground-transport estimate including preparation time
    pub eta_minutes: u32,
    pub match_score: f64,
}

/// Filters a facility registry snapshot by required capabilities and ranks
/// survivors by a weighted composite of capability completeness, proximity,
/// availability, and tier.
///
/// Pure over its inputs: identical calls return identical shortlists, and
/// ties preserve the registry's original order (stable sort).
#[derive(Debug, Clone, Default)]
pub struct FacilityRanker {
    config: RankerConfig,
}

impl FacilityRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank eligible facilities, best first, truncated to the shortlist
    /// size. An empty result is a valid outcome, not an error; the caller
    /// decides the fallback policy (relax capabilities, widen distance).
    pub fn rank(
        &self,
        origin: Coordinates,
        required: &[Capability],
        facilities: &[Facility],
    ) -> Vec<RankedFacility> {
        let mut ranked: Vec<RankedFacility> = facilities
            .iter()
            .filter(|facility| facility.offers_all(required))
            .map(|facility| {
                let distance = geo::distance_km(origin, facility.location);
                let eta = self.config.travel.eta_minutes(distance, facility.tier);
                RankedFacility {
                    match_score: self.match_score(facility, required, distance),
                    distance_km: (distance * 10.0).round() / 10.0,
                    eta_minutes: eta.round() as u32,
                    facility: facility.clone(),
                }
            })
            .collect();

        // Stable sort keeps registry order on equal scores
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.config.shortlist_size);
        ranked
    }

    fn match_score(&self, facility: &Facility, required: &[Capability], distance_km: f64) -> f64 {
        let cfg = &self.config;

        let completeness = if required.is_empty() {
            1.0
        } else {
            let matched = required
                .iter()
                .filter(|cap| facility.capabilities.iter().any(|tag| tag == cap.tag()))
                .count();
            matched as f64 / required.len() as f64
        };
        let mut score = completeness * cfg.capability_points;

        // Closer is better, floored at zero
        score += (cfg.distance_points - distance_km).max(0.0);

        let capacity = &facility.capacity;
        if capacity.available_beds > 0 {
            score += cfg.availability_points;
        }
        if capacity.staff_on_duty {
            score += cfg.availability_points;
        }
        if capacity.obgyn_available {
            score += cfg.availability_points;
        }

        score + cfg.tier_bonus.for_tier(facility.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Capacity, FacilityTier};

    fn origin() -> Coordinates {
        Coordinates {
            lat: 27.0238,
            lng: 74.2179,
        }
    }

    fn facility(
        id: &str,
        tier: FacilityTier,
        location: Coordinates,
        capabilities: &[&str],
        capacity: Capacity,
    ) -> Facility {
        Facility {
            id: id.to_string(),
            name: format!("Facility {}", id),
            tier,
            location,
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            capacity,
        }
    }

    fn full_capacity() -> Capacity {
        Capacity {
            total_beds: 100,
            available_beds: 10,
            staff_on_duty: true,
            obgyn_available: true,
        }
    }

    fn ranker() -> FacilityRanker {
        FacilityRanker::default()
    }

    #[test]
    fn test_filter_excludes_missing_capability() {
        let facilities = vec![
            facility(
                "a",
                FacilityTier::Secondary,
                origin(),
                &["maternity_ward"],
                full_capacity(),
            ),
            facility(
                "b",
                FacilityTier::Secondary,
                origin(),
                &["maternity_ward", "obgyn_availability"],
                full_capacity(),
            ),
        ];
        let required = [Capability::MaternityWard, Capability::ObgynAvailability];
        let ranked = ranker().rank(origin(), &required, &facilities);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].facility.id, "b");
    }

    #[test]
    fn test_empty_requirements_pass_everything() {
        let facilities = vec![
            facility("a", FacilityTier::Primary, origin(), &[], full_capacity()),
            facility("b", FacilityTier::Secondary, origin(), &[], full_capacity()),
        ];
        let ranked = ranker().rank(origin(), &[], &facilities);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_no_eligible_facility_is_empty_not_error() {
        let facilities = vec![facility(
            "a",
            FacilityTier::Primary,
            origin(),
            &["maternity_ward"],
            full_capacity(),
        )];
        let ranked = ranker().rank(origin(), &[Capability::Nicu], &facilities);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_distance_score_floors_at_zero() {
        // Two identical facilities, one ~170 km away, one ~450 km away.
        // Both are past the 25 km cutoff, so their scores are equal.
        let near_far = vec![
            facility(
                "far",
                FacilityTier::Secondary,
                Coordinates {
                    lat: 27.0238,
                    lng: 76.0,
                },
                &[],
                full_capacity(),
            ),
            facility(
                "farther",
                FacilityTier::Secondary,
                Coordinates {
                    lat: 27.0238,
                    lng: 79.0,
                },
                &[],
                full_capacity(),
            ),
        ];
        let ranked = ranker().rank(origin(), &[], &near_far);
        assert!(ranked[0].distance_km >= 25.0);
        assert!((ranked[0].match_score - ranked[1].match_score).abs() < 1e-9);
    }

    #[test]
    fn test_ties_preserve_registry_order() {
        let identical = |id: &str| {
            facility(
                id,
                FacilityTier::Secondary,
                origin(),
                &[],
                full_capacity(),
            )
        };
        let facilities = vec![identical("first"), identical("second"), identical("third")];
        let ranked = ranker().rank(origin(), &[], &facilities);
        let ids: Vec<_> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let facilities = vec![
            facility("a", FacilityTier::Primary, origin(), &[], full_capacity()),
            facility(
                "b",
                FacilityTier::Tertiary,
                Coordinates {
                    lat: 26.9124,
                    lng: 75.7873,
                },
                &[],
                full_capacity(),
            ),
        ];
        let r = ranker();
        let first = r.rank(origin(), &[], &facilities);
        let second = r.rank(origin(), &[], &facilities);
        let ids = |ranked: &[RankedFacility]| {
            ranked
                .iter()
                .map(|f| (f.facility.id.clone(), f.match_score))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_shortlist_truncated_to_three() {
        let facilities: Vec<Facility> = (0..6)
            .map(|i| {
                facility(
                    &format!("f{}", i),
                    FacilityTier::Primary,
                    origin(),
                    &[],
                    full_capacity(),
                )
            })
            .collect();
        let ranked = ranker().rank(origin(), &[], &facilities);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_tier_bonus_breaks_even_match() {
        // Same spot, same capacity: tertiary (+10) beats secondary (+7)
        // beats primary (+3)
        let facilities = vec![
            facility("phc", FacilityTier::Primary, origin(), &[], full_capacity()),
            facility("mc", FacilityTier::Tertiary, origin(), &[], full_capacity()),
            facility("dh", FacilityTier::Secondary, origin(), &[], full_capacity()),
        ];
        let ranked = ranker().rank(origin(), &[], &facilities);
        let ids: Vec<_> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, vec!["mc", "dh", "phc"]);
    }

    #[test]
    fn test_availability_points_five_each() {
        let empty = Capacity {
            total_beds: 100,
            available_beds: 0,
            staff_on_duty: false,
            obgyn_available: false,
        };
        let facilities = vec![
            facility("stocked", FacilityTier::Primary, origin(), &[], full_capacity()),
            facility("empty", FacilityTier::Primary, origin(), &[], empty),
        ];
        let ranked = ranker().rank(origin(), &[], &facilities);
        assert_eq!(ranked[0].facility.id, "stocked");
        assert!((ranked[0].match_score - ranked[1].match_score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_match_score_composition_at_origin() {
        // Zero distance, full availability, secondary tier, no requirements:
        // 1.0*50 + 25 + 15 + 7 = 97
        let facilities = vec![facility(
            "dh",
            FacilityTier::Secondary,
            origin(),
            &[],
            full_capacity(),
        )];
        let ranked = ranker().rank(origin(), &[], &facilities);
        assert!((ranked[0].match_score - 97.0).abs() < 1e-9);
        assert_eq!(ranked[0].distance_km, 0.0);
        assert_eq!(ranked[0].eta_minutes, 15); // prep time only
    }

    #[test]
    fn test_ranked_facility_serialization_shape() {
        let facilities = vec![facility(
            "dh",
            FacilityTier::Secondary,
            origin(),
            &["maternity_ward"],
            full_capacity(),
        )];
        let ranked = ranker().rank(origin(), &[], &facilities);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        // Facility fields are flattened next to the derived metrics
        assert_eq!(json["id"], "dh");
        assert_eq!(json["tier"], "secondary");
        assert!(json["distanceKm"].is_number());
        assert!(json["etaMinutes"].is_u64());
        assert!(json["matchScore"].is_number());
    }
}
