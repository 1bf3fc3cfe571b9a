use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::factors::GaBucket;

/// Main risk-scoring configuration.
///
/// Holds every weight and threshold used by the scorer as immutable data,
/// so tests (and deployments with different clinical protocols) can inject
/// alternate tables without touching global state. The defaults reproduce
/// the MaternitySafe clinical protocol.
///
/// Example YAML override:
/// ```yaml
/// scoring:
///   bleeding:
///     weight: 5
///   levels:
///     low_max: 5
///     medium_max: 12
///     high_max: 25
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub blood_pressure: BloodPressureConfig,
    pub bleeding: BleedingConfig,
    pub gestational_age: GestationalAgeConfig,

    /// Known symptom tags with their individual weight and base score.
    /// Symptoms not in this table are ignored.
    pub symptoms: BTreeMap<String, SymptomWeight>,

    pub labs: LabConfig,
    pub levels: LevelBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            blood_pressure: BloodPressureConfig::default(),
            bleeding: BleedingConfig::default(),
            gestational_age: GestationalAgeConfig::default(),
            symptoms: default_symptoms(),
            labs: LabConfig::default(),
            levels: LevelBands::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BloodPressureConfig {
    pub weight: u32,
    /// mmHg cutoffs; a reading at or above a cutoff reaches that tier
    pub systolic: BpThresholds,
    pub diastolic: BpThresholds,
    /// Base score for the single highest tier reached by either reading
    pub tier_scores: BpTierScores,
}

impl Default for BloodPressureConfig {
    fn default() -> Self {
        Self {
            weight: 3,
            systolic: BpThresholds {
                elevated: 130,
                high: 140,
                severe: 180,
            },
            diastolic: BpThresholds {
                elevated: 85,
                high: 90,
                severe: 110,
            },
            tier_scores: BpTierScores {
                elevated: 2,
                high: 5,
                severe: 8,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BpThresholds {
    pub elevated: u32,
    pub high: u32,
    pub severe: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BpTierScores {
    pub elevated: u32,
    pub high: u32,
    pub severe: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BleedingConfig {
    /// Multiplier applied to the ordinal bleeding level (none=0 .. severe=5)
    pub weight: u32,
}

impl Default for BleedingConfig {
    fn default() -> Self {
        Self { weight: 5 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GestationalAgeConfig {
    pub weight: u32,
    /// Contiguous week bands in ascending order; `max_weeks` is an
    /// exclusive upper bound, `None` on the final open-ended band.
    pub bands: Vec<GaBand>,
}

impl Default for GestationalAgeConfig {
    fn default() -> Self {
        Self {
            weight: 2,
            bands: vec![
                GaBand {
                    bucket: GaBucket::VeryEarly,
                    max_weeks: Some(20),
                    score: 3,
                },
                GaBand {
                    bucket: GaBucket::Early,
                    max_weeks: Some(28),
                    score: 2,
                },
                GaBand {
                    bucket: GaBucket::Preterm,
                    max_weeks: Some(37),
                    score: 1,
                },
                GaBand {
                    bucket: GaBucket::Term,
                    max_weeks: Some(42),
                    score: 0,
                },
                GaBand {
                    bucket: GaBucket::Overdue,
                    max_weeks: None,
                    score: 2,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GaBand {
    pub bucket: GaBucket,
    #[serde(default)]
    pub max_weeks: Option<u32>,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SymptomWeight {
    pub weight: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Multiplier applied to the proteinuria ordinal (negative=0 .. severe=4)
    pub proteinuria_weight: u32,
    pub hemoglobin: HemoglobinConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            proteinuria_weight: 2,
            hemoglobin: HemoglobinConfig::default(),
        }
    }
}

/// Anemia threshold ladder in g/dL, checked from most severe down.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HemoglobinConfig {
    pub weight: u32,
    pub severe_below: f64,
    pub moderate_below: f64,
    pub mild_below: f64,
    pub severe_score: u32,
    pub moderate_score: u32,
    pub mild_score: u32,
}

impl Default for HemoglobinConfig {
    fn default() -> Self {
        Self {
            weight: 2,
            severe_below: 7.0,
            moderate_below: 9.0,
            mild_below: 11.0,
            severe_score: 6,
            moderate_score: 3,
            mild_score: 1,
        }
    }
}

/// Upper bounds (inclusive) of the LOW/MEDIUM/HIGH score bands; everything
/// above `high_max` is EMERGENCY.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LevelBands {
    pub low_max: u32,
    pub medium_max: u32,
    pub high_max: u32,
}

impl Default for LevelBands {
    fn default() -> Self {
        Self {
            low_max: 5,
            medium_max: 12,
            high_max: 25,
        }
    }
}

fn default_symptoms() -> BTreeMap<String, SymptomWeight> {
    [
        ("severe_headache", 2, 3),
        ("vision_changes", 2, 3),
        ("severe_nausea", 1, 2),
        ("dizziness", 1, 1),
        ("abdominal_pain", 2, 3),
        ("back_pain", 1, 1),
        ("swelling", 1, 2),
        ("reduced_fetal_movement", 3, 4),
        ("contractions", 2, 3),
        ("fever", 2, 2),
    ]
    .into_iter()
    .map(|(tag, weight, score)| (tag.to_string(), SymptomWeight { weight, score }))
    .collect()
}
