use serde::{Deserialize, Serialize};

use crate::routing::geo::Coordinates;

/// A maternal health assessment as captured by a community health worker.
///
/// Every field is optional from the scorer's perspective: an absent field
/// contributes zero to the risk score and produces no risk factor. Malformed
/// values (e.g. a non-numeric hemoglobin) are rejected here, at the
/// deserialization boundary, before they can reach the scorer.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Assessment {
    /// Gestational age in completed weeks
    #[serde(default)]
    pub gestational_age: Option<u32>,

    #[serde(default)]
    pub blood_pressure: Option<BloodPressure>,

    #[serde(default)]
    pub bleeding: Option<BleedingLevel>,

    /// Symptom tags drawn from a fixed vocabulary; unknown tags are ignored
    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub lab_results: Option<LabResults>,

    /// Where the patient is right now; needed only for facility ranking
    #[serde(default)]
    pub location: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

/// Ordinal bleeding severity as reported in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BleedingLevel {
    None,
    Spotting,
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl BleedingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BleedingLevel::None => "none",
            BleedingLevel::Spotting => "spotting",
            BleedingLevel::Light => "light",
            BleedingLevel::Moderate => "moderate",
            BleedingLevel::Heavy => "heavy",
            BleedingLevel::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LabResults {
    #[serde(default)]
    pub proteinuria: Option<Proteinuria>,

    /// Hemoglobin in g/dL
    #[serde(default)]
    pub hemoglobin: Option<f64>,
}

/// Urine protein on an ordinal severity scale (preeclampsia indicator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proteinuria {
    Negative,
    Trace,
    Mild,
    Moderate,
    Severe,
}

impl Proteinuria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proteinuria::Negative => "negative",
            Proteinuria::Trace => "trace",
            Proteinuria::Mild => "mild",
            Proteinuria::Moderate => "moderate",
            Proteinuria::Severe => "severe",
        }
    }
}
