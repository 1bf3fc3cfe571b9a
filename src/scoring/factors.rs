use serde::{Serialize, Serializer};

/// A single contributing risk factor produced during scoring.
///
/// The category and severity are structured data attached at creation time;
/// capability inference keys off them rather than off the rendered
/// description, so wording changes can never alter routing decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub description: String,
    pub category: FactorCategory,
    pub severity: Option<Severity>,
}

impl RiskFactor {
    pub fn new(description: String, category: FactorCategory, severity: Option<Severity>) -> Self {
        Self {
            description,
            category,
            severity,
        }
    }

    pub fn is_severe(&self) -> bool {
        self.severity == Some(Severity::Severe)
    }
}

// The JSON interface exposes factors as plain description strings.
impl Serialize for RiskFactor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorCategory {
    Hypertension,
    Bleeding,
    GestationalAge(GaBucket),
    Symptom,
    Proteinuria,
    Anemia,
}

/// Gestational-age bucket; the five ranges are contiguous and exhaustive
/// over [0, ∞) weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaBucket {
    VeryEarly,
    Early,
    Preterm,
    Term,
    Overdue,
}

impl GaBucket {
    pub fn label(&self) -> &'static str {
        match self {
            GaBucket::VeryEarly => "very early",
            GaBucket::Early => "early",
            GaBucket::Preterm => "preterm",
            GaBucket::Term => "term",
            GaBucket::Overdue => "overdue",
        }
    }

    /// Buckets before term imply a possible preterm delivery at the
    /// receiving facility.
    pub fn is_preterm_risk(&self) -> bool {
        matches!(self, GaBucket::VeryEarly | GaBucket::Early | GaBucket::Preterm)
    }
}

/// Coarse clinical tier of a factor, where the source scale defines one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_serializes_as_description() {
        let factor = RiskFactor::new(
            "Moderate anemia: Hb 8.5 g/dL".to_string(),
            FactorCategory::Anemia,
            Some(Severity::Moderate),
        );
        let json = serde_json::to_string(&factor).unwrap();
        assert_eq!(json, "\"Moderate anemia: Hb 8.5 g/dL\"");
    }

    #[test]
    fn test_preterm_risk_buckets() {
        assert!(GaBucket::VeryEarly.is_preterm_risk());
        assert!(GaBucket::Early.is_preterm_risk());
        assert!(GaBucket::Preterm.is_preterm_risk());
        assert!(!GaBucket::Term.is_preterm_risk());
        assert!(!GaBucket::Overdue.is_preterm_risk());
    }
}
