use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assessment::{Assessment, BleedingLevel, BloodPressure, LabResults, Proteinuria};

use super::capabilities::{required_capabilities, Capability};
use super::config::ScoringConfig;
use super::factors::{FactorCategory, RiskFactor, Severity};
use super::levels::{self, RiskLevel, Urgency};

/// Per-component sub-scores. The total score is exactly the sum of these
/// five independently computed parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub blood_pressure: u32,
    pub bleeding: u32,
    pub gestational_age: u32,
    pub symptoms: u32,
    pub labs: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.blood_pressure + self.bleeding + self.gestational_age + self.symptoms + self.labs
    }
}

/// Complete outcome of one risk assessment. Immutable once computed; the
/// serialized form is the engine's JSON interface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
    pub required_capabilities: Vec<Capability>,
    pub urgency: Urgency,
    pub timeframe: &'static str,
    pub next_steps: Vec<&'static str>,
    pub clinical_notes: ClinicalNotes,
    #[serde(skip)]
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalNotes {
    pub summary: String,
    pub risk_factors: String,
    pub assessed_by: String,
    pub timestamp: DateTime<Utc>,
    pub follow_up_required: bool,
}

/// Multi-factor weighted risk scorer.
///
/// Holds its scoring tables as immutable configuration; scoring itself is a
/// pure function of the assessment, so any number of assessments may be
/// scored concurrently from shared references.
///
/// Missing optional fields contribute zero score and emit no factor. The
/// source protocol never distinguished "field absent" from "present but
/// zero-risk", and neither does this scorer.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the full pipeline: score, classify, resolve capabilities, and
    /// compose next steps and clinical notes, timestamped now.
    pub fn assess(&self, assessment: &Assessment) -> RiskResult {
        self.assess_at(assessment, Utc::now())
    }

    pub fn assess_at(&self, assessment: &Assessment, now: DateTime<Utc>) -> RiskResult {
        let (breakdown, factors, recommendations) = self.score(assessment);
        let total = breakdown.total();

        let level = levels::classify(total, &self.config.levels);
        let capabilities = required_capabilities(level, &factors);

        let clinical_notes = ClinicalNotes {
            summary: format!(
                "Risk assessment completed for {} week pregnancy",
                assessment
                    .gestational_age
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "unknown".to_string())
            ),
            risk_factors: factors
                .iter()
                .map(|f| f.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            assessed_by: format!(
                "{} risk engine v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            timestamp: now,
            follow_up_required: !factors.is_empty(),
        };

        RiskResult {
            risk_score: total,
            risk_level: level,
            risk_factors: factors,
            recommendations,
            required_capabilities: capabilities,
            urgency: levels::urgency(level),
            timeframe: levels::timeframe(level),
            next_steps: next_steps(level),
            clinical_notes,
            breakdown,
        }
    }

    /// Compute the five sub-scores and their factors/recommendations.
    pub fn score(&self, assessment: &Assessment) -> (ScoreBreakdown, Vec<RiskFactor>, Vec<String>) {
        let mut breakdown = ScoreBreakdown::default();
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        if let Some(bp) = assessment.blood_pressure {
            if let Some((score, factor, rec)) = self.assess_blood_pressure(bp) {
                breakdown.blood_pressure = score;
                factors.push(factor);
                recommendations.push(rec.to_string());
            }
        }

        if let Some(bleeding) = assessment.bleeding {
            if let Some((score, factor, rec)) = self.assess_bleeding(bleeding) {
                breakdown.bleeding = score;
                factors.push(factor);
                recommendations.push(rec.to_string());
            }
        }

        if let Some(weeks) = assessment.gestational_age {
            let (score, factor) = self.assess_gestational_age(weeks);
            breakdown.gestational_age = score;
            if let Some(factor) = factor {
                factors.push(factor);
            }
        }

        let (symptom_score, symptom_factors, symptom_recs) =
            self.assess_symptoms(&assessment.symptoms);
        breakdown.symptoms = symptom_score;
        factors.extend(symptom_factors);
        recommendations.extend(symptom_recs);

        if let Some(labs) = assessment.lab_results {
            let (lab_score, lab_factors, lab_recs) = self.assess_labs(&labs);
            breakdown.labs = lab_score;
            factors.extend(lab_factors);
            recommendations.extend(lab_recs);
        }

        (breakdown, factors, recommendations)
    }

    /// Only the single highest tier reached by either reading applies.
    fn assess_blood_pressure(
        &self,
        bp: BloodPressure,
    ) -> Option<(u32, RiskFactor, &'static str)> {
        let cfg = &self.config.blood_pressure;

        let (base, tier_name, severity) =
            if bp.systolic >= cfg.systolic.severe || bp.diastolic >= cfg.diastolic.severe {
                (cfg.tier_scores.severe, "severe", Severity::Severe)
            } else if bp.systolic >= cfg.systolic.high || bp.diastolic >= cfg.diastolic.high {
                (cfg.tier_scores.high, "high", Severity::Moderate)
            } else if bp.systolic >= cfg.systolic.elevated || bp.diastolic >= cfg.diastolic.elevated
            {
                (cfg.tier_scores.elevated, "elevated", Severity::Mild)
            } else {
                return None;
            };

        let factor = RiskFactor::new(
            format!(
                "Hypertension ({}): {}/{} mmHg",
                tier_name, bp.systolic, bp.diastolic
            ),
            FactorCategory::Hypertension,
            Some(severity),
        );

        let recommendation = match severity {
            Severity::Mild => "Monitor BP closely, lifestyle modifications",
            Severity::Moderate => "Immediate medical evaluation required",
            Severity::Severe => "EMERGENCY - immediate hospitalization required",
        };

        Some((base * cfg.weight, factor, recommendation))
    }

    fn assess_bleeding(&self, bleeding: BleedingLevel) -> Option<(u32, RiskFactor, &'static str)> {
        if bleeding == BleedingLevel::None {
            return None;
        }

        let base = bleeding as u32; // ordinal: none=0 .. severe=5
        let severity = match bleeding {
            BleedingLevel::Heavy | BleedingLevel::Severe => Severity::Severe,
            BleedingLevel::Moderate => Severity::Moderate,
            _ => Severity::Mild,
        };

        let factor = RiskFactor::new(
            format!("Bleeding: {}", bleeding.as_str()),
            FactorCategory::Bleeding,
            Some(severity),
        );

        let recommendation = match bleeding {
            BleedingLevel::Heavy | BleedingLevel::Severe => {
                "EMERGENCY - immediate medical attention required"
            }
            BleedingLevel::Moderate => "Urgent medical evaluation within 24 hours",
            BleedingLevel::Light => "Medical consultation recommended within 48 hours",
            _ => "Monitor and report if worsens",
        };

        Some((base * self.config.bleeding.weight, factor, recommendation))
    }

    /// First matching week band wins; bands are contiguous and exhaustive.
    /// A zero-score band (term) contributes no factor.
    fn assess_gestational_age(&self, weeks: u32) -> (u32, Option<RiskFactor>) {
        let cfg = &self.config.gestational_age;

        for band in &cfg.bands {
            let in_band = match band.max_weeks {
                Some(max) => weeks < max,
                None => true,
            };
            if in_band {
                let score = band.score * cfg.weight;
                let factor = (score > 0).then(|| {
                    RiskFactor::new(
                        format!(
                            "Gestational age: {} weeks ({})",
                            weeks,
                            band.bucket.label()
                        ),
                        FactorCategory::GestationalAge(band.bucket),
                        None,
                    )
                });
                return (score, factor);
            }
        }

        (0, None)
    }

    /// Each known symptom is additive; unknown tags are ignored silently
    /// (forward compatibility with newer field apps).
    fn assess_symptoms(&self, symptoms: &[String]) -> (u32, Vec<RiskFactor>, Vec<String>) {
        let mut total = 0;
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        for tag in symptoms {
            if let Some(entry) = self.config.symptoms.get(tag) {
                total += entry.weight * entry.score;
                factors.push(RiskFactor::new(
                    tag.replace('_', " "),
                    FactorCategory::Symptom,
                    None,
                ));
                if let Some(rec) = symptom_recommendation(tag) {
                    recommendations.push(rec.to_string());
                }
            }
        }

        (total, factors, recommendations)
    }

    fn assess_labs(&self, labs: &LabResults) -> (u32, Vec<RiskFactor>, Vec<String>) {
        let cfg = &self.config.labs;
        let mut total = 0;
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        if let Some(proteinuria) = labs.proteinuria {
            let ordinal = proteinuria as u32; // negative=0 .. severe=4
            if ordinal > 0 {
                total += ordinal * cfg.proteinuria_weight;
                let severity = match proteinuria {
                    Proteinuria::Severe => Severity::Severe,
                    Proteinuria::Moderate => Severity::Moderate,
                    _ => Severity::Mild,
                };
                factors.push(RiskFactor::new(
                    format!("Proteinuria: {}", proteinuria.as_str()),
                    FactorCategory::Proteinuria,
                    Some(severity),
                ));
                if proteinuria >= Proteinuria::Moderate {
                    recommendations.push("Monitor for preeclampsia signs".to_string());
                }
            }
        }

        if let Some(hb) = labs.hemoglobin {
            let hbc = &cfg.hemoglobin;
            let tier = if hb < hbc.severe_below {
                Some((hbc.severe_score, "Severe", Severity::Severe))
            } else if hb < hbc.moderate_below {
                Some((hbc.moderate_score, "Moderate", Severity::Moderate))
            } else if hb < hbc.mild_below {
                Some((hbc.mild_score, "Mild", Severity::Mild))
            } else {
                None
            };

            if let Some((base, label, severity)) = tier {
                total += base * hbc.weight;
                factors.push(RiskFactor::new(
                    format!("{} anemia: Hb {} g/dL", label, hb),
                    FactorCategory::Anemia,
                    Some(severity),
                ));
                match severity {
                    Severity::Severe => recommendations
                        .push("Immediate iron supplementation and monitoring".to_string()),
                    Severity::Moderate => {
                        recommendations.push("Iron supplementation required".to_string())
                    }
                    Severity::Mild => {}
                }
            }
        }

        (total, factors, recommendations)
    }
}

fn next_steps(level: RiskLevel) -> Vec<&'static str> {
    match level {
        RiskLevel::Low => vec![
            "Continue routine prenatal care",
            "Schedule next appointment as planned",
            "Provide health education materials",
        ],
        RiskLevel::Medium => vec![
            "Increase monitoring frequency",
            "Consider referral to specialist",
            "Provide detailed care instructions",
            "Schedule follow-up within 1-2 weeks",
        ],
        RiskLevel::High => vec![
            "URGENT: Refer to hospital immediately",
            "Arrange transportation",
            "Notify receiving hospital",
            "Provide referral documentation",
        ],
        RiskLevel::Emergency => vec![
            "EMERGENCY: Call ambulance immediately",
            "Contact emergency services",
            "Prepare for immediate transfer",
            "Continuous monitoring during transport",
        ],
    }
}

fn symptom_recommendation(tag: &str) -> Option<&'static str> {
    match tag {
        "severe_headache" => Some("Evaluate for preeclampsia"),
        "vision_changes" => Some("Immediate ophthalmologic assessment"),
        "reduced_fetal_movement" => Some("Fetal monitoring required"),
        "abdominal_pain" => Some("Rule out complications"),
        "contractions" => Some("Assess for preterm labor"),
        _ => None,
    }
}
