use serde::{Deserialize, Serialize};

use super::factors::{FactorCategory, RiskFactor, Severity};
use super::levels::RiskLevel;

/// Facility capability a referral may require. Serialized as the snake_case
/// tag used in facility registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    EmergencyDepartment,
    ObgynSpecialist,
    OperatingTheater,
    MaternityWard,
    ObgynAvailability,
    BloodBank,
    EmergencySurgery,
    Nicu,
    PediatricCare,
    BloodTransfusion,
}

impl Capability {
    pub fn tag(&self) -> &'static str {
        match self {
            Capability::EmergencyDepartment => "emergency_department",
            Capability::ObgynSpecialist => "obgyn_specialist",
            Capability::OperatingTheater => "operating_theater",
            Capability::MaternityWard => "maternity_ward",
            Capability::ObgynAvailability => "obgyn_availability",
            Capability::BloodBank => "blood_bank",
            Capability::EmergencySurgery => "emergency_surgery",
            Capability::Nicu => "nicu",
            Capability::PediatricCare => "pediatric_care",
            Capability::BloodTransfusion => "blood_transfusion",
        }
    }
}

/// Derive the capabilities the receiving facility must offer.
///
/// A base set is fixed per risk level; further capabilities are layered on
/// from the structured category and severity of each factor. The result is
/// deduplicated, preserving first-occurrence order.
pub fn required_capabilities(level: RiskLevel, factors: &[RiskFactor]) -> Vec<Capability> {
    let mut caps = Vec::new();

    match level {
        RiskLevel::High | RiskLevel::Emergency => {
            push_unique(&mut caps, Capability::EmergencyDepartment);
            push_unique(&mut caps, Capability::ObgynSpecialist);
            push_unique(&mut caps, Capability::OperatingTheater);
        }
        RiskLevel::Medium => {
            push_unique(&mut caps, Capability::MaternityWard);
            push_unique(&mut caps, Capability::ObgynAvailability);
        }
        RiskLevel::Low => {}
    }

    let any_bleeding = factors
        .iter()
        .any(|f| f.category == FactorCategory::Bleeding);
    let any_severe = factors.iter().any(|f| f.is_severe());
    if any_bleeding || any_severe {
        push_unique(&mut caps, Capability::BloodBank);
        push_unique(&mut caps, Capability::EmergencySurgery);
    }

    let preterm_risk = factors.iter().any(|f| match f.category {
        FactorCategory::GestationalAge(bucket) => bucket.is_preterm_risk(),
        _ => false,
    });
    if preterm_risk {
        push_unique(&mut caps, Capability::Nicu);
        push_unique(&mut caps, Capability::PediatricCare);
    }

    let severe_anemia = factors
        .iter()
        .any(|f| f.category == FactorCategory::Anemia && f.severity == Some(Severity::Severe));
    if severe_anemia {
        push_unique(&mut caps, Capability::BloodTransfusion);
    }

    caps
}

fn push_unique(caps: &mut Vec<Capability>, cap: Capability) {
    if !caps.contains(&cap) {
        caps.push(cap);
    }
}
