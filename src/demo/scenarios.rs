use crate::assessment::{Assessment, BleedingLevel, BloodPressure, LabResults, Proteinuria};
use crate::registry::{Capacity, Facility, FacilityTier};
use crate::routing::geo::Coordinates;
use crate::scoring::RiskLevel;

/// A canned end-to-end walkthrough: one field assessment plus the risk
/// level the default tables should produce for it.
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub expected_level: RiskLevel,
    pub assessment: Assessment,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "anemia",
            name: "Early detection: moderate anemia at 32 weeks",
            expected_level: RiskLevel::Medium,
            assessment: Assessment {
                gestational_age: Some(32),
                blood_pressure: Some(BloodPressure {
                    systolic: 118,
                    diastolic: 78,
                }),
                bleeding: Some(BleedingLevel::None),
                symptoms: vec!["dizziness".to_string(), "back_pain".to_string()],
                lab_results: Some(LabResults {
                    proteinuria: Some(Proteinuria::Negative),
                    hemoglobin: Some(8.5),
                }),
                location: Some(Coordinates {
                    lat: 27.0238,
                    lng: 74.2179,
                }),
            },
        },
        Scenario {
            key: "preeclampsia",
            name: "Pre-eclampsia emergency at 36 weeks",
            expected_level: RiskLevel::Emergency,
            assessment: Assessment {
                gestational_age: Some(36),
                blood_pressure: Some(BloodPressure {
                    systolic: 165,
                    diastolic: 105,
                }),
                bleeding: Some(BleedingLevel::None),
                symptoms: vec![
                    "severe_headache".to_string(),
                    "vision_changes".to_string(),
                    "swelling".to_string(),
                ],
                lab_results: Some(LabResults {
                    proteinuria: Some(Proteinuria::Moderate),
                    hemoglobin: Some(11.2),
                }),
                location: Some(Coordinates {
                    lat: 19.7515,
                    lng: 75.7139,
                }),
            },
        },
        Scenario {
            key: "obstructed_labor",
            name: "Obstructed labor emergency at term",
            expected_level: RiskLevel::Emergency,
            assessment: Assessment {
                gestational_age: Some(39),
                blood_pressure: Some(BloodPressure {
                    systolic: 145,
                    diastolic: 95,
                }),
                bleeding: Some(BleedingLevel::Moderate),
                symptoms: vec![
                    "abdominal_pain".to_string(),
                    "contractions".to_string(),
                    "reduced_fetal_movement".to_string(),
                ],
                lab_results: Some(LabResults {
                    proteinuria: Some(Proteinuria::Trace),
                    hemoglobin: Some(9.8),
                }),
                location: Some(Coordinates {
                    lat: 26.8467,
                    lng: 80.9462,
                }),
            },
        },
    ]
}

/// A small bundled registry, in production sourced from government facility
/// APIs. One facility per tier.
pub fn demo_registry() -> Vec<Facility> {
    vec![
        Facility {
            id: "fac_001".to_string(),
            name: "Primary Health Centre - Rajgadh".to_string(),
            tier: FacilityTier::Primary,
            location: Coordinates {
                lat: 27.0238,
                lng: 74.2179,
            },
            capabilities: vec![
                "maternity_ward".to_string(),
                "basic_emergency".to_string(),
                "ambulance".to_string(),
            ],
            capacity: Capacity {
                total_beds: 15,
                available_beds: 2,
                staff_on_duty: true,
                obgyn_available: false,
            },
        },
        Facility {
            id: "fac_002".to_string(),
            name: "District Hospital - Alwar".to_string(),
            tier: FacilityTier::Secondary,
            location: Coordinates {
                lat: 27.5678,
                lng: 76.6252,
            },
            capabilities: vec![
                "maternity_ward".to_string(),
                "emergency_department".to_string(),
                "obgyn_specialist".to_string(),
                "operating_theater".to_string(),
                "blood_bank".to_string(),
                "ambulance".to_string(),
                "icu".to_string(),
                "nicu".to_string(),
            ],
            capacity: Capacity {
                total_beds: 150,
                available_beds: 12,
                staff_on_duty: true,
                obgyn_available: true,
            },
        },
        Facility {
            id: "fac_003".to_string(),
            name: "SMS Medical College & Hospital - Jaipur".to_string(),
            tier: FacilityTier::Tertiary,
            location: Coordinates {
                lat: 26.9124,
                lng: 75.7873,
            },
            capabilities: vec![
                "maternity_ward".to_string(),
                "emergency_department".to_string(),
                "obgyn_specialist".to_string(),
                "operating_theater".to_string(),
                "blood_bank".to_string(),
                "ambulance".to_string(),
                "icu".to_string(),
                "nicu".to_string(),
                "emergency_surgery".to_string(),
                "blood_transfusion".to_string(),
                "pediatric_care".to_string(),
                "high_risk_pregnancy".to_string(),
                "fetal_medicine".to_string(),
            ],
            capacity: Capacity {
                total_beds: 1200,
                available_beds: 45,
                staff_on_duty: true,
                obgyn_available: true,
            },
        },
    ]
}
