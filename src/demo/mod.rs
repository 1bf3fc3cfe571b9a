mod scenarios;

pub use scenarios::{demo_registry, scenarios, Scenario};

use anyhow::{bail, Result};

use crate::output;
use crate::routing::FacilityRanker;
use crate::scoring::RiskScorer;

/// Run one named scenario, or all of them, against the bundled registry.
pub fn run(
    key: Option<&str>,
    scorer: &RiskScorer,
    ranker: &FacilityRanker,
    use_colors: bool,
) -> Result<()> {
    let all = scenarios();

    let selected: Vec<&Scenario> = match key {
        Some(key) => {
            let found: Vec<_> = all.iter().filter(|s| s.key == key).collect();
            if found.is_empty() {
                let available: Vec<_> = all.iter().map(|s| s.key).collect();
                bail!(
                    "Scenario '{}' not found. Available: {}",
                    key,
                    available.join(", ")
                );
            }
            found
        }
        None => all.iter().collect(),
    };

    let registry = demo_registry();

    for scenario in selected {
        println!("=== {} ===", scenario.name);

        let result = scorer.assess(&scenario.assessment);
        println!("{}", output::format_risk_summary(&result, use_colors));

        if result.risk_level != scenario.expected_level {
            eprintln!(
                "Warning: expected {} for this scenario, got {}",
                scenario.expected_level.as_str(),
                result.risk_level.as_str()
            );
        }

        if let Some(origin) = scenario.assessment.location {
            let shortlist = ranker.rank(origin, &result.required_capabilities, &registry);
            println!("Facility shortlist:");
            println!("{}", output::format_facility_table(&shortlist, use_colors));
        }

        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_scenario_key_errors() {
        let err = run(
            Some("nonexistent"),
            &RiskScorer::default(),
            &FacilityRanker::default(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("anemia"));
    }
}
