use super::config::ScoringConfig;

/// Validate the scoring tables at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let bp = &config.blood_pressure;
    if !(bp.systolic.elevated < bp.systolic.high && bp.systolic.high < bp.systolic.severe) {
        errors.push("scoring.blood_pressure.systolic: thresholds must be strictly increasing (elevated < high < severe)".to_string());
    }
    if !(bp.diastolic.elevated < bp.diastolic.high && bp.diastolic.high < bp.diastolic.severe) {
        errors.push("scoring.blood_pressure.diastolic: thresholds must be strictly increasing (elevated < high < severe)".to_string());
    }
    if !(bp.tier_scores.elevated <= bp.tier_scores.high
        && bp.tier_scores.high <= bp.tier_scores.severe)
    {
        errors.push(
            "scoring.blood_pressure.tier_scores: scores must not decrease with severity"
                .to_string(),
        );
    }

    // The week bands must partition [0, inf): ascending exclusive bounds
    // with exactly one open-ended final band.
    let bands = &config.gestational_age.bands;
    if bands.is_empty() {
        errors.push("scoring.gestational_age.bands: at least one band required".to_string());
    } else {
        let mut prev_max = 0;
        for (i, band) in bands.iter().enumerate() {
            let is_last = i == bands.len() - 1;
            match band.max_weeks {
                Some(max) if is_last => {
                    errors.push(format!(
                        "scoring.gestational_age.bands[{}]: final band must be open-ended, got max_weeks {}",
                        i, max
                    ));
                }
                Some(max) if max <= prev_max => {
                    errors.push(format!(
                        "scoring.gestational_age.bands[{}]: max_weeks {} does not increase past {}",
                        i, max, prev_max
                    ));
                }
                Some(max) => prev_max = max,
                None if !is_last => {
                    errors.push(format!(
                        "scoring.gestational_age.bands[{}]: only the final band may be open-ended",
                        i
                    ));
                }
                None => {}
            }
        }
    }

    let hb = &config.labs.hemoglobin;
    if !(hb.severe_below < hb.moderate_below && hb.moderate_below < hb.mild_below) {
        errors.push(
            "scoring.labs.hemoglobin: thresholds must satisfy severe_below < moderate_below < mild_below"
                .to_string(),
        );
    }

    let levels = &config.levels;
    if !(levels.low_max < levels.medium_max && levels.medium_max < levels.high_max) {
        errors.push(
            "scoring.levels: bands must satisfy low_max < medium_max < high_max".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
