use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::routing::RankedFacility;
use crate::scoring::{RiskLevel, RiskResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a risk result as a multi-line human-readable summary.
pub fn format_risk_summary(result: &RiskResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!(
        "Risk level: {} (score {})  urgency: {}, care within {}",
        result.risk_level.as_str(),
        result.risk_score,
        result.urgency.as_str(),
        result.timeframe
    );
    if use_colors {
        lines.push(colorize_by_level(&header, result.risk_level));
    } else {
        lines.push(header);
    }

    if !result.risk_factors.is_empty() {
        lines.push("Risk factors:".to_string());
        for factor in &result.risk_factors {
            lines.push(format!("  - {}", factor.description));
        }
    }

    if !result.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        for rec in &result.recommendations {
            lines.push(format!("  - {}", rec));
        }
    }

    if !result.required_capabilities.is_empty() {
        let tags: Vec<_> = result
            .required_capabilities
            .iter()
            .map(|c| c.tag())
            .collect();
        lines.push(format!("Required capabilities: {}", tags.join(", ")));
    }

    lines.push("Next steps:".to_string());
    for step in &result.next_steps {
        lines.push(format!("  - {}", step));
    }

    lines.join("\n")
}

/// Format a ranked facility shortlist as one line per facility.
/// Format: "{rank}. {name} | {tier} | {distance} km | ETA {eta} min | score {score}"
pub fn format_facility_table(facilities: &[RankedFacility], use_colors: bool) -> String {
    if facilities.is_empty() {
        return "No eligible facility found. Relax capability requirements or widen the search."
            .to_string();
    }

    let name_width = name_column_width();

    facilities
        .iter()
        .enumerate()
        .map(|(i, ranked)| {
            let name = truncate_name(&ranked.facility.name, name_width);
            if use_colors {
                format!(
                    "{}. {} | {} | {} km | ETA {} min | score {:.1}",
                    i + 1,
                    name.bold(),
                    ranked.facility.tier.as_str().cyan(),
                    ranked.distance_km,
                    ranked.eta_minutes,
                    ranked.match_score
                )
            } else {
                format!(
                    "{}. {} | {} | {} km | ETA {} min | score {:.1}",
                    i + 1,
                    name,
                    ranked.facility.tier.as_str(),
                    ranked.distance_km,
                    ranked.eta_minutes,
                    ranked.match_score
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Leave room for the metric columns; pipes get unlimited width.
fn name_column_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).saturating_sub(45).max(20),
        None => usize::MAX,
    }
}

/// Truncate a facility name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else {
        let truncated: String = chars[..max_width.saturating_sub(1)].iter().collect();
        format!("{}…", truncated)
    }
}

fn colorize_by_level(text: &str, level: RiskLevel) -> String {
    match level {
        RiskLevel::Low => text.green().to_string(),
        RiskLevel::Medium => text.yellow().to_string(),
        RiskLevel::High => text.red().to_string(),
        RiskLevel::Emergency => text.red().bold().to_string(),
    }
}
