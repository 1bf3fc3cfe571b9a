use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use maternity_triage::assessment::Assessment;
use maternity_triage::routing::{config::validate_ranking, FacilityRanker};
use maternity_triage::scoring::{validate_scoring, RiskScorer};
use maternity_triage::{config, demo, output, registry};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an assessment and, with a registry, rank referral facilities
    Assess {
        /// Path to an assessment JSON file
        #[arg(short, long)]
        assessment: PathBuf,

        /// Path to a facility registry JSON file
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Emit machine-readable JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Run built-in walkthrough scenarios against the bundled registry
    Demo {
        /// Scenario key (all scenarios if omitted)
        scenario: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "maternity-triage")]
#[command(about = "Maternal health risk triage and facility routing", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/maternity-triage/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config (built-in clinical tables when absent)
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring and ranking tables at startup
    let mut table_errors = Vec::new();
    if let Err(errors) = validate_scoring(&config.scoring) {
        table_errors.extend(errors);
    }
    if let Err(errors) = validate_ranking(&config.ranking) {
        table_errors.extend(errors);
    }
    if !table_errors.is_empty() {
        eprintln!("Config table errors:");
        for error in table_errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Tables loaded: {} symptom tags, shortlist size {}",
            config.scoring.symptoms.len(),
            config.ranking.shortlist_size
        );
    }

    let scorer = RiskScorer::new(config.scoring);
    let ranker = FacilityRanker::new(config.ranking);
    let use_colors = output::should_use_colors();

    let outcome = match cli.command {
        Commands::Assess {
            assessment,
            registry,
            json,
        } => run_assess(
            &scorer,
            &ranker,
            &assessment,
            registry.as_deref(),
            json,
            use_colors,
            cli.verbose,
        ),
        Commands::Demo { scenario } => demo::run(scenario.as_deref(), &scorer, &ranker, use_colors),
    };

    match outcome {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn run_assess(
    scorer: &RiskScorer,
    ranker: &FacilityRanker,
    assessment_path: &std::path::Path,
    registry_path: Option<&std::path::Path>,
    json: bool,
    use_colors: bool,
    verbose: bool,
) -> Result<()> {
    let content = fs::read_to_string(assessment_path)
        .with_context(|| format!("Failed to read assessment at {}", assessment_path.display()))?;
    let assessment: Assessment = serde_json::from_str(&content)
        .with_context(|| format!("Invalid assessment JSON in {}", assessment_path.display()))?;

    let result = scorer.assess(&assessment);

    if verbose {
        let b = &result.breakdown;
        eprintln!(
            "Sub-scores: bp={} bleeding={} ga={} symptoms={} labs={}",
            b.blood_pressure, b.bleeding, b.gestational_age, b.symptoms, b.labs
        );
    }

    let shortlist = match (registry_path, assessment.location) {
        (Some(path), Some(origin)) => {
            let facilities = registry::load_registry(path)?;
            if verbose {
                eprintln!("Loaded {} facilities from registry", facilities.len());
            }
            Some(ranker.rank(origin, &result.required_capabilities, &facilities))
        }
        (Some(_), None) => {
            eprintln!("Assessment has no location; skipping facility ranking");
            None
        }
        (None, _) => None,
    };

    if json {
        let mut value = serde_json::to_value(&result)?;
        if let Some(ref shortlist) = shortlist {
            value["facilities"] = serde_json::to_value(shortlist)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output::format_risk_summary(&result, use_colors));
        if let Some(ref shortlist) = shortlist {
            println!("Facility shortlist:");
            println!("{}", output::format_facility_table(shortlist, use_colors));
        }
    }

    Ok(())
}
