use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use truco_bench::config::BenchConfig;
use truco_bench::decide::{DecisionReport, load_snapshot};
use truco_bench::logging::init_logging;
use truco_bench::sample::SampleRunner;
use truco_bot::policy::HeuristicPolicy;
use truco_core::AppInfo;
use truco_core::model::oracle::TrucoRules;

/// Decision harness for the tiered Truco bot.
#[derive(Debug, Parser)]
#[command(
    name = "truco-bench",
    author,
    version,
    about = "Runs bot decisions on snapshots and seeded deals"
)]
struct Cli {
    /// Path to a YAML configuration file (defaults apply when omitted).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run every decision on one JSON snapshot and print the answers as JSON.
    Decide {
        #[arg(short, long, value_name = "FILE")]
        snapshot: PathBuf,
    },
    /// Deal seeded hands and write a summary of first-trick decisions.
    Sample {
        /// Override the run identifier (substitutes {run_id} templates).
        #[arg(long, value_name = "RUN_ID")]
        run_id: Option<String>,

        /// Override the number of hands to deal.
        #[arg(long, value_name = "HANDS")]
        hands: Option<usize>,

        /// Override the RNG seed for deal generation.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Exit after validating the configuration.
        #[arg(long)]
        validate_only: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<BenchConfig> {
    match path {
        Some(path) => BenchConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(BenchConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Decide { snapshot } => {
            let intel = load_snapshot(&snapshot)?;
            let outputs = config.resolved_outputs();
            let _logging_guard = init_logging(&config.logging, &outputs.output_dir())?;
            let policy =
                HeuristicPolicy::new(TrucoRules, config.params, config.logging.bot_features());
            let report = DecisionReport::evaluate(&policy, &intel);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Sample {
            run_id,
            hands,
            seed,
            validate_only,
        } => {
            if let Some(run_id) = run_id {
                config.run_id = run_id;
            }
            if let Some(hands) = hands {
                config.sample.hands = hands;
            }
            if let Some(seed) = seed {
                config.sample.seed = Some(seed);
            }
            config.validate()?;

            let outputs = config.resolved_outputs();
            println!(
                "Loaded configuration '{}' for {} {} ({} hands, seed {})",
                config.run_id,
                AppInfo::name(),
                AppInfo::version(),
                config.sample.hands,
                config.sample.seed.unwrap_or(0)
            );

            if validate_only {
                println!("Validation-only mode: sampling skipped.");
                return Ok(());
            }

            let logging_guard = init_logging(&config.logging, &outputs.output_dir())?;
            let summary = SampleRunner::new(config, outputs).run()?;
            println!(
                "Sampled {} hands: tiers {:?}, {} opening accepts, {} escalations",
                summary.hands,
                summary.tier_histogram,
                summary.opening_accepted,
                summary.escalations
            );
            println!("Summary: {}", summary.summary_path.display());
            if let Some(guard) = logging_guard.as_ref() {
                println!("Telemetry log: {}", guard.telemetry_path.display());
            }
        }
    }

    Ok(())
}
