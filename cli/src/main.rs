//! simloop command-line runner.
//!
//! ```bash
//! # Ten steps, no delay, artifacts under out_runs/run_10_steps/
//! simloop
//!
//! # Options from a file, with CLI values as fallback
//! simloop --config scenario.yaml --steps 50 --step-delay 0.1 --out runs
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::{load_config, FileConfig};
use engine::{SimulationEngine, DEFAULT_STEPS};
use metrics::MetricsCollector;
use report::{generate_report, run_dir, RunSummary};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simloop", version, about = "Run a simulation scenario")]
struct Cli {
    /// Path to a config file (YAML or JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of steps if the config file does not set one.
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: u32,
    /// Delay after each step in seconds, if the config file does not set one.
    #[arg(long, default_value_t = 0.0)]
    step_delay: f64,
    /// Output directory for reports.
    #[arg(long, default_value = "out_runs")]
    out: PathBuf,
}

struct Outcome {
    summary: RunSummary,
    run_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,simloop=info,engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = run(&cli)?;
    let summary_json = outcome
        .summary
        .to_json_line()
        .context("serialize summary")?;
    println!(
        "Run complete. Summary: {summary_json}. Artifacts in {}",
        outcome.run_dir.display()
    );
    Ok(())
}

fn run(cli: &Cli) -> Result<Outcome> {
    let file = match &cli.config {
        Some(path) => {
            let file = load_config(path)
                .with_context(|| format!("load config {}", path.display()))?;
            for key in file.unknown_keys() {
                warn!(key, path = %path.display(), "ignoring unknown config key");
            }
            file
        }
        None => FileConfig::default(),
    };
    let sim_config = file
        .resolve(cli.steps, cli.step_delay)
        .context("resolve simulation config")?;

    let mut collector = MetricsCollector::new();
    let result = SimulationEngine::new(sim_config, &mut collector).run();
    let summary = RunSummary::new(result, collector.summarize());

    let dir = run_dir(&cli.out, summary.steps());
    generate_report(&dir, &summary, collector.records())
        .with_context(|| format!("write report to {}", dir.display()))?;
    info!(dir = %dir.display(), total_events = summary.metrics.total_events, "run finished");

    Ok(Outcome {
        summary,
        run_dir: dir,
    })
}
