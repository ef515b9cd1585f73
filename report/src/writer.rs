//! Writing run artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use metrics::MetricEvent;
use tracing::info;

use crate::{ReportError, ReportResult, RunSummary};

pub const SUMMARY_FILE: &str = "run_summary.json";
pub const EVENTS_FILE: &str = "events.csv";
pub const EVENTS_HEADER: [&str; 3] = ["key", "value", "timestamp"];

/// Files produced by [`generate_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub events: PathBuf,
}

/// Directory for a run's artifacts: `<out>/run_<steps>_steps`.
pub fn run_dir(out: impl AsRef<Path>, steps: u32) -> PathBuf {
    out.as_ref().join(format!("run_{steps}_steps"))
}

/// Writes the summary JSON and event CSV into `output_dir`, creating it
/// (and its parents) if needed.
pub fn generate_report(
    output_dir: impl AsRef<Path>,
    summary: &RunSummary,
    events: &[MetricEvent],
) -> ReportResult<ReportPaths> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|source| ReportError::io(output_dir, source))?;

    let paths = ReportPaths {
        summary: output_dir.join(SUMMARY_FILE),
        events: output_dir.join(EVENTS_FILE),
    };
    write_summary_json(&paths.summary, summary)?;
    write_events_csv(&paths.events, events)?;

    info!(
        dir = %output_dir.display(),
        events = events.len(),
        "report written"
    );
    Ok(paths)
}

fn write_summary_json(path: &Path, summary: &RunSummary) -> ReportResult<()> {
    let contents = serde_json::to_string_pretty(summary).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| ReportError::io(path, source))
}

fn write_events_csv(path: &Path, events: &[MetricEvent]) -> ReportResult<()> {
    let csv_err = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(EVENTS_HEADER).map_err(csv_err)?;
    for event in events {
        let value = event.value.to_string();
        let timestamp = event.timestamp.to_string();
        writer
            .write_record([event.key.as_str(), value.as_str(), timestamp.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ReportError::io(path, source))
}
