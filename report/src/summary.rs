//! The merged per-run summary.

use std::fs;
use std::path::Path;

use engine::RunResult;
use metrics::MetricsSummary;
use serde::{Deserialize, Serialize};

use crate::{ReportError, ReportResult};

/// Engine result merged with the collector summary.
///
/// Serializes as a single flat mapping:
/// `steps`, `completed_steps`, `duration_sec`, `last_run_duration_sec`
/// (omitted when absent) and `total_events`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub result: RunResult,
    #[serde(flatten)]
    pub metrics: MetricsSummary,
}

impl RunSummary {
    pub const fn new(result: RunResult, metrics: MetricsSummary) -> Self {
        Self { result, metrics }
    }

    pub const fn steps(&self) -> u32 {
        self.result.steps
    }

    /// Compact single-line JSON, used for console output.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Parses a `run_summary.json` written by [`crate::generate_report`].
pub fn read_summary(path: impl AsRef<Path>) -> ReportResult<RunSummary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReportError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}
