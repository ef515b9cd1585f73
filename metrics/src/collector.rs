//! Append-only metric event log.

use serde::{Deserialize, Serialize};

use crate::{MetricEvent, MetricSink, MetricValue};

/// Key under which a run reports its elapsed wall time.
pub const DURATION_KEY: &str = "duration_sec";

/// Process-local log of metric events in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    records: Vec<MetricEvent>,
}

/// Derived view over the log at the time `summarize` was called.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Last recorded `duration_sec` value, if any run completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_duration_sec: Option<f64>,
    pub total_events: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event stamped with the current time.
    pub fn emit(&mut self, key: &str, value: MetricValue) {
        self.records.push(MetricEvent::now(key, value));
    }

    /// Recorded events in emission order.
    pub fn records(&self) -> &[MetricEvent] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Scans the whole log once and returns a fresh summary.
    ///
    /// Non-numeric `duration_sec` values are skipped.
    pub fn summarize(&self) -> MetricsSummary {
        let mut last_run_duration_sec = None;
        for event in &self.records {
            if event.key == DURATION_KEY {
                if let Some(duration) = event.value.as_f64() {
                    last_run_duration_sec = Some(duration);
                }
            }
        }
        MetricsSummary {
            last_run_duration_sec,
            total_events: self.records.len() as u64,
        }
    }
}

impl MetricSink for MetricsCollector {
    fn emit(&mut self, key: &str, value: MetricValue) {
        Self::emit(self, key, value);
    }
}
