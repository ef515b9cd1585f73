//! Timestamped metric events.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::MetricValue;

/// A single `(key, value, timestamp)` record emitted during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEvent {
    pub key: String,
    pub value: MetricValue,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

impl MetricEvent {
    /// Creates an event stamped with the current wall-clock time.
    pub fn now(key: impl Into<String>, value: MetricValue) -> Self {
        Self {
            key: key.into(),
            value,
            timestamp: unix_timestamp(),
        }
    }
}

/// Current wall-clock time in seconds since the Unix epoch.
///
/// A clock set before the epoch reads as `0.0`.
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}
