//! In-process metric event log for simloop runs.
//!
//! This crate provides:
//!
//! - Scalar metric values and timestamped events
//! - The [`MetricSink`] seam the engine emits through
//! - An append-only [`MetricsCollector`] with a summarization pass
//!
//! # Design Principles
//!
//! - **Append-only** - Events are never mutated or pruned once recorded.
//! - **Recomputed summaries** - `summarize` always reflects the current log.

mod collector;
mod event;
mod sink;
mod value;

pub use collector::{MetricsCollector, MetricsSummary, DURATION_KEY};
pub use event::{unix_timestamp, MetricEvent};
pub use sink::{FnSink, MetricSink, NullSink};
pub use value::MetricValue;
