//! Bounded simulation step loop.
//!
//! The engine owns a [`SimulationConfig`], runs `steps` iterations of a
//! placeholder computation and reports everything it does through a
//! [`metrics::MetricSink`].
//!
//! # Event sequence
//!
//! A run emits, in order:
//!
//! - `run_started` with the start timestamp
//! - `step` and `computed_value` once per executed step
//! - `run_completed` with the end timestamp
//! - `duration_sec` with the elapsed wall time

mod config;
mod engine;
mod stop;

pub use config::{SimulationConfig, DEFAULT_STEPS};
pub use engine::{
    RunResult, SimulationEngine, COMPUTED_VALUE_KEY, RUN_COMPLETED_KEY, RUN_STARTED_KEY, STEP_KEY,
};
pub use metrics::DURATION_KEY;
pub use stop::StopHandle;
