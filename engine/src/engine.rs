//! The step loop.

use std::thread;
use std::time::Instant;

use metrics::{unix_timestamp, MetricSink, MetricValue, DURATION_KEY};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{SimulationConfig, StopHandle};

pub const RUN_STARTED_KEY: &str = "run_started";
pub const STEP_KEY: &str = "step";
pub const COMPUTED_VALUE_KEY: &str = "computed_value";
pub const RUN_COMPLETED_KEY: &str = "run_completed";

/// Outcome of one [`SimulationEngine::run`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Configured step count, reported even when the run stopped early.
    pub steps: u32,
    /// Steps that actually executed.
    pub completed_steps: u32,
    /// Elapsed wall time in seconds.
    pub duration_sec: f64,
}

impl RunResult {
    pub const fn stopped_early(&self) -> bool {
        self.completed_steps < self.steps
    }
}

/// Runs a bounded loop and reports through a [`MetricSink`].
///
/// Pass `&mut collector` as the sink to keep ownership of the log outside the
/// engine.
#[derive(Debug)]
pub struct SimulationEngine<S> {
    config: SimulationConfig,
    sink: S,
    stop: StopHandle,
}

impl<S: MetricSink> SimulationEngine<S> {
    pub fn new(config: SimulationConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            stop: StopHandle::new(),
        }
    }

    /// Replaces the stop flag, e.g. with one already captured by the sink.
    #[must_use]
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Requests that the loop exit at the next step boundary.
    ///
    /// The flag is cleared when `run` starts, so only requests made while a
    /// run is in progress have an effect.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Executes the loop to completion (or until stopped) on the calling thread.
    pub fn run(&mut self) -> RunResult {
        self.stop.reset();
        let steps = self.config.steps;
        let delay = self.config.step_delay;

        let started = Instant::now();
        let start_ts = unix_timestamp();
        info!(steps, delay_sec = delay.as_secs_f64(), "run started");
        self.sink.emit(RUN_STARTED_KEY, MetricValue::Float(start_ts));

        let mut completed_steps = 0u32;
        for step in 0..steps {
            if self.stop.is_stop_requested() {
                info!(step, steps, "run stopped early");
                break;
            }
            let computed_value = i64::from(step) * 2;
            debug!(step, computed_value, "step");
            self.sink.emit(STEP_KEY, MetricValue::from(step));
            self.sink
                .emit(COMPUTED_VALUE_KEY, MetricValue::Int(computed_value));
            completed_steps += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        let duration_sec = started.elapsed().as_secs_f64();
        let end_ts = unix_timestamp();
        self.sink.emit(RUN_COMPLETED_KEY, MetricValue::Float(end_ts));
        self.sink.emit(DURATION_KEY, MetricValue::Float(duration_sec));
        info!(steps, completed_steps, duration_sec, "run completed");

        RunResult {
            steps,
            completed_steps,
            duration_sec,
        }
    }
}
