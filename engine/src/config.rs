//! Run parameters.

use std::time::Duration;

/// Step count used when neither the CLI nor a config file provides one.
pub const DEFAULT_STEPS: u32 = 10;

/// Parameters for one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of loop iterations.
    pub steps: u32,
    /// Pause after each step. Zero disables sleeping.
    pub step_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_delay: Duration::ZERO,
        }
    }
}

impl SimulationConfig {
    pub const fn new(steps: u32, step_delay: Duration) -> Self {
        Self { steps, step_delay }
    }

    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub const fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.steps, 10);
        assert_eq!(config.step_delay, Duration::ZERO);
    }

    #[test]
    fn builders() {
        let config = SimulationConfig::default()
            .with_steps(3)
            .with_step_delay(Duration::from_millis(5));
        assert_eq!(
            config,
            SimulationConfig::new(3, Duration::from_millis(5))
        );
    }
}
