use std::time::Duration;

use engine::{SimulationConfig, SimulationEngine, COMPUTED_VALUE_KEY, DURATION_KEY, STEP_KEY};
use metrics::{MetricValue, MetricsCollector};
use proptest::prelude::*;

fn run(steps: u32) -> (engine::RunResult, MetricsCollector) {
    let mut collector = MetricsCollector::new();
    let result =
        SimulationEngine::new(SimulationConfig::new(steps, Duration::ZERO), &mut collector).run();
    (result, collector)
}

proptest! {
    #[test]
    fn step_and_computed_counts_match_config(steps in 0u32..200) {
        let (result, collector) = run(steps);
        prop_assert_eq!(result.steps, steps);
        prop_assert_eq!(result.completed_steps, steps);

        let count = |key: &str| collector.records().iter().filter(|e| e.key == key).count();
        prop_assert_eq!(count(STEP_KEY), steps as usize);
        prop_assert_eq!(count(COMPUTED_VALUE_KEY), steps as usize);
        prop_assert_eq!(collector.len(), 2 * steps as usize + 3);
    }

    #[test]
    fn computed_value_is_twice_the_step(steps in 1u32..100) {
        let (_, collector) = run(steps);
        let records = collector.records();
        for pair in records[1..records.len() - 2].chunks(2) {
            prop_assert_eq!(&pair[0].key, STEP_KEY);
            prop_assert_eq!(&pair[1].key, COMPUTED_VALUE_KEY);
            let step = pair[0].value.as_i64().unwrap();
            prop_assert_eq!(&pair[1].value, &MetricValue::Int(step * 2));
        }
    }

    #[test]
    fn duration_is_non_negative_and_recorded(steps in 0u32..50) {
        let (result, collector) = run(steps);
        prop_assert!(result.duration_sec >= 0.0);
        prop_assert!(collector.records().iter().any(|e| e.key == DURATION_KEY));
        let summary = collector.summarize();
        prop_assert_eq!(summary.total_events, collector.len() as u64);
        prop_assert_eq!(summary.last_run_duration_sec, Some(result.duration_sec));
    }
}

#[test]
fn consecutive_runs_share_one_log() {
    let mut collector = MetricsCollector::new();
    let mut engine = SimulationEngine::new(SimulationConfig::default().with_steps(1), &mut collector);
    let first = engine.run();
    let second = engine.run();
    drop(engine);

    assert_eq!(collector.len(), 10);
    assert_eq!(
        collector.summarize().last_run_duration_sec,
        Some(second.duration_sec)
    );
    assert!(first.duration_sec >= 0.0);
}
