use metrics::{MetricSink, MetricValue, MetricsCollector, DURATION_KEY};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = MetricValue> {
    prop_oneof![
        any::<bool>().prop_map(MetricValue::Bool),
        any::<i64>().prop_map(MetricValue::Int),
        (-1.0e9f64..1.0e9).prop_map(MetricValue::Float),
        "[a-z]{0,8}".prop_map(MetricValue::Text),
    ]
}

fn emit_all<S: MetricSink>(mut sink: S, events: &[(String, MetricValue)]) {
    for (key, value) in events {
        sink.emit(key, value.clone());
    }
}

proptest! {
    #[test]
    fn total_events_matches_emit_calls(
        events in prop::collection::vec(("[a-z_]{1,12}", arb_value()), 0..64)
    ) {
        let mut collector = MetricsCollector::new();
        emit_all(&mut collector, &events);

        let summary = collector.summarize();
        prop_assert_eq!(summary.total_events, events.len() as u64);
        prop_assert_eq!(collector.len(), events.len());

        for (record, (key, value)) in collector.records().iter().zip(&events) {
            prop_assert_eq!(&record.key, key);
            prop_assert_eq!(&record.value, value);
        }
    }

    #[test]
    fn last_duration_wins(durations in prop::collection::vec(0.0f64..1.0e6, 1..16)) {
        let mut collector = MetricsCollector::new();
        for duration in &durations {
            collector.emit("noise", MetricValue::Int(0));
            collector.emit(DURATION_KEY, MetricValue::Float(*duration));
        }
        let summary = collector.summarize();
        prop_assert_eq!(summary.last_run_duration_sec, durations.last().copied());
        prop_assert_eq!(summary.total_events, durations.len() as u64 * 2);
    }
}
