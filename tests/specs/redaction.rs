//! Redaction specs
//!
//! Secrets registered on the bus rewrite event text before any listener
//! sees it.

use crate::prelude::*;
use bolt_trace::{TestStatus, TraceBus, TraceEvent};
use std::sync::Arc;

fn collecting_bus() -> (TraceBus, Arc<Collector>) {
    let collector = Arc::new(Collector::default());
    let bus = TraceBus::with_default_listener(collector.clone());
    (bus, collector)
}

#[test]
fn secret_registered_mid_build_applies_to_later_posts() {
    let (bus, collector) = collecting_bus();

    bus.post(log("key=API_KEY"));
    bus.secrets().register("***", "API_KEY");
    bus.post(log("key=API_KEY"));

    let texts: Vec<String> = collector
        .events()
        .iter()
        .filter_map(|e| e.message().map(str::to_string))
        .collect();
    assert_eq!(texts, vec!["key=API_KEY", "key=***"]);
}

#[test]
fn latest_registration_for_a_value_wins() {
    let (bus, collector) = collecting_bus();

    bus.secrets().register("first", "token");
    bus.secrets().register("second", "token");
    bus.post(log("token"));

    assert_eq!(collector.events()[0].message(), Some("second"));
}

#[test]
fn captured_test_streams_are_redacted() {
    let (bus, collector) = collecting_bus();
    bus.secrets().register("<redacted>", "secret123");

    bus.post(TraceEvent::TestOutput {
        test: "t1".to_string(),
        out: "stdout secret123".to_string(),
        err: "secret123 stderr".to_string(),
    });
    bus.post(TraceEvent::TestStatus {
        test: "t1".to_string(),
        status: TestStatus::Ignored {
            reason: "needs secret123".to_string(),
        },
    });

    assert_eq!(
        collector.events(),
        vec![
            TraceEvent::TestOutput {
                test: "t1".to_string(),
                out: "stdout <redacted>".to_string(),
                err: "<redacted> stderr".to_string(),
            },
            TraceEvent::TestStatus {
                test: "t1".to_string(),
                status: TestStatus::Ignored {
                    reason: "needs <redacted>".to_string(),
                },
            },
        ]
    );
}

#[test]
fn build_numbers_and_import_paths_are_not_redacted() {
    let (bus, collector) = collecting_bus();
    bus.secrets().register("<redacted>", "1.2.42");

    bus.post(TraceEvent::BuildNumber {
        number: "1.2.42".to_string(),
    });

    assert_eq!(
        collector.events()[0],
        TraceEvent::BuildNumber {
            number: "1.2.42".to_string(),
        }
    );
}
