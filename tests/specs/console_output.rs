//! Console output specs
//!
//! Verify the exact bytes the reference console sink produces when events
//! travel the whole path: post, redact, dispatch, print.

use crate::prelude::*;
use bolt_trace::{Tag, TestStatus, TraceBus, TraceEvent};
use similar_asserts::assert_eq;
use std::time::Duration;

#[test]
fn redacted_log_line_reaches_stdout_exactly() {
    let (console, out, err) = console(false);
    let bus = TraceBus::with_default_listener(console);
    bus.secrets().register("<redacted>", "secret123");

    bus.post(TraceEvent::LogMessage {
        text: "token=secret123".to_string(),
        newline: true,
    });

    assert_eq!(out.contents(), "token=<redacted>\n");
    assert_eq!(err.contents(), "");
}

#[test]
fn scope_open_and_close_print_in_order() {
    let (console, out, _err) = console(false);
    let bus = TraceBus::with_default_listener(console);

    bus.post(TraceEvent::OpenTag {
        tag: Tag::Task("build".to_string()),
        description: "compiling".to_string(),
    });
    bus.post(TraceEvent::CloseTag {
        tag: Tag::Task("build".to_string()),
        elapsed: Duration::from_secs(5),
    });

    assert_eq!(
        out.contents(),
        "Starting task 'build': compiling\nFinished 'build' in 5s\n"
    );
}

#[test]
fn important_and_error_messages_follow_the_redirect_flag() {
    let (console, out, err) = console(true);
    let bus = TraceBus::with_default_listener(console);

    bus.post(TraceEvent::ImportantMessage {
        text: "heads up".to_string(),
    });
    bus.post(TraceEvent::ErrorMessage {
        text: "boom".to_string(),
    });

    assert_eq!(out.contents(), "");
    assert_eq!(err.contents(), "heads up\nboom\n");
}

#[test]
fn ci_only_events_produce_no_console_output() {
    let (console, out, err) = console(false);
    let bus = TraceBus::with_default_listener(console);

    bus.post(TraceEvent::BuildNumber {
        number: "1.2.42".to_string(),
    });
    bus.post(TraceEvent::TestStatus {
        test: "t1".to_string(),
        status: TestStatus::Failed {
            message: "assert failed".to_string(),
            details: "stack".to_string(),
            expected_actual: Some(("1".to_string(), "2".to_string())),
        },
    });
    bus.post(TraceEvent::TestOutput {
        test: "t1".to_string(),
        out: "stdout".to_string(),
        err: "stderr".to_string(),
    });

    assert_eq!(out.contents(), "");
    assert_eq!(err.contents(), "");
}
