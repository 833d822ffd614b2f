// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace events emitted by build steps, compilation, and test runs

use crate::import::ImportKind;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Outcome reported for a single test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// Test was skipped, with the reason
    Ignored { reason: String },
    /// Test failed, with an optional expected/actual pair
    Failed {
        message: String,
        details: String,
        expected_actual: Option<(String, String)>,
    },
}

/// Events that flow from build producers to registered listeners
///
/// The variant set is closed: every listener dispatches over it, so adding
/// a variant is a compile-visible change at every dispatch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Externally produced artifact data for CI integrations to pick up
    ImportData { kind: ImportKind, path: PathBuf },

    /// Announces the build identifier
    BuildNumber { number: String },

    /// High-visibility message; always terminates with a line break
    ImportantMessage { text: String },

    /// Error message; same routing and newline rule as `ImportantMessage`
    ErrorMessage { text: String },

    /// Normal informational output; newline behavior explicit per call
    LogMessage { text: String, newline: bool },

    /// Verbose diagnostic output; visually distinguished from `LogMessage`
    TraceMessage { text: String, newline: bool },

    /// Start of a named scope (task, target, compilation unit, test, ...)
    OpenTag { tag: Tag, description: String },

    /// End of a previously opened scope and its duration
    CloseTag { tag: Tag, elapsed: Duration },

    /// Status of a finished test case
    TestStatus { test: String, status: TestStatus },

    /// Captured output of a test run
    TestOutput { test: String, out: String, err: String },
}

impl TraceEvent {
    /// Event name for diagnostics
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            TraceEvent::ImportData { .. } => "build:import",
            TraceEvent::BuildNumber { .. } => "build:number",
            TraceEvent::ImportantMessage { .. } => "message:important",
            TraceEvent::ErrorMessage { .. } => "message:error",
            TraceEvent::LogMessage { .. } => "message:log",
            TraceEvent::TraceMessage { .. } => "message:trace",
            TraceEvent::OpenTag { .. } => "scope:open",
            TraceEvent::CloseTag { .. } => "scope:close",
            TraceEvent::TestStatus { .. } => "test:status",
            TraceEvent::TestOutput { .. } => "test:output",
        }
    }

    /// The textual message, for the four message-carrying variants
    pub fn message(&self) -> Option<&str> {
        match self {
            TraceEvent::ImportantMessage { text }
            | TraceEvent::ErrorMessage { text }
            | TraceEvent::LogMessage { text, .. }
            | TraceEvent::TraceMessage { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Whether output terminates with a line break, where the concept applies
    pub fn newline(&self) -> Option<bool> {
        match self {
            TraceEvent::ImportantMessage { .. } | TraceEvent::ErrorMessage { .. } => Some(true),
            TraceEvent::LogMessage { newline, .. } | TraceEvent::TraceMessage { newline, .. } => {
                Some(*newline)
            }
            _ => None,
        }
    }

    /// Apply `f` to every message-shaped field, returning a new event of the
    /// same variant with all other fields untouched
    ///
    /// For `TestStatus` the rewrite recurses into the nested status; the
    /// expected/actual pair is rewritten element-wise when present. For
    /// `TestOutput` both captured streams are rewritten. Build numbers,
    /// import paths, and tag descriptions are not message fields and pass
    /// through unchanged.
    pub fn map_messages<F>(&self, f: F) -> TraceEvent
    where
        F: Fn(&str) -> String,
    {
        match self {
            TraceEvent::ImportantMessage { text } => TraceEvent::ImportantMessage { text: f(text) },
            TraceEvent::ErrorMessage { text } => TraceEvent::ErrorMessage { text: f(text) },
            TraceEvent::LogMessage { text, newline } => TraceEvent::LogMessage {
                text: f(text),
                newline: *newline,
            },
            TraceEvent::TraceMessage { text, newline } => TraceEvent::TraceMessage {
                text: f(text),
                newline: *newline,
            },
            TraceEvent::TestStatus { test, status } => TraceEvent::TestStatus {
                test: test.clone(),
                status: match status {
                    TestStatus::Ignored { reason } => TestStatus::Ignored { reason: f(reason) },
                    TestStatus::Failed {
                        message,
                        details,
                        expected_actual,
                    } => TestStatus::Failed {
                        message: f(message),
                        details: f(details),
                        expected_actual: expected_actual
                            .as_ref()
                            .map(|(expected, actual)| (f(expected), f(actual))),
                    },
                },
            },
            TraceEvent::TestOutput { test, out, err } => TraceEvent::TestOutput {
                test: test.clone(),
                out: f(out),
                err: f(err),
            },
            event @ (TraceEvent::ImportData { .. }
            | TraceEvent::BuildNumber { .. }
            | TraceEvent::OpenTag { .. }
            | TraceEvent::CloseTag { .. }) => event.clone(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
