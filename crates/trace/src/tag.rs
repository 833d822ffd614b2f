// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope tags for pairing open and close events

use serde::{Deserialize, Serialize};

/// A named, typed scope marker
///
/// Created fresh when a scope opens and threaded unchanged to the matching
/// close event. The pairing of open/close by equal tag value is a caller
/// invariant, not enforced here; listeners must tolerate imbalance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    Task(String),
    Target(String),
    Compilation(String),
    TestSuite(String),
    Test(String),
    Other { kind: String, name: String },
}

impl Tag {
    /// Tag with a caller-supplied kind label
    pub fn other(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Tag::Other {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Scope name
    pub fn name(&self) -> &str {
        match self {
            Tag::Task(name)
            | Tag::Target(name)
            | Tag::Compilation(name)
            | Tag::TestSuite(name)
            | Tag::Test(name) => name,
            Tag::Other { name, .. } => name,
        }
    }

    /// Kind label: the literal kind name, or the explicit label for `Other`
    pub fn kind(&self) -> &str {
        match self {
            Tag::Task(_) => "task",
            Tag::Target(_) => "target",
            Tag::Compilation(_) => "compilation",
            Tag::TestSuite(_) => "testsuite",
            Tag::Test(_) => "test",
            Tag::Other { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
