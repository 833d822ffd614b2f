// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret registry for redacting sensitive values from trace output

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// A sensitive value and the replacement that stands in for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub value: String,
    pub replacement: String,
}

/// Shared registry of secrets applied to every posted event
///
/// Clones share state. Secrets live for the whole process: there is no
/// removal operation and no expiry.
#[derive(Clone, Default)]
pub struct SecretStore {
    secrets: Arc<RwLock<Vec<Secret>>>,
}

impl SecretStore {
    pub fn new() -> Self {
        Self {
            secrets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a replacement for a sensitive value
    ///
    /// Re-registering the same value replaces the earlier entry; the most
    /// recent registration wins and sits at the front of the registry.
    pub fn register(&self, replacement: impl Into<String>, value: impl Into<String>) {
        let secret = Secret {
            value: value.into(),
            replacement: replacement.into(),
        };
        let mut secrets = self.secrets.write().unwrap_or_else(|e| e.into_inner());
        secrets.retain(|s| s.value != secret.value);
        secrets.insert(0, secret);
    }

    /// Current secrets, most recently registered first
    pub fn all(&self) -> Vec<Secret> {
        self.secrets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace every registered secret value in `text`
    pub fn guard(&self, text: &str) -> String {
        guard_with(&self.all(), text)
    }
}

/// Fold `secrets` over `text` in order, replacing each value literally
///
/// Each step sees the output of the previous one, so a replacement that
/// contains a later rule's value is itself redacted by that rule.
pub fn guard_with(secrets: &[Secret], text: &str) -> String {
    secrets.iter().fold(text.to_string(), |acc, secret| {
        acc.replace(&secret.value, &secret.replacement)
    })
}

#[cfg(test)]
#[path = "secrets_tests.rs"]
mod tests;
