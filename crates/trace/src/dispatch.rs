// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch registry: the redact-then-broadcast entry point

use crate::config::BuildServer;
use crate::console::{default_color_for, ConsoleListener};
use crate::event::TraceEvent;
use crate::listener::TraceListener;
use crate::secrets::{guard_with, SecretStore};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

/// Shared listener registry and event entry point
///
/// Producers call [`TraceBus::post`]; consumers register through
/// [`TraceBus::add_listener`] or [`TraceBus::set_listeners`]. Clones share
/// state, so one bus can be handed to every build step.
pub struct TraceBus {
    /// `None` means never explicitly configured; reads then fall back to
    /// the default console listener without materializing it
    listeners: Arc<RwLock<Option<Vec<Arc<dyn TraceListener>>>>>,
    secrets: SecretStore,
    /// Built once from the ambient build-server input and frozen for the
    /// life of the bus
    default_console: Arc<dyn TraceListener>,
}

impl TraceBus {
    /// Bus whose default console listener routes important and error
    /// messages according to the ambient build server
    pub fn new(server: BuildServer) -> Self {
        let console = ConsoleListener::new(server.important_to_stderr(), default_color_for);
        Self::with_default_listener(Arc::new(console))
    }

    /// Bus with an explicit default listener
    pub fn with_default_listener(default: Arc<dyn TraceListener>) -> Self {
        Self {
            listeners: Arc::new(RwLock::new(None)),
            secrets: SecretStore::new(),
            default_console: default,
        }
    }

    /// True once listeners have been explicitly set, even to an empty list
    pub fn listeners_set(&self) -> bool {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Active listeners, in delivery order
    pub fn listeners(&self) -> Vec<Arc<dyn TraceListener>> {
        match self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            Some(listeners) => listeners.clone(),
            None => vec![Arc::clone(&self.default_console)],
        }
    }

    /// Replace the listener list wholesale
    pub fn set_listeners(&self, listeners: Vec<Arc<dyn TraceListener>>) {
        *self.listeners.write().unwrap_or_else(|e| e.into_inner()) = Some(listeners);
    }

    /// Prepend a listener to the active list
    ///
    /// On a never-configured bus this materializes the default console
    /// listener behind the new one.
    pub fn add_listener(&self, listener: Arc<dyn TraceListener>) {
        let mut guard = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        let mut current = match guard.take() {
            Some(listeners) => listeners,
            None => vec![Arc::clone(&self.default_console)],
        };
        current.insert(0, listener);
        *guard = Some(current);
    }

    /// Secret registry applied to every posted event
    pub fn secrets(&self) -> &SecretStore {
        &self.secrets
    }

    /// Redact and deliver one event to every active listener
    ///
    /// Listeners run synchronously in list order and each receives the
    /// identical redacted event exactly once. A panicking listener is
    /// logged and skipped; the remaining listeners still get the event.
    pub fn post(&self, event: TraceEvent) {
        // One snapshot per post: every field of the event is redacted
        // against the same secret list
        let secrets = self.secrets.all();
        let event = event.map_messages(|text| guard_with(&secrets, text));
        for listener in self.listeners() {
            let delivery = catch_unwind(AssertUnwindSafe(|| listener.write(&event)));
            if delivery.is_err() {
                tracing::warn!(event = event.name(), "listener panicked, continuing");
            }
        }
    }
}

impl Clone for TraceBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            secrets: self.secrets.clone(),
            default_console: Arc::clone(&self.default_console),
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
