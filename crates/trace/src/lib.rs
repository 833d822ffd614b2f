//! bolt-trace: Trace event model and listener dispatch for the Bolt build tool
//!
//! This crate provides:
//! - The closed set of trace events build steps, compilation, and test runs emit
//! - The single-method listener contract every sink implements
//! - Secret redaction applied to event text before any listener sees it
//! - The reference console listener with colored, stream-routed output
//! - The shared dispatch bus owning the listener and secret registries

pub mod config;
pub mod console;
pub mod dispatch;
pub mod event;
pub mod import;
pub mod listener;
pub mod secrets;
pub mod tag;

// Re-exports
pub use config::BuildServer;
pub use console::{default_color_for, ColorMap, ConsoleListener};
pub use dispatch::TraceBus;
pub use event::{TestStatus, TraceEvent};
pub use import::{CoverageTool, ImportKind, NunitSchema, UnknownImportKind};
pub use listener::TraceListener;
pub use secrets::{Secret, SecretStore};
pub use tag::Tag;
