// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference console listener: colored, stream-routed text output

use crate::event::TraceEvent;
use crate::listener::TraceListener;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use std::sync::Mutex;

/// Maps an event to the foreground color used to print it
pub type ColorMap = fn(&TraceEvent) -> Color;

/// Default color map: important messages yellow, errors red, trace output
/// green, everything else grey
pub fn default_color_for(event: &TraceEvent) -> Color {
    match event {
        TraceEvent::ImportantMessage { .. } => Color::Yellow,
        TraceEvent::ErrorMessage { .. } => Color::Red,
        TraceEvent::TraceMessage { .. } => Color::Green,
        _ => Color::Grey,
    }
}

/// Switches the foreground color for the duration of one write
///
/// Dropping emits the reset and flushes even when the guarded write failed,
/// so no exit path leaves the console recolored.
struct ColorGuard<'a> {
    out: &'a mut dyn Write,
    colored: bool,
}

impl<'a> ColorGuard<'a> {
    fn set(out: &'a mut dyn Write, color: Color, colored: bool) -> io::Result<Self> {
        if colored {
            write!(out, "{}", SetForegroundColor(color))?;
        }
        Ok(Self { out, colored })
    }
}

impl Write for ColorGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for ColorGuard<'_> {
    fn drop(&mut self) {
        if self.colored {
            let _ = write!(self.out, "{}", ResetColor);
        }
        let _ = self.out.flush();
    }
}

type Stream = Mutex<Box<dyn Write + Send>>;

/// Reference implementation of [`TraceListener`] printing to a text console
///
/// Important and error messages go to the error stream iff the listener was
/// constructed with `important_to_stderr`; everything else prints to
/// standard output. `BuildNumber`, `TestStatus`, and `TestOutput` are
/// consumed by CI listener kinds and produce no console output.
pub struct ConsoleListener {
    important_to_stderr: bool,
    color_for: ColorMap,
    colored: bool,
    out: Stream,
    err: Stream,
}

impl ConsoleListener {
    /// Console listener over the process stdout/stderr
    pub fn new(important_to_stderr: bool, color_for: ColorMap) -> Self {
        Self::with_streams(
            important_to_stderr,
            color_for,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Console listener over caller-supplied streams
    pub fn with_streams(
        important_to_stderr: bool,
        color_for: ColorMap,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            important_to_stderr,
            color_for,
            colored: true,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Suppress color sequences (piped output, CI logs)
    pub fn monochrome(mut self) -> Self {
        self.colored = false;
        self
    }

    fn print(&self, event: &TraceEvent) -> io::Result<()> {
        let color = (self.color_for)(event);
        match event {
            TraceEvent::ImportantMessage { text } | TraceEvent::ErrorMessage { text } => {
                let stream = if self.important_to_stderr {
                    &self.err
                } else {
                    &self.out
                };
                let mut out = stream.lock().unwrap_or_else(|e| e.into_inner());
                self.write_colored(out.as_mut(), color, text, true)
            }
            TraceEvent::LogMessage { text, newline } | TraceEvent::TraceMessage { text, newline } => {
                let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
                self.write_colored(out.as_mut(), color, text, *newline)
            }
            TraceEvent::OpenTag { tag, description } => {
                let line = format!("Starting {} '{}': {}", tag.kind(), tag.name(), description);
                let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
                self.write_colored(out.as_mut(), color, &line, true)
            }
            TraceEvent::CloseTag { tag, elapsed } => {
                let line = format!(
                    "Finished '{}' in {}",
                    tag.name(),
                    humantime::format_duration(*elapsed)
                );
                let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
                self.write_colored(out.as_mut(), color, &line, true)
            }
            TraceEvent::ImportData { kind, path } => {
                let line = format!("Import data '{}': {}", kind, path.display());
                let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
                self.write_colored(out.as_mut(), color, &line, true)
            }
            // Consumed by CI listener kinds, not the console
            TraceEvent::BuildNumber { .. }
            | TraceEvent::TestStatus { .. }
            | TraceEvent::TestOutput { .. } => Ok(()),
        }
    }

    fn write_colored(
        &self,
        out: &mut dyn Write,
        color: Color,
        text: &str,
        newline: bool,
    ) -> io::Result<()> {
        let mut guard = ColorGuard::set(out, color, self.colored)?;
        if newline {
            writeln!(guard, "{text}")?;
        } else {
            write!(guard, "{text}")?;
        }
        Ok(())
    }
}

impl TraceListener for ConsoleListener {
    fn write(&self, event: &TraceEvent) {
        if let Err(err) = self.print(event) {
            tracing::warn!(event = event.name(), error = %err, "console write failed");
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
