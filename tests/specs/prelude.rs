//! Shared helpers for bolt trace specs

use bolt_trace::{default_color_for, ConsoleListener, TraceEvent, TraceListener};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Clonable in-memory stream standing in for stdout/stderr
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Listener recording every delivered event
#[derive(Default)]
pub struct Collector {
    events: Mutex<Vec<TraceEvent>>,
}

impl Collector {
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TraceListener for Collector {
    fn write(&self, event: &TraceEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Monochrome console listener over in-memory streams
pub fn console(important_to_stderr: bool) -> (Arc<ConsoleListener>, SharedBuf, SharedBuf) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let listener = ConsoleListener::with_streams(
        important_to_stderr,
        default_color_for,
        Box::new(out.clone()),
        Box::new(err.clone()),
    )
    .monochrome();
    (Arc::new(listener), out, err)
}

pub fn log(text: &str) -> TraceEvent {
    TraceEvent::LogMessage {
        text: text.to_string(),
        newline: true,
    }
}
