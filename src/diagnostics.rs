//! Diagnostics sink for export runs.
//!
//! The export routine reports through a [`Diagnostics`] handle instead of a
//! global logger. The binary passes [`TracingDiagnostics`]; embedders and
//! tests can capture messages with [`RecordingDiagnostics`].

use std::cell::RefCell;
use tracing::{Level, debug, error, info, trace, warn};

/// Accepts a severity level and a message.
pub trait Diagnostics {
    fn log(&self, level: Level, message: &str);
}

/// Forwards every message to `tracing` at the given level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => error!("{message}"),
            Level::WARN => warn!("{message}"),
            Level::INFO => info!("{message}"),
            Level::DEBUG => debug!("{message}"),
            _ => trace!("{message}"),
        }
    }
}

/// Keeps messages in memory, in the order they were logged.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn log(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_recording_keeps_order() {
        let sink = RecordingDiagnostics::new();
        sink.log(Level::DEBUG, "first");
        sink.log(Level::ERROR, "second");
        sink.log(Level::DEBUG, "third");

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], (Level::ERROR, "second".to_string()));
        assert_eq!(sink.messages_at(Level::DEBUG), vec!["first", "third"]);
        assert!(sink.messages_at(Level::INFO).is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedWriter {
        type Writer = CapturedWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_sink_emits_events_at_level() {
        let writer = CapturedWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingDiagnostics;
            sink.log(Level::ERROR, "read failed");
            sink.log(Level::INFO, "exported");
            sink.log(Level::DEBUG, "filtered out");
        });

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2, "Got: {}", output);
        assert!(lines[0].contains("ERROR"), "Got: {}", lines[0]);
        assert!(lines[0].ends_with("read failed"), "Got: {}", lines[0]);
        assert!(lines[1].contains("INFO"), "Got: {}", lines[1]);
        assert!(lines[1].ends_with("exported"), "Got: {}", lines[1]);
    }
}
