//! Injected log sinks
//!
//! The engine reports game events (guesses, responses, transitions) to a sink
//! handed to the solver or oracle at construction. No sink means no game log.
//! Diagnostics from the search itself go through `tracing` directly.

use std::cell::RefCell;
use std::io::Write;
use tracing::Level;

/// Append-only destination for formatted log lines
pub trait LogSink {
    /// Write one formatted line
    fn write_line(&self, level: Level, line: &str);
}

/// Forwards lines to the active `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, level: Level, line: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "mastermind::game", "{line}"),
            Level::WARN => tracing::warn!(target: "mastermind::game", "{line}"),
            Level::INFO => tracing::info!(target: "mastermind::game", "{line}"),
            Level::DEBUG => tracing::debug!(target: "mastermind::game", "{line}"),
            Level::TRACE => tracing::trace!(target: "mastermind::game", "{line}"),
        }
    }
}

/// Appends `[LEVEL] message` lines to any writer, e.g. a `mastermind.log` file
///
/// Write failures are reported to stderr and otherwise ignored; logging never
/// fails a game.
pub struct WriterSink<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write_line(&self, level: Level, line: &str) {
        let mut writer = self.writer.borrow_mut();
        if let Err(e) = writeln!(writer, "[{level}] {line}") {
            eprintln!("Failed to write log line: {e}");
        }
    }
}

/// Keeps every line in memory
///
/// Useful for drivers that display a game log, and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    #[must_use]
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Number of recorded lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, level: Level, line: &str) {
        self.lines.borrow_mut().push((level, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_formats_level_prefix() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(Level::INFO, "first guess [Green, Green, Red, Red]");
        sink.write_line(Level::WARN, "inconsistent hints");

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "[INFO] first guess [Green, Green, Red, Red]\n[WARN] inconsistent hints\n"
        );
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line(Level::DEBUG, "a");
        sink.write_line(Level::INFO, "b");

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.lines(),
            vec![(Level::DEBUG, "a".to_string()), (Level::INFO, "b".to_string())]
        );
    }

    #[test]
    fn tracing_sink_without_subscriber_is_silent() {
        // No subscriber installed: must not panic
        TracingSink.write_line(Level::ERROR, "nobody listening");
    }
}
