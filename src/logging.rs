// Diagnostics sink threaded through the conversion pipeline

use crossbeam_channel::Sender;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
}

/// Receives the pipeline's diagnostics.
///
/// Any `FnMut(Severity, String)` closure is a sink, and so is the sending half of a
/// channel of [`LogRecord`]s.
pub trait LogSink {
    fn log(&mut self, severity: Severity, message: String);

    fn warn(&mut self, message: String) {
        self.log(Severity::Warn, message);
    }

    fn info(&mut self, message: String) {
        self.log(Severity::Info, message);
    }

    fn debug(&mut self, message: String) {
        self.log(Severity::Debug, message);
    }
}

impl<F> LogSink for F
where
    F: FnMut(Severity, String),
{
    fn log(&mut self, severity: Severity, message: String) {
        self(severity, message);
    }
}

impl LogSink for Sender<LogRecord> {
    fn log(&mut self, severity: Severity, message: String) {
        let _ = self.send(LogRecord { severity, message });
    }
}
