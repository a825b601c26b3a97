use std::fmt;

/// Defines the severity levels for log messages, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Per-line assembly detail.
    Trace,
    /// Fine-grained events such as each attached field.
    Debug,
    /// Coarse progress, e.g. a finished parse.
    Info,
    /// Recoverable oddities: a duplicate `s=` line, a skipped bad line.
    Warn,
    /// Failures that abort the current operation.
    Error,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
