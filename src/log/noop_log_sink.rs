use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Discards everything. Default sink of the assembler and parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _msg: &str, _target: &'static str) {}
}
