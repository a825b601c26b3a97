use crate::log::log_level::LogLevel;

/// Destination for the crate's log lines. `target` is the emitting module path.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str);
}
