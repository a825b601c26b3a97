use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Forwards log lines to the `tracing` dispatcher, so a host that already
/// installed a subscriber sees SDP diagnostics alongside its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        match level {
            LogLevel::Trace => tracing::trace!(origin = target, "{msg}"),
            LogLevel::Debug => tracing::debug!(origin = target, "{msg}"),
            LogLevel::Info => tracing::info!(origin = target, "{msg}"),
            LogLevel::Warn => tracing::warn!(origin = target, "{msg}"),
            LogLevel::Error => tracing::error!(origin = target, "{msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TracingLogSink;
    use crate::log::{log_level::LogLevel, log_sink::LogSink};

    #[test]
    fn logs_without_a_subscriber() {
        // No subscriber installed: events are dropped by the default dispatcher.
        let sink = TracingLogSink;
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            sink.log(level, "message", module_path!());
        }
    }
}
