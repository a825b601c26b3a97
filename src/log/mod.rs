pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod noop_log_sink;
pub mod tracing_log_sink;
pub use noop_log_sink::NoopLogSink;
pub use tracing_log_sink::TracingLogSink;
