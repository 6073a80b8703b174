//! Logging for Scribe
//!
//! Two sinks live here. [`init_tracing`] installs the process-wide `tracing`
//! subscriber. [`ExecutionLog`] is the agent-facing log that tools write
//! structured entries into, so a UI or a later hook can correlate them.

mod execution_log;

pub use execution_log::{ExecutionLog, LogEntry, LogKind};

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// is harmless; the second installation is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    };
}
