//! Tracing bootstrap for statlog hosts.
//!
//! The crate only ever emits through the `tracing` facade, so hosts with
//! their own subscriber need nothing from here. For everything else,
//! [`init_tracing`] wires a formatted subscriber with env-based filtering.
//! Idempotent: the global subscriber can only be set once per process, and
//! later calls are silently ignored.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output shape for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Text,
    /// Newline-delimited JSON, for log aggregation pipelines.
    Json,
}

/// Install the global tracing subscriber.
///
/// Filtering comes from `STATLOG_LOG` if set, then `RUST_LOG`, then the
/// supplied `level` as the default verbosity.
pub fn init_tracing(format: LogFormat, level: Level) {
    let env_filter = std::env::var("STATLOG_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok(),
    };
}
