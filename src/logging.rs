//! Logging setup
//!
//! `RUST_LOG` wins when set. Otherwise this crate logs at `log_level` and
//! everything else (axum, hyper, sqlx) at `warn`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Level applied to dependencies when `RUST_LOG` is unset
const DEPENDENCY_LEVEL: &str = "warn";

/// Default directives: `warn,transfer_scheduler=<level>`.
///
/// An unparsable `level` falls back to `info` for this crate.
pub fn default_filter(level: &str) -> EnvFilter {
    let crate_name = env!("CARGO_CRATE_NAME");
    EnvFilter::try_new(format!("{DEPENDENCY_LEVEL},{crate_name}={level}"))
        .unwrap_or_else(|_| EnvFilter::new(format!("{DEPENDENCY_LEVEL},{crate_name}=info")))
}

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    use tracing_appender::rolling;

    match config.rotation.as_str() {
        "hourly" => rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => rolling::daily(&config.log_dir, &config.log_file),
        _ => rolling::never(&config.log_dir, &config.log_file),
    }
}

/// Install the global subscriber. Keep the guard alive for the whole process
/// or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(config));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        // Machine-readable file only
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .with(fmt::layer().with_target(false))
            .init();
    }

    guard
}
