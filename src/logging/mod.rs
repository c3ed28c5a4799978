//! Logging and observability
//!
//! Structured logging with the `tracing` crate: console output always,
//! plus an optional rotating local file when enabled in configuration.
//!
//! # Example
//!
//! ```no_run
//! use partex::config::LoggingConfig;
//! use partex::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{PartexError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// so buffered file logs are flushed on exit.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up a console layer filtered by `log_level_str` (overridable via
/// `RUST_LOG`) and, when `config.local_enabled` is set, a rotating file
/// layer under `config.local_path`.
///
/// # Errors
///
/// Returns a configuration error for an unknown log level or an
/// uncreatable log directory.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = validate_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("partex={level}")));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    let mut layers = vec![console_layer.boxed()];

    let file_guard = if config.local_enabled {
        let rotation = match config.local_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            PartexError::Configuration(format!(
                "Failed to create log directory {}: {e}",
                config.local_path
            ))
        })?;

        let appender = RollingFileAppender::new(rotation, &config.local_path, "partex.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(EnvFilter::new(format!("partex={level}")));
        layers.push(file_layer.boxed());

        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Checks the level string against the levels `tracing` understands.
fn validate_log_level(level: &str) -> Result<String> {
    let normalized = level.to_lowercase();
    match normalized.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(normalized),
        _ => Err(PartexError::Configuration(format!(
            "Invalid log level: {level}. Valid levels: trace, debug, info, warn, error"
        ))),
    }
}

/// Log the start of a batch submission
#[macro_export]
macro_rules! log_export_start {
    ($count:expr) => {
        tracing::info!(count = $count, "Submitting batch export");
    };
}

/// Log the completion of a batch submission
#[macro_export]
macro_rules! log_export_complete {
    ($success:expr, $failed:expr, $elapsed:expr) => {
        tracing::info!(
            success = $success,
            failed = $failed,
            elapsed_ms = $elapsed.as_millis(),
            "Batch export completed"
        );
    };
}
