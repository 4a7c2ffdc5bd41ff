//! # Logging Setup
//!
//! Installs the process-wide tracing subscriber. Log output goes to two
//! sinks: the console, and an append-mode file at `logs/flask/app.log`
//! that only receives INFO-level events and above. The log directory is
//! created on startup if it does not already exist; creating an existing
//! directory is a no-op and leaves its contents untouched.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_appender::rolling;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::LevelFilter, fmt, layer::SubscriberExt,
};

use crate::config::ServerConfig;

/// Directory holding the application log file, relative to the working directory.
pub const LOG_DIR: &str = "logs/flask";

/// File name of the log sink inside [`LOG_DIR`].
pub const LOG_FILE: &str = "app.log";

/// Errors that can occur while installing the logging subscriber.
///
/// Both variants are fatal at startup; there is no recovery path.
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("failed to create log directory")]
    CreateLogDir(#[from] io::Error),

    #[error("failed to install global tracing subscriber")]
    SetSubscriber(#[from] SetGlobalDefaultError),
}

/// Creates the log directory if it is missing.
///
/// Idempotent: an already-existing directory is accepted as-is and any
/// files inside it are left unmodified.
pub fn ensure_log_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Installs the global tracing subscriber writing to [`LOG_DIR`].
///
/// Must be called once, before the server starts handling requests.
pub fn init_logging(config: &ServerConfig) -> Result<(), TelemetryError> {
    init_logging_to(config, LOG_DIR)
}

/// Installs the global tracing subscriber with an explicit log directory.
///
/// The file layer appends to [`LOG_FILE`] inside `log_dir` and is capped
/// at INFO level. The console layer follows `RUST_LOG` when set, and
/// otherwise logs at DEBUG level when `config.debug` is on, INFO when off.
///
/// # Errors
///
/// Fails if the log directory cannot be created or if a global
/// subscriber has already been installed.
pub fn init_logging_to(
    config: &ServerConfig,
    log_dir: impl AsRef<Path>,
) -> Result<(), TelemetryError> {
    let log_dir = log_dir.as_ref();
    ensure_log_dir(log_dir)?;

    let file_appender = rolling::never(log_dir, LOG_FILE);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let default_directive = if config.debug { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());
    let console_layer = fmt::layer().with_filter(console_filter);

    let subscriber = Registry::default().with(file_layer).with(console_layer);
    set_global_default(subscriber)?;

    Ok(())
}
