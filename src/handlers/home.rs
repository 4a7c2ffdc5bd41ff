//! # Home Handler
//!
//! Landing endpoint returning a fixed plain-text greeting. Each request
//! is recorded in the log file at INFO level.

use tracing::{info, instrument};

/// Handles `GET /` with a fixed greeting.
///
/// Writes one informational log entry per invocation, then returns the
/// greeting as `200 OK` plain text.
#[instrument]
pub async fn home() -> &'static str {
    info!("Home route accessed");
    "Hello, DevOps with Flask!"
}
