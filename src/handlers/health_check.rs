//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};

/// Response body reported by the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint that returns 200 OK.
///
/// Unconditionally reports healthy: it performs no dependency checks or
/// complex validation, only confirms the server is able to respond.
/// Unlike the home route, it produces no INFO-level log entry, so probe
/// traffic does not fill the log file.
///
/// # Returns
///
/// Always returns `200 OK` with body `{"status":"healthy"}`.
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse { status: "healthy" })
}
