//! # DevOps Demo - Minimal Web Service
//!
//! ## Modules
//!
//! - [`config`] - Server configuration loaded from environment variables
//! - [`handlers`] - HTTP request handlers for the two endpoints
//! - [`telemetry`] - File-backed logging setup

pub mod config;
pub mod handlers;
pub mod telemetry;

use axum::{Router, routing::get};

use crate::handlers::{health, home};

/// Creates the Axum router with application routes.
///
/// The service is stateless, so no shared state is attached to the router.
///
/// # Returns
///
/// A configured Axum router exposing `GET /` and `GET /health`.
pub fn app() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}
