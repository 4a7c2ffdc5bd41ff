//! # HTTP Request Handlers
//!
//! This module contains the HTTP request handlers for the application.
//!
//! ## Available Handlers
//!
//! - **Home** (`home`) - Landing endpoint returning a fixed greeting
//! - **Health Check** (`health_check`) - Application health monitoring

mod health_check;
mod home;

pub use health_check::*;
pub use home::*;
