//! # Server Configuration
//!
//! Reads the server bind address, port, and debug flag from environment
//! variables at startup. All values have defaults, so the server runs
//! without any configuration present.

use std::env;

/// Default bind address, listening on all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration, fixed at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the TCP listener.
    pub host: String,
    /// Port number for the TCP listener.
    pub port: u16,
    /// Widens console log output to DEBUG level when set.
    pub debug: bool,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST` - Bind address (default `0.0.0.0`)
    /// - `APP_PORT` - Port number (default `5000`)
    /// - `APP_DEBUG` - `true`/`1` enables debug console logging (default on)
    ///
    /// # Panics
    ///
    /// Panics if `APP_PORT` is set but is not a valid port number.
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("APP_PORT").map_or(DEFAULT_PORT, |raw| {
            raw.parse()
                .expect("Env variable `APP_PORT` should be a valid port number")
        });
        let debug = env::var("APP_DEBUG")
            .map(|raw| raw == "1" || raw.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Self { host, port, debug }
    }

    /// Address string in `host:port` form, suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
