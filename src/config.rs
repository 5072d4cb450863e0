//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable has a default, so the service runs without any
//! environment at all.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base for derived short URLs (default: `http://localhost:3000`)
//! - `LOG_COLLECTOR_URL` - Remote log collector endpoint
//!   (default: `http://20.244.56.144/evaluation-service/logs`)
//! - `REDIRECT_DELAY_MS` - Artificial redirect lookup delay (default: 1200)
//! - `RUST_LOG` - Log level/filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Default collector endpoint for log events.
pub const DEFAULT_COLLECTOR_URL: &str = "http://20.244.56.144/evaluation-service/logs";

/// Default artificial delay before a redirect lookup settles, in milliseconds.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1200;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub collector_url: String,
    pub redirect_delay_ms: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let collector_url =
            env::var("LOG_COLLECTOR_URL").unwrap_or_else(|_| DEFAULT_COLLECTOR_URL.to_string());

        let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            collector_url,
            redirect_delay_ms,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` or `collector_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `redirect_delay_ms` exceeds 60000
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.collector_url.starts_with("http://") && !self.collector_url.starts_with("https://")
        {
            anyhow::bail!(
                "LOG_COLLECTOR_URL must start with 'http://' or 'https://', got '{}'",
                self.collector_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.redirect_delay_ms > 60_000 {
            anyhow::bail!(
                "REDIRECT_DELAY_MS is too large (max: 60000), got {}",
                self.redirect_delay_ms
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log collector: {}", self.collector_url);
        tracing::info!("  Redirect delay: {}ms", self.redirect_delay_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
