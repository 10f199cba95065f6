use std::path::PathBuf;
use std::time::Duration;

use crate::reservation::DEFAULT_FORM_CAPACITY;

/// Site configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_JSON | false in development | JSON console output |
/// | LOG_DIR | (unset) | enables rolling file logs |
/// | CONTENT_DIR | (unset) | load content from disk instead of the bundled copy |
/// | SUBMIT_DELAY_MS | 1000 | simulated reservation submission delay |
/// | FORM_TTL_SECS | 1800 | idle reservation form lifetime |
/// | MAX_OPEN_FORMS | 10000 | reservation forms held at once |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 CONTENT_DIR=./content cargo run -p bella-site
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Overrides the content compiled into the binary
    pub content_dir: Option<PathBuf>,
    pub submit_delay_ms: u64,
    pub form_ttl_secs: u64,
    pub max_open_forms: usize,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let log_json_default = environment != "development";

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(log_json_default),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            content_dir: std::env::var("CONTENT_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            submit_delay_ms: std::env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            form_ttl_secs: std::env::var("FORM_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1800),
            max_open_forms: std::env::var("MAX_OPEN_FORMS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_FORM_CAPACITY),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            environment,
        }
    }

    /// Configuration for tests: bundled content, no delay, quiet logs
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            environment: "test".into(),
            log_level: "warn".into(),
            log_json: false,
            log_dir: None,
            content_dir: None,
            submit_delay_ms: 0,
            form_ttl_secs: 1800,
            max_open_forms: DEFAULT_FORM_CAPACITY,
            request_timeout_ms: 30000,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn form_ttl(&self) -> Duration {
        Duration::from_secs(self.form_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
