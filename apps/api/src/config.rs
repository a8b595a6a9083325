use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Upload body ceiling. Manuscripts can be very large, so this sits far above axum's 2 MiB default.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1000 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only a malformed value aborts startup; a missing API key does not.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// `None` leaves the outbound generation call unbounded.
    pub upstream_timeout: Option<Duration>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            upstream_timeout: optional_env("UPSTREAM_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?
                .map(Duration::from_secs),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            upstream_timeout: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 3000,
            rust_log: "info".to_string(),
        }
    }
}

/// Treats an empty or whitespace-only variable the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
