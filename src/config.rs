//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the host platform's apps directory (default: ./apps).
    /// Scanned by the filesystem availability probe.
    pub apps_dir: PathBuf,

    /// Explicit companion app availability (from AVAILABLE_APPS env var).
    /// When set, replaces the filesystem probe; an empty list means no
    /// optional apps are installed.
    pub available_apps: Option<Vec<String>>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Request timeout in seconds (default: 10).
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let apps_dir = env::var("APPS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./apps"));

        let available_apps = env::var("AVAILABLE_APPS").ok().map(|v| split_csv(&v));

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| split_csv(&v))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        Ok(Self {
            port,
            apps_dir,
            available_apps,
            cors_allowed_origins,
            request_timeout_secs,
        })
    }
}

/// Split a comma-separated env value into trimmed, non-empty entries.
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
