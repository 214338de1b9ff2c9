use crate::error::{OrderboardError, Result};
use std::env;

/// Refresh-related configuration.
///
/// The feed re-fetches the full order and table snapshots on a fixed
/// interval; a failed fetch is retried a bounded number of times before the
/// cycle is given up and the previous snapshot stays visible.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
}

impl RefreshConfig {
    pub fn from_env() -> Self {
        let interval_secs = env::var("REFRESH_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(15);

        let retry_attempts = env::var("REFRESH_RETRY_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);

        let retry_delay_ms = env::var("REFRESH_RETRY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        Self {
            interval_secs,
            retry_attempts,
            retry_delay_ms,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Complete service configuration from environment variables
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the restaurant backend REST API
    pub backend_url: String,
    pub refresh: RefreshConfig,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let backend_url = Self::sanitize_url(
            env::var("BACKEND_URL")
                .map_err(|_| OrderboardError::MissingEnvVar("BACKEND_URL".to_string()))?,
        );

        Ok(Self {
            backend_url,
            refresh: RefreshConfig::from_env(),
        })
    }

    /// Sanitize URL by removing surrounding quotes, whitespace and a
    /// trailing slash
    fn sanitize_url(url: String) -> String {
        let trimmed = url.trim();
        let without_quotes = if trimmed.starts_with('"') && trimmed.ends_with('"') {
            &trimmed[1..trimmed.len() - 1]
        } else if trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        without_quotes.trim_end_matches('/').to_string()
    }
}
