//! Configuration for the site service.

use std::path::PathBuf;
use std::time::Duration;

/// Site service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Directory the static pages are served from
    pub static_dir: PathBuf,

    /// Request timeout
    pub request_timeout: Duration,

    /// Backend values exposed through `/api/get-supabase`
    pub supabase: SupabaseConfig,
}

/// The backend URL and public key, as configured in the environment.
///
/// Both values are optional at startup: a missing value is reported by the
/// configuration endpoint as a `500`, never as a boot failure; the rest of
/// the site keeps serving.
#[derive(Debug, Clone, Default)]
pub struct SupabaseConfig {
    /// `SUPABASE_URL`
    pub url: Option<String>,
    /// `SUPABASE_ANON_KEY`
    pub anon_key: Option<String>,
}

impl SupabaseConfig {
    /// Both values, when both are present and non-empty.
    #[must_use]
    pub fn resolved(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.anon_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Some((url, key)),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        let static_dir = PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        let supabase = SupabaseConfig {
            url: std::env::var("SUPABASE_URL").ok(),
            anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
        };

        if supabase.resolved().is_none() {
            tracing::warn!(
                "SUPABASE_URL or SUPABASE_ANON_KEY not set; /api/get-supabase will report 500"
            );
        }

        Ok(Self {
            http_port,
            static_dir,
            request_timeout: Duration::from_secs(request_timeout_secs),
            supabase,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
