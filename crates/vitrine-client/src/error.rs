//! Client errors

use thiserror::Error;

/// Errors for client bootstrap operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A credentials field was empty.
    #[error("credentials {0} must be non-empty")]
    EmptyCredential(&'static str),

    /// The SDK factory has not been registered yet.
    #[error("backend SDK is not available")]
    SdkUnavailable,

    /// The SDK factory was invoked and failed.
    #[error("backend client factory failed: {0}")]
    Factory(Box<dyn std::error::Error + Send + Sync>),

    /// The config provider request could not be completed.
    #[error("config provider request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The config provider answered with an error status.
    #[error("config provider returned status {status}: {message}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Error message from the provider body, or the status line
        message: String,
    },
}

impl ClientError {
    /// Wrap an SDK factory failure.
    pub fn factory(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Factory(err.into())
    }

    /// Returns true if another attempt may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::EmptyCredential(_) => false,
            // The SDK may still be registered later.
            Self::SdkUnavailable => true,
            // The slot stays absent after a factory failure; the next
            // accessor call makes a fresh attempt.
            Self::Factory(_) => true,
            Self::Fetch(_) => true,
            Self::Provider { status, .. } => *status >= 500,
        }
    }
}
