//! Client credentials

use crate::error::ClientError;

/// Backend credentials: endpoint URL plus the public (anon) API key.
///
/// Immutable once constructed. Supplied either as compiled-in values or
/// fetched from the config provider via [`crate::remote::fetch_credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    endpoint: String,
    public_key: String,
}

impl Credentials {
    /// Create credentials. Both fields must be non-empty.
    pub fn new(
        endpoint: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        let public_key = public_key.into();

        if endpoint.is_empty() {
            return Err(ClientError::EmptyCredential("endpoint"));
        }
        if public_key.is_empty() {
            return Err(ClientError::EmptyCredential("public key"));
        }

        Ok(Self {
            endpoint,
            public_key,
        })
    }

    /// Backend endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Public API key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}
