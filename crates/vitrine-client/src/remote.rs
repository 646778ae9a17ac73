//! Credentials from the config provider
//!
//! The site service exposes the backend credentials at
//! `GET /api/get-supabase`. Hosts that do not compile credentials in fetch
//! them from there at startup.

use serde::Deserialize;

use crate::config::Credentials;
use crate::error::ClientError;

const PROVIDER_PATH: &str = "/api/get-supabase";

#[derive(Debug, Deserialize)]
struct ProviderPayload {
    url: String,
    #[serde(rename = "anonKey")]
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: String,
}

/// Fetch credentials from the config provider at `base_url`.
///
/// A non-success status surfaces the provider's error body; the payload is
/// validated through [`Credentials::new`], so an empty value from the
/// provider is rejected here rather than at client creation time.
pub async fn fetch_credentials(base_url: &str) -> Result<Credentials, ClientError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), PROVIDER_PATH);

    let response = reqwest::get(&url).await?;
    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ProviderError>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        return Err(ClientError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    let payload: ProviderPayload = response.json().await?;
    Credentials::new(payload.url, payload.anon_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_names() {
        let payload: ProviderPayload = serde_json::from_str(
            r#"{"url":"https://backend.example.com","anonKey":"anon-key"}"#,
        )
        .unwrap();

        assert_eq!(payload.url, "https://backend.example.com");
        assert_eq!(payload.anon_key, "anon-key");
    }

    #[test]
    fn test_error_body_shape() {
        let body: ProviderError =
            serde_json::from_str(r#"{"error":"Missing SUPABASE_URL or SUPABASE_ANON_KEY"}"#)
                .unwrap();

        assert_eq!(body.error, "Missing SUPABASE_URL or SUPABASE_ANON_KEY");
    }
}
