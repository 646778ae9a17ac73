//! Error types for the site API.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Flat error body, `{"error": "..."}`, the shape the page scripts expect.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Missing SUPABASE_URL or SUPABASE_ANON_KEY")]
    MissingSupabaseConfig,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingSupabaseConfig => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        match self {
            // Method rejections must name the allowed method.
            Self::MethodNotAllowed => (status, [(header::ALLOW, "GET")], body).into_response(),
            Self::MissingSupabaseConfig => {
                tracing::error!("supabase configuration missing, endpoint returning 500");
                (status, [(header::CACHE_CONTROL, "no-store")], body).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_names_get() {
        let response = ApiError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET");
    }

    #[test]
    fn test_missing_config_is_500_no_store() {
        let response = ApiError::MissingSupabaseConfig.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}
