//! Configuration endpoint
//!
//! Exposes the backend URL and public key to page scripts at runtime, so
//! deployments can rotate credentials without rebuilding the pages.

use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SupabaseSettings {
    pub url: String,
    #[serde(rename = "anonKey")]
    pub anon_key: String,
}

/// /api/get-supabase - backend settings for page scripts.
///
/// GET only. Values are read fresh from configuration and marked `no-store`
/// so clients never cache stale credentials; either value missing surfaces
/// as a `500`, never a silent default.
pub async fn get_supabase(
    method: Method,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let (url, anon_key) = state
        .config
        .supabase
        .resolved()
        .ok_or(ApiError::MissingSupabaseConfig)?;

    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(SupabaseSettings {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        }),
    ))
}
