//! Vitrine site server
//!
//! Serves the static marketing pages and the runtime configuration endpoint
//! the page scripts bootstrap the backend client from.
//!
//! ## Endpoints
//!
//! - `GET /api/get-supabase` - backend URL and public key for page scripts
//! - `GET /health` - liveness probe
//! - anything else - static site assets

mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;

use axum::routing::{any, get};
use axum::Router;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{get_supabase, health};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("site_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vitrine site server");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        http_port = config.http_port,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    // Create application state
    let state = AppState::new(config);

    // Build HTTP router
    let app = build_router(state.clone());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.http_port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout();

    // Runtime configuration for page scripts. Routed through `any` because
    // the handler owns the 405 response - it must carry `Allow: GET`.
    let api = Router::new().route("/api/get-supabase", any(get_supabase));

    // Health route (no timeout - must always respond quickly)
    let health_routes = Router::new().route("/health", get(health));

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(request_timeout));

    // Anything that is not an API route is a page asset.
    let static_site = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(api)
        .fallback_service(static_site)
        .layer(middleware)
        .merge(health_routes)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
