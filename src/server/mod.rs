//! `--server` mode
//!
//! Serves the built web bundle and forwards `/api/*` to the backend, the
//! same split the client expects in development and on Cloud Run.

pub mod identity;
pub mod proxy;

use axum::{
    http::Method,
    routing::{any, get},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use proxy::ProxyState;

/// Build the router: health check, API proxy and the static bundle with
/// `index.html` as the client-side route fallback.
pub fn create_router(state: ProxyState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let static_files = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health check
        .route("/healthz", get(health_check))

        // Backend API
        .route("/api/{*path}", any(proxy::forward))
        .with_state(Arc::new(state))

        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = ProxyState::new(&config);
    match state.identity() {
        Some(identity) => tracing::info!("Attaching identity tokens for {}", identity.audience()),
        None => tracing::info!("No identity audience configured, forwarding requests unauthenticated"),
    }

    let app = create_router(state, &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Server running on http://{} (backend {}, static files from {})",
        addr,
        config.backend_url,
        config.static_dir.display()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
