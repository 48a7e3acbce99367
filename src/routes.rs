//! Top-level router configuration.
//!
//! # Route Structure
//!
//! API listener:
//!
//! - `/api/v1/shortlink/*` - REST API
//! - `GET /{name}`         - Shortlink redirect
//! - `/assets/*`           - Static assets
//!
//! Probe listener:
//!
//! - `GET /healthz` - Liveness
//! - `GET /readyz`  - Readiness (backing store reachable)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - Frame, sniffing, XSS, HSTS and CSP headers

use crate::api;
use crate::api::handlers::{healthz_handler, readyz_handler, redirect_handler};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::services::ServeDir;

/// Constructs the API router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets_dir` - directory served under `/assets`
pub fn app_router(state: AppState, assets_dir: &Path) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::routes::v1_routes())
        .route("/{name}", get(redirect_handler))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state);

    security_headers::apply(router).layer(tracing::layer())
}

/// Constructs the health probe router.
pub fn probe_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .with_state(state)
}
