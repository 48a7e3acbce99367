//! Liveness and readiness probe handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, ReadinessChecks, ReadinessResponse};
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Returns `ok` whenever the process can answer HTTP.
pub async fn healthz_handler() -> &'static str {
    "ok"
}

/// Readiness probe.
///
/// # Endpoint
///
/// `GET /readyz`
///
/// # Response Codes
///
/// - **200 OK**: the backing store is reachable
/// - **503 Service Unavailable**: the backing store check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "ready",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok" }
///   }
/// }
/// ```
pub async fn readyz_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let store_check = check_store(&state).await;
    let ready = store_check.status == "ok";

    let response = ReadinessResponse {
        status: if ready { "ready" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: ReadinessChecks { store: store_check },
    };

    if ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the shortlink store answers.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.shortlink_service.ping().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}
