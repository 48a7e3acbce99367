//! Handlers for the shortlink REST resource.
//!
//! Every handler runs in one span named after its operation, tagged with the
//! shortlink name and the raw `Accept` value. Bodies are only written for
//! `Accept: text/plain` and `Accept: application/json`; see
//! [`crate::api::negotiation`].

use axum::{
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::api::error::ApiError;
use crate::api::negotiation::{Accept, ContentType};
use crate::application::services::ShortlinkError;
use crate::domain::entities::{ShortLink, ShortLinkSpec};
use crate::state::AppState;

/// Logs a failed store call and converts it with the status table.
fn store_failure(
    err: ShortlinkError,
    operation: &'static str,
    name: &str,
    content_type: ContentType,
) -> ApiError {
    error!(
        operation,
        shortlink = %name,
        step = err.step(),
        error = %err,
        "ShortLink store call failed"
    );
    ApiError::from_shortlink_error(&err, content_type)
}

/// Reads a [`ShortLinkSpec`] from the request body. Any failure is a 500.
fn parse_spec(
    body: Result<Bytes, BytesRejection>,
    operation: &'static str,
    name: &str,
    content_type: ContentType,
) -> Result<ShortLinkSpec, ApiError> {
    let bytes = body.map_err(|rejection| {
        error!(operation, shortlink = %name, error = %rejection, "Failed to read request body");
        ApiError::internal(rejection.body_text(), content_type)
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!(operation, shortlink = %name, error = %e, "Failed to parse ShortLink spec");
        ApiError::internal(e.to_string(), content_type)
    })
}

/// Lists all shortlinks.
///
/// # Endpoint
///
/// `GET /api/v1/shortlink/`
///
/// # Response
///
/// - `application/json`: array of `{name, spec, status}`, `[]` when empty
/// - `text/plain`: one `name: target` line per shortlink, empty when none
///
/// # Errors
///
/// 404 if the store reports "not found", 500 otherwise.
#[instrument(
    name = "shortlink.list",
    skip_all,
    fields(accepted_content_type = %accept.raw)
)]
pub async fn list_shortlinks_handler(
    State(state): State<AppState>,
    accept: Accept,
) -> Result<Response, ApiError> {
    let content_type = accept.content_type;

    let shortlinks = state
        .shortlink_service
        .list()
        .await
        .map_err(|e| store_failure(e, "list", "", content_type))?;

    Ok(content_type.render(&shortlinks, || {
        shortlinks.iter().map(ShortLink::to_text_line).collect()
    }))
}

/// Returns one shortlink.
///
/// # Endpoint
///
/// `GET /api/v1/shortlink/{name}`
///
/// # Response
///
/// - `application/json`: `{name, spec, status}`
/// - `text/plain`: the target URL
///
/// # Errors
///
/// 404 if the store reports "not found", 500 otherwise.
#[instrument(
    name = "shortlink.get",
    skip_all,
    fields(shortlink = %name, accepted_content_type = %accept.raw)
)]
pub async fn get_shortlink_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    accept: Accept,
) -> Result<Response, ApiError> {
    let content_type = accept.content_type;

    let shortlink = state
        .shortlink_service
        .get(&name)
        .await
        .map_err(|e| store_failure(e, "get", &name, content_type))?;

    Ok(content_type.render(&shortlink, || shortlink.spec.target.clone()))
}

/// Creates a shortlink named after the path segment.
///
/// # Endpoint
///
/// `POST /api/v1/shortlink/{name}`
///
/// # Request Body
///
/// ```json
/// { "target": "https://example.com", "code": 307, "after": 0 }
/// ```
///
/// `code` defaults to 307 and `after` to 0.
///
/// # Response
///
/// The shortlink as stored: JSON object, or a `name: target` line.
///
/// # Errors
///
/// 500 for an unreadable or malformed body and for any store failure.
#[instrument(
    name = "shortlink.create",
    skip_all,
    fields(shortlink = %name, accepted_content_type = %accept.raw)
)]
pub async fn create_shortlink_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    accept: Accept,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let content_type = accept.content_type;

    let spec = parse_spec(body, "create", &name, content_type)?;

    let shortlink = state
        .shortlink_service
        .create(name.clone(), spec)
        .await
        .map_err(|e| store_failure(e, "create", &name, content_type))?;

    Ok(content_type.render(&shortlink, || shortlink.to_text_line()))
}

/// Replaces the spec of an existing shortlink.
///
/// # Endpoint
///
/// `PUT /api/v1/shortlink/{name}`
///
/// # Request Body
///
/// A full spec, as for create. Omitted fields take their defaults rather
/// than keeping the stored values.
///
/// # Response
///
/// 200 with an empty body.
///
/// # Errors
///
/// - 404 if the shortlink does not exist
/// - 500 for an unreadable or malformed body or a failed update
#[instrument(
    name = "shortlink.update",
    skip_all,
    fields(shortlink = %name, accepted_content_type = %accept.raw)
)]
pub async fn update_shortlink_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    accept: Accept,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let content_type = accept.content_type;

    let existing = state
        .shortlink_service
        .get(&name)
        .await
        .map_err(|e| store_failure(e, "update", &name, content_type))?;

    let spec = parse_spec(body, "update", &name, content_type)?;

    state
        .shortlink_service
        .replace_spec(existing, spec)
        .await
        .map_err(|e| store_failure(e, "update", &name, content_type))?;

    Ok(StatusCode::OK.into_response())
}

/// Deletes a shortlink.
///
/// # Endpoint
///
/// `DELETE /api/v1/shortlink/{name}`
///
/// # Response
///
/// 200 with an empty body.
///
/// # Errors
///
/// 404 if the store reports "not found" on lookup or delete, 500 otherwise.
#[instrument(
    name = "shortlink.delete",
    skip_all,
    fields(shortlink = %name, accepted_content_type = %accept.raw)
)]
pub async fn delete_shortlink_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    accept: Accept,
) -> Result<Response, ApiError> {
    let content_type = accept.content_type;

    state
        .shortlink_service
        .delete(&name)
        .await
        .map_err(|e| store_failure(e, "delete", &name, content_type))?;

    Ok(StatusCode::OK.into_response())
}
