//! Handler for shortlink redirects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, instrument};

use crate::api::error::ApiError;
use crate::api::negotiation::ContentType;
use crate::domain::entities::ShortLinkSpec;
use crate::state::AppState;

/// HTML page that refreshes to the target after a delay.
///
/// Renders `templates/redirect.html`.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub target: String,
    pub after: i32,
}

/// Returns true if `spec` is served as a `Location` redirect rather than a page.
///
/// 300 and 304 carry no usable `Location`, and 200 or a delay needs the page.
pub fn is_header_redirect(spec: &ShortLinkSpec) -> bool {
    spec.after == 0 && matches!(spec.code, 301 | 302 | 303 | 305 | 307 | 308)
}

/// Redirects `/{name}` to the shortlink's target.
///
/// # Endpoint
///
/// `GET /{name}`
///
/// # Behavior
///
/// - 301/302/303/305/307/308 with no delay: that status and a `Location` header
/// - 200, 300, 304, or a non-zero `after`: 200 with an HTML page that
///   refreshes to the target after `after` seconds
///
/// Each resolution increments `status.count`. A failed count write is logged
/// and does not affect the response.
///
/// # Errors
///
/// 404 if the shortlink does not exist, 500 for other store failures.
#[instrument(name = "shortlink.redirect", skip_all, fields(shortlink = %name))]
pub async fn redirect_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let shortlink = state.shortlink_service.resolve(&name).await.map_err(|e| {
        error!(shortlink = %name, error = %e, "Failed to resolve ShortLink");
        ApiError::from_shortlink_error(&e, ContentType::TextPlain)
    })?;

    let spec = shortlink.spec;

    if !is_header_redirect(&spec) {
        debug!(target_url = %spec.target, after = spec.after, "Rendering redirect page");
        return Ok(RedirectTemplate {
            target: spec.target,
            after: spec.after,
        }
        .into_response());
    }

    let status = u16::try_from(spec.code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| {
            ApiError::internal(
                format!("invalid redirect code {}", spec.code),
                ContentType::TextPlain,
            )
        })?;

    debug!(target_url = %spec.target, code = spec.code, "Redirecting");
    Ok((status, [(header::LOCATION, spec.target)]).into_response())
}
