//! Response representation chosen from the raw `Accept` header.
//!
//! The header value is compared verbatim against the two supported media
//! types. There is no quality-value parsing and no wildcard matching: a
//! request with `Accept: */*`, `Accept: application/json; q=1` or no
//! `Accept` header at all gets the status code and an empty body.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::convert::Infallible;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

/// Representation selected for a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextPlain,
    ApplicationJson,
    /// Anything else. Responses carry no body.
    Unsupported,
}

impl ContentType {
    /// Selects a representation by exact match on `accept`.
    pub fn from_accept(accept: &str) -> Self {
        match accept {
            TEXT_PLAIN => Self::TextPlain,
            APPLICATION_JSON => Self::ApplicationJson,
            _ => Self::Unsupported,
        }
    }

    /// Builds a `200 OK` carrying `value` as JSON or `text()` as plain text.
    ///
    /// `text` is only evaluated for [`ContentType::TextPlain`].
    pub fn render<T, F>(self, value: &T, text: F) -> Response
    where
        T: Serialize,
        F: FnOnce() -> String,
    {
        match self {
            Self::TextPlain => plain_text(StatusCode::OK, text()),
            Self::ApplicationJson => (StatusCode::OK, Json(value)).into_response(),
            Self::Unsupported => StatusCode::OK.into_response(),
        }
    }

    /// Builds a response whose body is `message` in this representation.
    ///
    /// JSON bodies are a bare JSON string. An empty message always yields an
    /// empty body.
    pub fn render_message(self, status: StatusCode, message: String) -> Response {
        if message.is_empty() {
            return status.into_response();
        }

        match self {
            Self::TextPlain => plain_text(status, message),
            Self::ApplicationJson => (status, Json(message)).into_response(),
            Self::Unsupported => status.into_response(),
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

/// Extractor for the request's `Accept` header.
///
/// Keeps the raw value for tracing alongside the selected [`ContentType`].
/// Never rejects.
#[derive(Debug, Clone)]
pub struct Accept {
    pub raw: String,
    pub content_type: ContentType,
}

impl<S> FromRequestParts<S> for Accept
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            content_type: ContentType::from_accept(&raw),
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_from_accept_exact_match_only() {
        assert_eq!(ContentType::from_accept("text/plain"), ContentType::TextPlain);
        assert_eq!(
            ContentType::from_accept("application/json"),
            ContentType::ApplicationJson
        );
        assert_eq!(ContentType::from_accept(""), ContentType::Unsupported);
        assert_eq!(ContentType::from_accept("*/*"), ContentType::Unsupported);
        assert_eq!(
            ContentType::from_accept("application/json; q=0.9"),
            ContentType::Unsupported
        );
        assert_eq!(ContentType::from_accept("Text/Plain"), ContentType::Unsupported);
    }

    #[tokio::test]
    async fn test_render_json() {
        let response = ContentType::ApplicationJson.render(&vec!["a", "b"], || unreachable!());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"["a","b"]"#);
    }

    #[tokio::test]
    async fn test_render_text() {
        let response = ContentType::TextPlain.render(&(), || "hello".to_string());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            TEXT_PLAIN
        );
        assert_eq!(body_string(response).await, "hello");
    }

    #[tokio::test]
    async fn test_render_unsupported_has_no_body() {
        let response = ContentType::Unsupported.render(&"value", || "text".to_string());

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_render_message_json_is_bare_string() {
        let response = ContentType::ApplicationJson
            .render_message(StatusCode::NOT_FOUND, "gone".to_string());

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#""gone""#);
    }

    #[tokio::test]
    async fn test_render_message_empty() {
        let response = ContentType::ApplicationJson.render_message(StatusCode::OK, String::new());

        assert!(body_string(response).await.is_empty());
    }
}
