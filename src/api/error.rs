//! HTTP error responses for the shortlink API.
//!
//! # Status table
//!
//! | Failed call | Store error kind | Status |
//! |---|---|---|
//! | list / get (incl. the get before update and delete) | `NotFound` | 404 |
//! | list / get | `Internal` | 500 |
//! | delete | `NotFound` | 404 |
//! | delete | `Internal` | 500 |
//! | create | any | 500 |
//! | update | any | 500 |
//! | reading or parsing the request body | - | 500 |
//!
//! The body is the raw error message in the negotiated representation; there
//! is no error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::negotiation::ContentType;
use crate::application::services::ShortlinkError;

/// Maps a failed store call to its HTTP status.
pub fn status_for(err: &ShortlinkError) -> StatusCode {
    let not_found = err.store_error().is_not_found();

    match err {
        ShortlinkError::Lookup(_) | ShortlinkError::Delete(_) if not_found => StatusCode::NOT_FOUND,
        ShortlinkError::Lookup(_)
        | ShortlinkError::Delete(_)
        | ShortlinkError::Create(_)
        | ShortlinkError::Update(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// An error response: status code plus raw message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    content_type: ContentType,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            status,
            message: message.into(),
            content_type,
        }
    }

    /// A 500 carrying `message`.
    pub fn internal(message: impl Into<String>, content_type: ContentType) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, content_type)
    }

    /// Applies the status table to a failed store call.
    pub fn from_shortlink_error(err: &ShortlinkError, content_type: ContentType) -> Self {
        Self::new(status_for(err), err.store_error().message(), content_type)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.content_type.render_message(self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;

    fn not_found() -> StoreError {
        StoreError::from_message("shortlink missing not found")
    }

    fn internal() -> StoreError {
        StoreError::from_message("connection refused")
    }

    #[test]
    fn test_status_table() {
        let cases = [
            (ShortlinkError::Lookup(not_found()), StatusCode::NOT_FOUND),
            (ShortlinkError::Lookup(internal()), StatusCode::INTERNAL_SERVER_ERROR),
            (ShortlinkError::Delete(not_found()), StatusCode::NOT_FOUND),
            (ShortlinkError::Delete(internal()), StatusCode::INTERNAL_SERVER_ERROR),
            (ShortlinkError::Create(not_found()), StatusCode::INTERNAL_SERVER_ERROR),
            (ShortlinkError::Create(internal()), StatusCode::INTERNAL_SERVER_ERROR),
            (ShortlinkError::Update(not_found()), StatusCode::INTERNAL_SERVER_ERROR),
            (ShortlinkError::Update(internal()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err:?}");
        }
    }

    #[test]
    fn test_from_shortlink_error_keeps_raw_message() {
        let err = ApiError::from_shortlink_error(
            &ShortlinkError::Lookup(not_found()),
            ContentType::TextPlain,
        );

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "shortlink missing not found");
    }
}
