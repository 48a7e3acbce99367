//! Backing-store error type.

use thiserror::Error;

/// Error returned by a [`crate::domain::repositories::ShortlinkRepository`].
///
/// `Display` yields the store's message unchanged; it is what HTTP callers
/// see in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The named shortlink does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other store failure: transport, conflict, schema rejection.
    #[error("{0}")]
    Internal(String),
}

impl StoreError {
    /// Classifies an opaque store message.
    ///
    /// Messages containing `"not found"` become [`StoreError::NotFound`],
    /// everything else [`StoreError::Internal`].
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("not found") {
            Self::NotFound(message)
        } else {
            Self::Internal(message)
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The raw message.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Internal(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_message_classifies_not_found() {
        let err = StoreError::from_message("shortlink missing not found");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "shortlink missing not found");
    }

    #[test]
    fn test_from_message_defaults_to_internal() {
        let err = StoreError::from_message("connection refused");
        assert!(!err.is_not_found());
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn test_from_message_is_case_sensitive() {
        assert!(!StoreError::from_message("Not Found").is_not_found());
    }
}
