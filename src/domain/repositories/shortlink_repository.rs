//! Repository trait for shortlink resources.

use crate::domain::entities::ShortLink;
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// CRUD access to the system of record for shortlinks.
///
/// Consistency, persistence and schema enforcement belong to the store.
/// Callers only rely on the [`StoreError`] kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkRepository: Send + Sync {
    /// Lists all shortlinks, ordered by name.
    async fn list(&self) -> Result<Vec<ShortLink>, StoreError>;

    /// Fetches a shortlink by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no shortlink has this name.
    async fn get(&self, name: &str) -> Result<ShortLink, StoreError>;

    /// Creates a shortlink and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Internal`] if the name is taken or the spec
    /// violates the schema.
    async fn create(&self, shortlink: &ShortLink) -> Result<ShortLink, StoreError>;

    /// Replaces the spec of an existing shortlink. Status is left untouched.
    async fn update(&self, shortlink: &ShortLink) -> Result<(), StoreError>;

    /// Removes a shortlink.
    async fn delete(&self, shortlink: &ShortLink) -> Result<(), StoreError>;

    /// Writes the status of an existing shortlink. Spec is left untouched.
    async fn update_status(&self, shortlink: &ShortLink) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
