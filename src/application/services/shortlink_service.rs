//! Shortlink CRUD orchestration.

use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::domain::StoreError;
use crate::domain::entities::{ShortLink, ShortLinkSpec};
use crate::domain::repositories::ShortlinkRepository;

/// A store failure tagged with the call that produced it.
///
/// The HTTP layer maps each variant to a status code; only lookups and
/// deletes can surface as 404.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortlinkError {
    /// `list` or `get`, including the read preceding an update or delete.
    #[error("{0}")]
    Lookup(StoreError),

    #[error("{0}")]
    Create(StoreError),

    #[error("{0}")]
    Update(StoreError),

    #[error("{0}")]
    Delete(StoreError),
}

impl ShortlinkError {
    /// The underlying store error.
    pub fn store_error(&self) -> &StoreError {
        match self {
            Self::Lookup(e) | Self::Create(e) | Self::Update(e) | Self::Delete(e) => e,
        }
    }

    /// Name of the failed call, for logs.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Lookup(_) => "lookup",
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}

/// Service for reading and writing shortlinks through a repository.
///
/// Holds no state of its own; every call goes to the store.
pub struct ShortlinkService {
    repository: Arc<dyn ShortlinkRepository>,
}

impl ShortlinkService {
    /// Creates a service over `repository`.
    pub fn new(repository: Arc<dyn ShortlinkRepository>) -> Self {
        Self { repository }
    }

    /// Lists every shortlink.
    pub async fn list(&self) -> Result<Vec<ShortLink>, ShortlinkError> {
        self.repository.list().await.map_err(ShortlinkError::Lookup)
    }

    /// Fetches a shortlink by name.
    pub async fn get(&self, name: &str) -> Result<ShortLink, ShortlinkError> {
        self.repository
            .get(name)
            .await
            .map_err(ShortlinkError::Lookup)
    }

    /// Creates a shortlink named `name` and returns it as stored.
    pub async fn create(
        &self,
        name: String,
        spec: ShortLinkSpec,
    ) -> Result<ShortLink, ShortlinkError> {
        let shortlink = ShortLink::new(name, spec);

        self.repository
            .create(&shortlink)
            .await
            .map_err(ShortlinkError::Create)
    }

    /// Replaces the whole spec of `existing` with `spec`.
    ///
    /// `existing` must come from [`Self::get`]; fields omitted from `spec`
    /// take their defaults, not the previous values.
    pub async fn replace_spec(
        &self,
        mut existing: ShortLink,
        spec: ShortLinkSpec,
    ) -> Result<(), ShortlinkError> {
        existing.spec = spec;

        self.repository
            .update(&existing)
            .await
            .map_err(ShortlinkError::Update)
    }

    /// Deletes a shortlink after confirming it exists.
    pub async fn delete(&self, name: &str) -> Result<(), ShortlinkError> {
        let shortlink = self.get(name).await?;

        self.repository
            .delete(&shortlink)
            .await
            .map_err(ShortlinkError::Delete)
    }

    /// Resolves a shortlink for redirecting and counts the hit.
    ///
    /// A failed status write is logged and does not fail the lookup.
    pub async fn resolve(&self, name: &str) -> Result<ShortLink, ShortlinkError> {
        let mut shortlink = self.get(name).await?;
        shortlink.status.count = shortlink.status.count.saturating_add(1);

        if let Err(e) = self.repository.update_status(&shortlink).await {
            warn!(shortlink = %name, error = %e, "Failed to record shortlink hit");
        }

        Ok(shortlink)
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
