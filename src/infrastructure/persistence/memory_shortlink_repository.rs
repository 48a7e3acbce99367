//! Process-local shortlink store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{ShortLink, validate_name};
use crate::domain::error::StoreError;
use crate::domain::repositories::ShortlinkRepository;

/// Resource name used in store messages, `<plural>.<group>`.
const RESOURCE: &str = "shortlinks.urlshortener.cedi.dev";

/// In-memory repository that enforces the same schema as the control plane.
///
/// Used for local development (`STORE_BACKEND=memory`) and tests. Entries
/// are kept in a `BTreeMap` so listing is ordered by name, like the API
/// server. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryShortlinkRepository {
    items: RwLock<BTreeMap<String, ShortLink>>,
}

impl InMemoryShortlinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory shortlink store");
        Self::default()
    }

    /// Creates a store pre-populated with `shortlinks`, keyed by name.
    pub fn with_shortlinks(shortlinks: impl IntoIterator<Item = ShortLink>) -> Self {
        let items = shortlinks
            .into_iter()
            .map(|shortlink| (shortlink.name.clone(), shortlink))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }

    fn not_found(name: &str) -> StoreError {
        StoreError::NotFound(format!("{RESOURCE} \"{name}\" not found"))
    }
}

#[async_trait]
impl ShortlinkRepository for InMemoryShortlinkRepository {
    async fn list(&self) -> Result<Vec<ShortLink>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, name: &str) -> Result<ShortLink, StoreError> {
        self.items
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| Self::not_found(name))
    }

    async fn create(&self, shortlink: &ShortLink) -> Result<ShortLink, StoreError> {
        validate_name(&shortlink.name)?;
        shortlink.spec.validate_schema(&shortlink.name)?;

        let mut items = self.items.write().await;
        if items.contains_key(&shortlink.name) {
            return Err(StoreError::Internal(format!(
                "{RESOURCE} \"{}\" already exists",
                shortlink.name
            )));
        }

        // Status is a subresource; create never sets it.
        let stored = ShortLink::new(shortlink.name.clone(), shortlink.spec.clone());
        items.insert(stored.name.clone(), stored.clone());

        Ok(stored)
    }

    async fn update(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let stored = items
            .get_mut(&shortlink.name)
            .ok_or_else(|| Self::not_found(&shortlink.name))?;

        shortlink.spec.validate_schema(&shortlink.name)?;
        stored.spec = shortlink.spec.clone();

        Ok(())
    }

    async fn delete(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .remove(&shortlink.name)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(&shortlink.name))
    }

    async fn update_status(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let stored = items
            .get_mut(&shortlink.name)
            .ok_or_else(|| Self::not_found(&shortlink.name))?;

        stored.status = shortlink.status;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
