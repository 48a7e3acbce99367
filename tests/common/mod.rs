#![allow(dead_code)]

use async_trait::async_trait;
use shortlink_api::domain::StoreError;
use shortlink_api::domain::entities::{ShortLink, ShortLinkSpec};
use shortlink_api::domain::repositories::ShortlinkRepository;
use shortlink_api::infrastructure::persistence::InMemoryShortlinkRepository;
use shortlink_api::state::AppState;
use std::sync::Arc;

pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain";

pub fn test_link(name: &str, target: &str) -> ShortLink {
    ShortLink::new(name, ShortLinkSpec::with_target(target))
}

pub fn create_test_repository(shortlinks: Vec<ShortLink>) -> Arc<InMemoryShortlinkRepository> {
    Arc::new(InMemoryShortlinkRepository::with_shortlinks(shortlinks))
}

pub fn create_test_state(shortlinks: Vec<ShortLink>) -> AppState {
    AppState::new(create_test_repository(shortlinks))
}

/// Repository whose calls fail with a fixed message.
///
/// The message is classified like a control-plane error, so any message
/// containing "not found" is a [`StoreError::NotFound`]. Set `get_ok` to
/// let lookups succeed and only fail the writes.
pub struct FailingRepository {
    pub message: String,
    pub get_ok: bool,
}

impl FailingRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            get_ok: false,
        }
    }

    pub fn writes_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            get_ok: true,
        }
    }

    fn error(&self) -> StoreError {
        StoreError::from_message(self.message.clone())
    }
}

#[async_trait]
impl ShortlinkRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<ShortLink>, StoreError> {
        Err(self.error())
    }

    async fn get(&self, name: &str) -> Result<ShortLink, StoreError> {
        if self.get_ok {
            Ok(test_link(name, "https://example.com"))
        } else {
            Err(self.error())
        }
    }

    async fn create(&self, _shortlink: &ShortLink) -> Result<ShortLink, StoreError> {
        Err(self.error())
    }

    async fn update(&self, _shortlink: &ShortLink) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn delete(&self, _shortlink: &ShortLink) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn update_status(&self, _shortlink: &ShortLink) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error())
    }
}

pub fn create_failing_state(repository: FailingRepository) -> AppState {
    AppState::new(Arc::new(repository))
}
