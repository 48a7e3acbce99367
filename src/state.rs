//! Shared application state.

use std::sync::Arc;

use crate::application::services::ShortlinkService;
use crate::domain::repositories::ShortlinkRepository;

/// State injected into every handler.
///
/// Cheap to clone; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub shortlink_service: Arc<ShortlinkService>,
}

impl AppState {
    /// Builds the state around a shortlink repository.
    pub fn new(repository: Arc<dyn ShortlinkRepository>) -> Self {
        Self {
            shortlink_service: Arc::new(ShortlinkService::new(repository)),
        }
    }
}
