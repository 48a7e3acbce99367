//! # ShortLink API
//!
//! REST API and redirect server for `ShortLink` custom resources
//! (`shortlinks.urlshortener.cedi.dev/v1alpha1`).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The shortlink entity, store errors and the repository trait
//! - **Application Layer** ([`application`]) - CRUD orchestration and hit counting
//! - **Infrastructure Layer** ([`infrastructure`]) - Kubernetes and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, content negotiation and middleware
//!
//! ## Content negotiation
//!
//! REST handlers answer in the media type named by the `Accept` header:
//! `application/json` or `text/plain`. Any other value yields the status
//! code with an empty body.
//!
//! ## Quick Start
//!
//! ```bash
//! # Against the cluster in the current kubeconfig context
//! cargo run
//!
//! # Without a cluster
//! STORE_BACKEND=memory cargo run
//!
//! curl -X POST -H 'Accept: application/json' \
//!      -d '{"target":"https://example.com"}' \
//!      http://localhost:8443/api/v1/shortlink/home
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortlinkError, ShortlinkService};
    pub use crate::domain::StoreError;
    pub use crate::domain::entities::{ShortLink, ShortLinkSpec, ShortLinkStatus};
    pub use crate::domain::repositories::ShortlinkRepository;
    pub use crate::state::AppState;
}
