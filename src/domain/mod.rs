//! Domain layer containing the shortlink entity, store errors and the
//! repository contract.
//!
//! The domain layer knows nothing about HTTP or Kubernetes. The backing store
//! is reached only through [`repositories::ShortlinkRepository`]; concrete
//! stores live in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - `ShortLink`, its spec and status
//! - [`error`] - typed backing-store error
//! - [`repositories`] - data access trait

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
