//! Repository trait definitions for the domain layer.
//!
//! Implementations live in [`crate::infrastructure`]:
//!
//! - [`crate::infrastructure::kubernetes::KubeShortlinkRepository`] - custom resources
//!   in a Kubernetes API server
//! - [`crate::infrastructure::persistence::InMemoryShortlinkRepository`] - process-local
//!   store for development and tests
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod shortlink_repository;

pub use shortlink_repository::ShortlinkRepository;

#[cfg(test)]
pub use shortlink_repository::MockShortlinkRepository;
