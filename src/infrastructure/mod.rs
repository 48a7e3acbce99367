//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`kubernetes`] - `ShortLink` custom resources in a Kubernetes API server
//! - [`persistence`] - in-memory store for development and tests

pub mod kubernetes;
pub mod persistence;
