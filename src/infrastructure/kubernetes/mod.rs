//! Kubernetes control-plane integration.
//!
//! - [`crd`] - `ShortLink` custom resource types and conversions
//! - [`shortlink_repository`] - repository backed by the API server

pub mod crd;
pub mod shortlink_repository;

pub use crd::{ShortLinkResource, ShortLinkResourceSpec, ShortLinkResourceStatus};
pub use shortlink_repository::KubeShortlinkRepository;
