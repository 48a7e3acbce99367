//! Business logic services for the application layer.

pub mod shortlink_service;

pub use shortlink_service::{ShortlinkError, ShortlinkService};
