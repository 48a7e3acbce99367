//! Application layer services.
//!
//! Services consume the repository trait and give HTTP handlers a small API
//! whose errors say which store call failed.
//!
//! # Available Services
//!
//! - [`services::shortlink_service::ShortlinkService`] - shortlink CRUD and hit counting

pub mod services;
