//! Response bodies that are not domain entities.
//!
//! Shortlinks themselves are serialized straight from
//! [`crate::domain::entities::ShortLink`].

pub mod health;
