//! Process-local repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryShortlinkRepository`] - shortlinks held in memory

pub mod memory_shortlink_repository;

pub use memory_shortlink_repository::InMemoryShortlinkRepository;
