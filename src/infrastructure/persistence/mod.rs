//! Concrete repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryLinkRepository`] - sharded in-memory link store

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
