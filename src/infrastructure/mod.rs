//! Infrastructure layer for data storage.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete link store.
//!
//! # Modules
//!
//! - [`persistence`] - Concurrency-safe in-memory repository implementation

pub mod persistence;
