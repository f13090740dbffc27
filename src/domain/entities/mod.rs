//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! is carried by a separate `New*` struct, mirroring the stored record minus
//! the fields the store assigns itself.

pub mod link;

pub use link::{Link, NewLink};
