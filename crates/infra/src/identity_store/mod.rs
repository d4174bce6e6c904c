//! Device-local identity storage boundary.
//!
//! This module defines an infrastructure-facing abstraction for reading and
//! writing the persisted session record without making any storage
//! assumptions.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryIdentityStore;
pub use json_file::JsonFileIdentityStore;
pub use r#trait::{IdentityStore, IdentityStoreError};
