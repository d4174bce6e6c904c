//! `claimdesk-infra` — storage collaborators for the session layer.
//!
//! Domain crates stay storage-agnostic; everything that touches disk or
//! process-local state lives here.

pub mod identity_store;

pub use identity_store::{
    IdentityStore, IdentityStoreError, InMemoryIdentityStore, JsonFileIdentityStore,
};
