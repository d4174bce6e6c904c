//! Session lifecycle operations (the login flow's write side).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use claimdesk_core::DomainError;
use claimdesk_infra::{IdentityStore, IdentityStoreError};
use claimdesk_session::SessionRecord;

/// Session lifecycle error.
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// Login fields failed validation; nothing was persisted.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The identity store failed.
    #[error(transparent)]
    Store(#[from] IdentityStoreError),
}

/// Records and clears the persisted session around login/logout.
///
/// The gate never mutates identity state; every write goes through here.
pub struct SessionService {
    store: Arc<dyn IdentityStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Persist the session for a user that just authenticated.
    pub fn login(
        &self,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<SessionRecord, SessionServiceError> {
        let record = SessionRecord::establish(user_id, user_name, at)?;
        self.store.establish(&record)?;

        info!(user_id = %record.user_id, "session established");
        Ok(record)
    }

    /// Clear the persisted session (logout or explicit invalidation).
    pub fn logout(&self) -> Result<(), SessionServiceError> {
        self.store.clear()?;
        info!("session cleared");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
