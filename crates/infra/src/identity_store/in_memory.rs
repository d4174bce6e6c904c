use std::sync::RwLock;

use claimdesk_session::{SessionRecord, StoredIdentity};

use super::r#trait::{IdentityStore, IdentityStoreError};

/// In-memory identity store.
///
/// Intended for tests/dev. Holds at most one session record, like the
/// on-device store it stands in for.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    record: RwLock<Option<SessionRecord>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-established session (test convenience).
    pub fn with_record(record: SessionRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn snapshot(&self) -> Result<StoredIdentity, IdentityStoreError> {
        let guard = self
            .record
            .read()
            .map_err(|_| IdentityStoreError::Storage("lock poisoned".to_string()))?;

        Ok(guard.as_ref().map(SessionRecord::identity).unwrap_or_default())
    }

    fn establish(&self, record: &SessionRecord) -> Result<(), IdentityStoreError> {
        let mut guard = self
            .record
            .write()
            .map_err(|_| IdentityStoreError::Storage("lock poisoned".to_string()))?;

        *guard = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        let mut guard = self
            .record
            .write()
            .map_err(|_| IdentityStoreError::Storage("lock poisoned".to_string()))?;

        *guard = None;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
