use thiserror::Error;

use claimdesk_session::{SessionRecord, StoredIdentity};

/// Identity store operation error.
///
/// These are **infrastructure errors** (I/O, decoding, lock state). An absent
/// session is not one of them: the store reports it as an empty snapshot and
/// the gate classifies that into a redirect.
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    /// Underlying storage failed (I/O, lock poisoning).
    #[error("identity storage failed: {0}")]
    Storage(String),

    /// A persisted session document exists but cannot be decoded.
    #[error("persisted session document is corrupt: {0}")]
    Corrupt(String),
}

/// Device-local identity storage.
///
/// Reads must be cheap and synchronous: the claims screen takes a snapshot on
/// its entry path, before anything renders. Hosts with asynchronous storage
/// must resolve a snapshot ahead of evaluation; no suspension happens behind
/// this trait.
pub trait IdentityStore: Send + Sync {
    /// Current persisted identity; an empty store yields an empty snapshot.
    fn snapshot(&self) -> Result<StoredIdentity, IdentityStoreError>;

    /// Persist the record of a newly established session, replacing any
    /// previous one.
    fn establish(&self, record: &SessionRecord) -> Result<(), IdentityStoreError>;

    /// Remove the persisted session (logout or explicit invalidation).
    /// Clearing an empty store is a no-op, not an error.
    fn clear(&self) -> Result<(), IdentityStoreError>;
}
