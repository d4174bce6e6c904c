//! Session record written at successful login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use claimdesk_core::{DomainError, DomainResult};

use crate::StoredIdentity;

/// The record the identity store persists for an established session.
///
/// # Invariants
/// - `user_id` and `user_name` are non-blank and trimmed.
/// - Construction goes through [`SessionRecord::establish`], so the store
///   never persists an identity the gate would reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub user_name: String,

    /// When the session was established (business time, supplied by the login
    /// flow).
    pub logged_in_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Validate login fields and build the record to persist.
    pub fn establish(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        logged_in_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let user_id = user_id.into();
        let user_name = user_name.into();

        if user_id.trim().is_empty() {
            return Err(DomainError::validation("user id cannot be blank"));
        }
        if user_name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be blank"));
        }

        Ok(Self {
            user_id: user_id.trim().to_string(),
            user_name: user_name.trim().to_string(),
            logged_in_at,
        })
    }

    /// Read-side snapshot of this record.
    pub fn identity(&self) -> StoredIdentity {
        StoredIdentity {
            user_id: Some(self.user_id.clone()),
            user_name: Some(self.user_name.clone()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
