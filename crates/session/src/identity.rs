use serde::{Deserialize, Serialize};

/// Locally persisted authentication state for the current device/app install.
///
/// A snapshot may be entirely empty (never logged in, or logged out),
/// partially populated, or fully populated. The gate only reads snapshots;
/// writing and clearing them belongs to the login/logout collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredIdentity {
    /// Opaque identifier of the logged-in user.
    pub user_id: Option<String>,

    /// Display name of the logged-in user.
    pub user_name: Option<String>,
}

impl StoredIdentity {
    /// Snapshot with no identity fields set (no session on this device).
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when `user_id` carries a usable (non-blank) value.
    pub fn has_user_id(&self) -> bool {
        is_present(&self.user_id)
    }

    /// True when `user_name` carries a usable (non-blank) value.
    pub fn has_user_name(&self) -> bool {
        is_present(&self.user_name)
    }
}

// A whitespace-only value cannot identify a user; treat it as absent.
fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}
