//! Claims screen entry handling.
//!
//! The claims list itself (data, rendering) lives with the host application.
//! This layer decides whether that content may be shown at all, and hands
//! control to the login flow when it may not.

use std::sync::Arc;

use tracing::{info, warn};

use claimdesk_infra::{IdentityStore, IdentityStoreError};
use claimdesk_session::{NavigationVerdict, evaluate, explain};

/// Login flow collaborator.
///
/// Implementations present the login screen. The entry handler calls
/// `launch` synchronously before reporting a redirect, so no claims content
/// can flash first.
pub trait LoginFlow: Send + Sync {
    fn launch(&self);
}

/// What the host screen must do after the entry check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryDecision {
    /// Render the claims content.
    Proceed,

    /// The login flow has been launched; claims content must not render.
    Redirected,
}

/// Entry handler for the claims screen.
///
/// Collaborators arrive by plain dependency injection; no UI framework
/// lifecycle is involved.
pub struct ClaimsScreenEntry {
    store: Arc<dyn IdentityStore>,
    login_flow: Arc<dyn LoginFlow>,
}

impl ClaimsScreenEntry {
    pub fn new(store: Arc<dyn IdentityStore>, login_flow: Arc<dyn LoginFlow>) -> Self {
        Self { store, login_flow }
    }

    /// Run the session-validity check for one screen-entry event.
    ///
    /// Takes a snapshot from the store, classifies it, and on an incomplete
    /// identity launches the login flow before returning. A store failure is
    /// surfaced as an error without touching the login flow.
    pub fn on_enter(&self) -> Result<EntryDecision, IdentityStoreError> {
        let snapshot = self.store.snapshot()?;

        match evaluate(&snapshot) {
            NavigationVerdict::Allow => {
                info!(
                    user_id = snapshot.user_id.as_deref(),
                    "claims screen entry allowed"
                );
                Ok(EntryDecision::Proceed)
            }
            NavigationVerdict::RedirectToLogin => {
                let explanation = explain(&snapshot);
                warn!(reason = %explanation.reason, "claims screen entry redirected to login");
                self.login_flow.launch();
                Ok(EntryDecision::Redirected)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
