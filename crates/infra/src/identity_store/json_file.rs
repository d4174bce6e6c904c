//! JSON-document identity store (device-local persistence).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use claimdesk_session::{SessionRecord, StoredIdentity};

use super::r#trait::{IdentityStore, IdentityStoreError};

/// Identity store backed by a single JSON document on local disk.
///
/// This is the on-device store the login flow writes at a successful sign-in
/// and removes again at logout: one small document holding the current
/// session record.
#[derive(Debug, Clone)]
pub struct JsonFileIdentityStore {
    path: PathBuf,
}

impl JsonFileIdentityStore {
    /// Store at an explicit document path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user location.
    ///
    /// `CLAIMDESK_DATA_DIR` overrides the platform data directory; otherwise
    /// the document lives at `<data dir>/claimdesk/session.json`.
    pub fn open_default() -> Result<Self, IdentityStoreError> {
        let path = default_document_path()
            .map_err(|e| IdentityStoreError::Storage(format!("{e:#}")))?;
        Ok(Self::at_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<Option<SessionRecord>, IdentityStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(IdentityStoreError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let record = serde_json::from_str(&raw).map_err(|e| {
            IdentityStoreError::Corrupt(format!("{}: {e}", self.path.display()))
        })?;

        Ok(Some(record))
    }
}

fn default_document_path() -> anyhow::Result<PathBuf> {
    let base = match std::env::var_os("CLAIMDESK_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .context("no platform data directory available")?
            .join("claimdesk"),
    };

    Ok(base.join("session.json"))
}

impl IdentityStore for JsonFileIdentityStore {
    fn snapshot(&self) -> Result<StoredIdentity, IdentityStoreError> {
        Ok(self
            .read_record()?
            .map(|record| record.identity())
            .unwrap_or_default())
    }

    fn establish(&self, record: &SessionRecord) -> Result<(), IdentityStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                IdentityStoreError::Storage(format!(
                    "create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let raw = serde_json::to_string_pretty(record)
            .map_err(|e| IdentityStoreError::Storage(format!("encode session record: {e}")))?;

        fs::write(&self.path, raw).map_err(|e| {
            IdentityStoreError::Storage(format!("write {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "session record persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IdentityStoreError::Storage(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
