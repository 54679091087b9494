use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::common::SessionError;
use crate::models::SessionRecord;

/// Fixed storage key for the one admin session. The record lives in
/// `<data_dir>/admin_user.json`; absence of the file is the only
/// "logged out" signal.
pub const SESSION_KEY: &str = "admin_user";

/// Durable storage for the single Session Record.
///
/// One writer (`login`/`logout` through the state machine), overwrite in
/// place, no versioning and no expiry.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{SESSION_KEY}.json")),
        })
    }

    /// Persist `record`, replacing any previous one.
    ///
    /// A failure here is reported to the caller but must not roll back the
    /// in-memory transition that triggered it.
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let body = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, body)?;
        Ok(())
    }

    /// Read the stored record, if any.
    ///
    /// A missing file is plain absence. An unparseable file is purged and
    /// treated as absence, so a corrupt session can never wedge the app in a
    /// half-logged-in state.
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("failed to read session store {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_slice::<SessionRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!(
                    "purging corrupt session record at {}: {e}",
                    self.path.display()
                );
                let _ = self.clear();
                None
            }
        }
    }

    /// Remove the stored record. Clearing an already-absent key is not an
    /// error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
