//! # Session Store
//!
//! Where the bearer token and role live between runs.
//!
//! Two implementations of [`SessionStore`]:
//!
//! - [`FileSessionStore`]: JSON file on disk (the desktop stand-in for browser
//!   local storage). A missing, unreadable or corrupt file reads as "no session".
//! - [`MemorySessionStore`]: in-process only; used by tests.
//!
//! ```text
//! {"accessToken":"eyJhbGciOi...","role":"ROLE_USER"}
//! ```

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::service::SessionStore;

/// Opaque bearer token plus the role string returned at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub role: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            role: role.into(),
        }
    }
}

/// Session persisted as a JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                None
            }
        }
    }

    fn set(&self, session: Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string(&session)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session kept in memory only.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    /// Store pre-seeded with a session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn set(&self, session: Session) -> Result<()> {
        *self.session.write() = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.get(), None);

        store.set(Session::new("t1", "ADMIN_USER")).unwrap();
        assert_eq!(store.get(), Some(Session::new("t1", "ADMIN_USER")));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"accessToken\":\"t1\""));

        store.clear().unwrap();
        assert_eq!(store.get(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(path);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::default();
        assert_eq!(store.get(), None);

        store.set(Session::new("t2", "ROLE_USER")).unwrap();
        assert_eq!(store.get().map(|s| s.access_token), Some("t2".to_string()));

        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }
}
