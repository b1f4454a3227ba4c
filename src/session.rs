//! Durable local session storage.
//!
//! The signed-in user is kept as a single JSON file under a fixed name in
//! the app root:
//!
//! ```text
//! <root>/session.json
//! ```
//!
//! Load on startup, save on login, clear on logout. A file that no longer
//! parses is removed and treated as absent, so a bad write cannot wedge
//! startup.

use std::{fs, io, path::PathBuf};

use log::warn;

use crate::model::Session;

/// Errors that can occur during session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, SessionError>;

/// File-backed store for the signed-in session.
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default app root: `~/.roster/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".roster"))
    }

    /// Loads the stored session, if any.
    ///
    /// A missing file means no one is signed in.
    pub fn load(&self) -> Result<Option<Session>> {
        let path = self.path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("discarding unreadable session file: {e}");
                fs::remove_file(&path)?;
                Ok(None)
            }
        }
    }

    /// Writes the session to disk, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(self.path(), json)?;
        Ok(())
    }

    /// Removes the stored session. Idempotent.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path(&self) -> PathBuf {
        self.root.join("session.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("roster")).unwrap();
        (dir, store)
    }

    fn sample_session() -> Session {
        Session {
            first_name: "Alex".into(),
            last_name: "Johnson".into(),
            email: "alex@example.com".into(),
            token: "abc123".into(),
            saved_at: Timestamp::now(),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let (_dir, store) = test_store();
        let session = sample_session();

        store.save(&session).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, session);
    }

    #[test]
    fn load_with_no_file_returns_none() {
        let (_dir, store) = test_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_removed_and_treated_as_absent() {
        let (_dir, store) = test_store();
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn save_replaces_previous_session() {
        let (_dir, store) = test_store();
        store.save(&sample_session()).unwrap();

        let mut second = sample_session();
        second.email = "sarah@example.com".into();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap().email, "sarah@example.com");
    }

    #[test]
    fn clear_is_idempotent() {
        let (_dir, store) = test_store();
        store.save(&sample_session()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
    }
}
