use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// The authenticated state held locally after a successful login: the
/// bearer token plus a cached copy of the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: User,
}

/// Durable storage for the session. There is no expiry bookkeeping; the
/// token stays attached until logout or until the server rejects it.
pub struct Session {
    data_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            data: None,
        }
    }

    /// Load session from disk. Returns true if a session was restored.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;
            self.data = Some(data);
            return Ok(true);
        }
        Ok(false)
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Clear session data, removing the file on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Update session with new data
    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// Get the bearer token if a session is present
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.token.as_str())
    }

    /// Cached user from the last successful login
    pub fn user(&self) -> Option<&User> {
        self.data.as_ref().map(|d| &d.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> SessionData {
        SessionData {
            token: "tok-123".to_string(),
            user: User {
                id: 7,
                name: "Dana Moss".to_string(),
                email: "dana@example.com".to_string(),
                role: None,
            },
        }
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut session = Session::new(dir.path().to_path_buf());
        session.update(sample_data());
        session.save().expect("Failed to save session");

        let mut restored = Session::new(dir.path().to_path_buf());
        assert!(restored.load().expect("Failed to load session"));
        assert_eq!(restored.token(), Some("tok-123"));
        assert_eq!(restored.user().map(|u| u.id), Some(7));
        assert!(restored.is_authenticated());

        restored.clear().expect("Failed to clear session");
        assert!(restored.token().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());

        let mut after_clear = Session::new(dir.path().to_path_buf());
        assert!(!after_clear.load().expect("Failed to re-load session"));
    }

    #[test]
    fn test_load_without_file_is_not_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(!session.load().expect("Load should succeed with no file"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut session = Session::new(dir.path().to_path_buf());
        session.clear().expect("Clearing an empty session should succeed");
        session.clear().expect("Clearing twice should succeed");
    }
}
