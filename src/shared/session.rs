//! Bearer-token storage.
//!
//! The token is read fresh on every request, so a login performed through
//! another handle sharing the same store is picked up by the next call.
//! There is no rotation; `TokenProvider::refresh` is only consulted when
//! nothing is stored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::{Map, Value};

/// Key under which the token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(String),

    #[error("Session storage is corrupted: {0}")]
    Corrupted(String),

    #[error("Session lock poisoned")]
    Poisoned,
}

pub trait TokenProvider: Send + Sync {
    /// Current bearer token; blank tokens count as absent.
    fn current_token(&self) -> Option<String>;

    /// `None` clears the stored token.
    fn store_token(&self, token: Option<&str>) -> Result<(), SessionError>;

    /// Consulted only when no token is stored. Sessions that cannot mint a
    /// token keep the default.
    fn refresh(&self) -> Option<String> {
        None
    }
}

fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// In-memory session
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default)]
pub struct InMemorySession {
    token: RwLock<Option<String>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenProvider for InMemorySession {
    fn current_token(&self) -> Option<String> {
        let guard = self.token.read().ok()?;
        non_blank(guard.clone())
    }

    fn store_token(&self, token: Option<&str>) -> Result<(), SessionError> {
        let mut guard = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *guard = token.map(str::to_string);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// File-backed session (persistent key-value JSON document)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(SessionError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(SessionError::Corrupted(format!(
                "expected an object, found {}",
                other
            ))),
            Err(e) => Err(SessionError::Corrupted(e.to_string())),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SessionError::Io(e.to_string()))?;
        }

        let serialized = serde_json::to_string_pretty(document)
            .map_err(|e| SessionError::Corrupted(e.to_string()))?;

        // readers never observe a half-written file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized).map_err(|e| SessionError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| SessionError::Io(e.to_string()))
    }
}

impl TokenProvider for FileSession {
    fn current_token(&self) -> Option<String> {
        match self.read_document() {
            Ok(document) => non_blank(
                document
                    .get(TOKEN_STORAGE_KEY)
                    .and_then(Value::as_str)
                    .map(str::to_string),
            ),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable session storage: {}", e);
                None
            }
        }
    }

    fn store_token(&self, token: Option<&str>) -> Result<(), SessionError> {
        // a corrupted document is replaced rather than blocking login
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(SessionError::Corrupted(reason)) => {
                tracing::warn!(path = %self.path.display(), "Replacing corrupted session storage: {}", reason);
                Map::new()
            }
            Err(e) => return Err(e),
        };

        match token {
            Some(token) => {
                document.insert(TOKEN_STORAGE_KEY.to_string(), Value::String(token.to_string()));
            }
            None => {
                document.remove(TOKEN_STORAGE_KEY);
            }
        }

        self.write_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_session_round_trips() {
        let session = InMemorySession::new();
        assert!(session.current_token().is_none());

        session.store_token(Some("abc")).unwrap();
        assert_eq!(session.current_token().as_deref(), Some("abc"));

        session.store_token(None).unwrap();
        assert!(session.current_token().is_none());
    }

    #[test]
    fn blank_token_counts_as_absent() {
        let session = InMemorySession::with_token("   ");
        assert!(session.current_token().is_none());
    }

    #[test]
    fn file_session_persists_under_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = FileSession::new(&path);

        session.store_token(Some("jwt-token")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc[TOKEN_STORAGE_KEY], "jwt-token");

        // a second handle on the same file sees the token
        let other = FileSession::new(&path);
        assert_eq!(other.current_token().as_deref(), Some("jwt-token"));
    }

    #[test]
    fn file_session_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let session = FileSession::new(&path);
        session.store_token(Some("t")).unwrap();
        session.store_token(None).unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["theme"], "dark");
        assert!(doc.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn unreadable_storage_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be: reading fails with an I/O error
        let path = dir.path().join("session.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();

        let session = FileSession::new(&path);
        let result = session.store_token(Some("t"));

        assert!(matches!(result, Err(SessionError::Io(_))));
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn missing_or_corrupted_file_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileSession::new(dir.path().join("nope.json"));
        assert!(missing.current_token().is_none());

        let corrupted_path = dir.path().join("bad.json");
        fs::write(&corrupted_path, "not json").unwrap();
        let corrupted = FileSession::new(&corrupted_path);
        assert!(corrupted.current_token().is_none());

        // and it can still be overwritten
        corrupted.store_token(Some("fresh")).unwrap();
        assert_eq!(corrupted.current_token().as_deref(), Some("fresh"));
    }
}
