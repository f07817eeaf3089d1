//! Session persistence.
//!
//! The session is four flat string keys, mirroring what a browser keeps in
//! local storage. This module is the only place that reads or writes them;
//! everything else receives a [`Session`] value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use shared_models::{AppError, AppResult, Session};

use crate::navigation::Route;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "user_id";
pub const EMAIL_KEY: &str = "email";
pub const FULL_NAME_KEY: &str = "full_name";

pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_ID_KEY, EMAIL_KEY, FULL_NAME_KEY];

/// Key-value store with local-storage semantics.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::Storage(format!("{}: {}", path.display(), e))),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        debug!("Session file written: {}", self.path.display());
        Ok(())
    }

    /// Writes the edited copy first; memory only changes once the file does.
    fn commit(&mut self, edit: impl FnOnce(&mut BTreeMap<String, String>)) -> AppResult<()> {
        let mut next = self.entries.clone();
        edit(&mut next);
        self.write(&next)?;
        self.entries = next;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.commit(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        self.commit(|entries| {
            entries.remove(key);
        })
    }
}

pub struct SessionManager<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the session at mount. No token means signed out.
    pub fn bootstrap(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;

        Some(Session {
            token,
            user_id: self.storage.get(USER_ID_KEY).unwrap_or_default(),
            email: self.storage.get(EMAIL_KEY).unwrap_or_default(),
            full_name: self.storage.get(FULL_NAME_KEY).unwrap_or_default(),
        })
    }

    pub fn persist(&mut self, session: &Session) -> AppResult<()> {
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_ID_KEY, &session.user_id)?;
        self.storage.set(EMAIL_KEY, &session.email)?;
        self.storage.set(FULL_NAME_KEY, &session.full_name)?;
        info!("Session stored for {}", session.email);
        Ok(())
    }

    /// Clears every session key and returns the login route.
    ///
    /// All four removals are attempted even if one fails; the first failure
    /// is reported afterwards.
    pub fn logout(&mut self) -> AppResult<Route> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to clear session key {}: {}", key, e);
                first_error.get_or_insert(e);
            }
        }
        info!("Session cleared");

        match first_error {
            Some(e) => Err(e),
            None => Ok(Route::Login),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            user_id: "user-1".to_string(),
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_bootstrap_without_token_is_signed_out() {
        let mut storage = MemoryStorage::new();
        storage.set(EMAIL_KEY, "jane@example.com").unwrap();

        let manager = SessionManager::new(storage);
        assert!(manager.bootstrap().is_none());
    }

    #[test]
    fn test_persist_then_bootstrap() {
        let mut manager = SessionManager::new(MemoryStorage::new());
        manager.persist(&sample_session()).unwrap();

        assert_eq!(manager.bootstrap(), Some(sample_session()));
        assert_eq!(manager.storage().len(), 4);
    }

    #[test]
    fn test_logout_clears_all_keys() {
        let mut manager = SessionManager::new(MemoryStorage::new());
        manager.persist(&sample_session()).unwrap();

        let route = manager.logout().unwrap();

        assert_eq!(route, Route::Login);
        assert_eq!(route.path(), "/");
        assert!(manager.storage().is_empty());
        assert!(manager.bootstrap().is_none());
    }

    #[test]
    fn test_logout_when_already_signed_out() {
        let mut storage = MemoryStorage::new();
        storage.set(FULL_NAME_KEY, "Leftover").unwrap();
        let mut manager = SessionManager::new(storage);

        assert_eq!(manager.logout().unwrap(), Route::Login);
        assert!(manager.storage().is_empty());
    }

    #[test]
    fn test_logout_leaves_unrelated_keys() {
        let mut storage = MemoryStorage::new();
        storage.set("theme", "dark").unwrap();
        let mut manager = SessionManager::new(storage);
        manager.persist(&sample_session()).unwrap();

        manager.logout().unwrap();

        assert_eq!(manager.storage().get("theme").as_deref(), Some("dark"));
        assert_eq!(manager.storage().len(), 1);
    }

    #[test]
    fn test_file_storage_keeps_memory_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set(TOKEN_KEY, "jwt-token").unwrap();

        // A directory where the file should be makes every write fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(storage.remove(TOKEN_KEY).is_err());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-token"));

        assert!(storage.set(EMAIL_KEY, "jane@example.com").is_err());
        assert_eq!(storage.get(EMAIL_KEY), None);

        let mut manager = SessionManager::new(storage);
        assert!(manager.logout().is_err());
        assert!(manager.bootstrap().is_some());
    }
}
