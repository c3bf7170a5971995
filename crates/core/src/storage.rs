//! Durable client-side token storage
//!
//! The bearer token lives under a single key. Browsers keep it in
//! `localStorage`, the terminal client keeps it in a small JSON file, and tests
//! keep it in memory. Whatever the backend, this storage is the only place the
//! token is held.

use crate::error::{CoreError, CoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

/// Storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the bearer token
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored token
    fn set(&self, token: &str) -> CoreResult<()>;

    /// Remove the stored token. Removing a missing token is not an error.
    fn clear(&self) -> CoreResult<()>;
}

/// In-process token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token storage backed by a JSON key/value file
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> CoreResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|e| {
            CoreError::storage(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        // An unreadable file is treated the same as an empty one
        self.read_entries()
            .ok()
            .and_then(|mut entries| entries.remove(TOKEN_KEY))
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> CoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("storage.json"));

        assert_eq!(store.get(), None);
        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_persists_under_token_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileTokenStore::new(&path);

        store.set("abc123").unwrap();

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get(TOKEN_KEY).map(String::as_str), Some("abc123"));

        // A second handle on the same file sees the token
        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get().as_deref(), Some("abc123"));

        reopened.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_corrupt_file_reads_as_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), None);

        store.set("fresh").unwrap();
        assert_eq!(store.get().as_deref(), Some("fresh"));
    }
}
