//! Durable key-value storage
//!
//! The store mirrors the session token here so it survives restarts.
//! Values are plain strings keyed by name; the only key in use is [`TOKEN_KEY`].
//!
//! # Implementations
//!
//! - [`MemoryStore`] - process-local map, nothing survives a restart
//! - [`FileStore`] - TOML document on disk, re-read on every access

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::paths;

/// Key under which the session token is stored
pub const TOKEN_KEY: &str = "token";

const STORAGE_VERSION: u32 = 1;

/// String key-value storage shared between the store and its middleware
///
/// Implementations must tolerate a value changing between two reads;
/// no transactional guarantee is expected.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing an absent key succeeds
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Storage metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageMeta {
    last_modified: DateTime<Utc>,
    version: u32,
}

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageDocument {
    meta: StorageMeta,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageDocument {
    fn default() -> Self {
        Self {
            meta: StorageMeta {
                last_modified: Utc::now(),
                version: STORAGE_VERSION,
            },
            entries: BTreeMap::new(),
        }
    }
}

/// File-backed storage (TOML)
///
/// Every read goes to disk, so a value written by another process between
/// two reads is observed. Writes from this process are serialized and go
/// through a temporary file that is renamed over the document. A document
/// that cannot be parsed reads as empty and is replaced by the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Open the storage file in the application config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(paths::storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StorageDocument> {
        if !self.path.exists() {
            return Ok(StorageDocument::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {:?}", self.path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {:?}", self.path))
    }

    /// Current document, or an empty one if the file is unreadable
    fn document_for_write(&self) -> StorageDocument {
        self.read_document().unwrap_or_else(|e| {
            log::warn!("FileStore: {:#}; replacing it", e);
            StorageDocument::default()
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    fn write_document(&self, document: &mut StorageDocument) -> Result<()> {
        document.meta.last_modified = Utc::now();
        document.meta.version = STORAGE_VERSION;

        let content = toml::to_string_pretty(&*document).context("Failed to serialize storage")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, content)
            .with_context(|| format!("Failed to write storage file: {:?}", temp))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e)
                .with_context(|| format!("Failed to replace storage file: {:?}", self.path));
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_document() {
            Ok(document) => document.entries.get(key).cloned(),
            Err(e) => {
                log::warn!("FileStore: {:#}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.document_for_write();
        document.entries.insert(key.to_string(), value.to_string());
        self.write_document(&mut document)?;
        log::debug!("FileStore: stored '{}' in {:?}", key, self.path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.document_for_write();
        if document.entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_document(&mut document)?;
        log::debug!("FileStore: removed '{}' from {:?}", key, self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "abc");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        store.set(TOKEN_KEY, "def").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("def"));

        store.remove(TOKEN_KEY).unwrap();
        assert!(store.get(TOKEN_KEY).is_none());

        // Removing again is fine
        store.remove(TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("storage.toml"));
        assert!(store.get(TOKEN_KEY).is_none());
        store.remove(TOKEN_KEY).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.toml");

        FileStore::new(&path).set(TOKEN_KEY, "secret-token").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("secret-token"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[meta]"));
        assert!(content.contains("[entries]"));
    }

    #[test]
    fn test_file_store_observes_external_change() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.toml");
        let first = FileStore::new(&path);
        let second = FileStore::new(&path);

        first.set(TOKEN_KEY, "one").unwrap();
        second.set(TOKEN_KEY, "two").unwrap();
        assert_eq!(first.get(TOKEN_KEY).as_deref(), Some("two"));

        second.remove(TOKEN_KEY).unwrap();
        assert!(first.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_file_store_recovers_from_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.toml");
        // Cut off mid-write
        fs::write(&path, "[meta]\nlast_modified = \"2024").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get(TOKEN_KEY).is_none());
        store.remove(TOKEN_KEY).unwrap();

        store.set(TOKEN_KEY, "new-token").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("new-token"));
        assert!(toml::from_str::<StorageDocument>(&fs::read_to_string(&path).unwrap()).is_ok());
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("storage.toml"));

        store.set(TOKEN_KEY, "abc").unwrap();
        store.remove(TOKEN_KEY).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.toml")]);
        assert!(store.get(TOKEN_KEY).is_none());
    }
}
