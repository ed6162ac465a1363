//! Key/value preference storage
//!
//! This module provides:
//! - A file-per-key store under the local data directory (native)
//! - An in-memory store (wasm, tests)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write preference: {0}")]
    Write(String),

    #[error("Preference store lock poisoned")]
    Poisoned,
}

/// Minimal string store for persisted UI preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Arc<dyn PreferenceStore>;

// ============================================
// In-memory backend
// ============================================

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Process-wide store used where no filesystem is available.
#[cfg(target_arch = "wasm32")]
static SHARED_MEMORY: once_cell::sync::Lazy<Arc<MemoryStore>> =
    once_cell::sync::Lazy::new(|| Arc::new(MemoryStore::default()));

// ============================================
// File backend (native platforms)
// ============================================

/// One file per key, named after the sanitized key.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_local_dir>/yourchatbot/prefs`, or `cache/prefs` when the platform has none.
    pub fn default_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("yourchatbot").join("prefs");
        }

        PathBuf::from("cache").join("prefs")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.pref", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Write(format!("create {}: {}", self.dir.display(), e)))?;
        fs::write(self.path_for(key), value).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Store used by the app: files on native targets, shared memory on wasm.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(dir_override: Option<PathBuf>) -> SharedStore {
    let dir = dir_override.unwrap_or_else(FileStore::default_dir);
    Arc::new(FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
pub fn default_store(_dir_override: Option<std::path::PathBuf>) -> SharedStore {
    SHARED_MEMORY.clone()
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("theme"), "theme");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::default();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("font"), None);
    }
}
