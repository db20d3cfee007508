//! Durable key-value persistence and the stores built on it
//!
//! Every store writes through on each mutation, so nothing in memory is ever
//! ahead of what is on disk once an operation returns.

mod error;
pub mod favorites;
pub mod history;
pub mod settings;

pub use error::StorageError;
pub use favorites::FavoritesStore;
pub use history::HistoryStore;
pub use settings::{Settings, SettingsPatch, SettingsStore, Theme};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{DATA_DIR_ENV, DATA_DIR_NAME};

/// Persisted keys
pub mod keys {
    pub const SETTINGS: &str = "settings";
    pub const HISTORY: &str = "history";
    pub const FAVORITES: &str = "favorites";
    pub const THEME: &str = "theme";
}

/// A durable string key-value store that survives restarts.
pub trait KeyValueStore: Send + Sync {
    /// Reads a key, `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Handle shared by every store in one process
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Directory holding persisted state: `$ROUTESCOPE_DATA_DIR` or `~/.routescope`
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Reads and decodes a key, treating a missing or corrupt value as absent
pub(crate) fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let text = match store.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted value");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring corrupt persisted value");
            None
        }
    }
}

pub(crate) fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string(value)?;
    store.set(key, &text)
}

/// One JSON file per key inside a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Store rooted at [`data_dir`]
    pub fn open_default() -> Self {
        Self::new(data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Ensure the directory exists
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        // Write beside the target and rename so a crash never leaves half a file
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}

/// Volatile store, used in tests and when no data directory is usable
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<MemoryStore> {
        Arc::new(Self::new())
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}
