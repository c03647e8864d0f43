//! Small key/value stores for the high score and settings
//!
//! Backends:
//! - `FileStore`: one JSON file per key in a directory (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//! - `MemoryStore`: in-process map (tests, demos)
//!
//! Callers treat every failure here as non-fatal.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage failure
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key/value storage
pub trait Store {
    /// `Ok(None)` when nothing has been stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// Read and decode a JSON record
pub fn load_json<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Option<T>, PersistError> {
    match store.read(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON record
pub fn save_json<T: Serialize>(store: &mut dyn Store, key: &str, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string(value)?;
    store.write(key, &json)
}

/// JSON files in a directory, written via a temp file and rename
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage, keys prefixed with the game name
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const PREFIX: &'static str = "mini_soccer_";

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistError::Unavailable("no localStorage".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl Store for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Self::storage()?
            .get_item(&format!("{}{key}", Self::PREFIX))
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(&format!("{}{key}", Self::PREFIX), value)
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read("k").unwrap().is_none());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read("highscore").unwrap().is_none());
    }

    #[test]
    fn test_file_store_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        save_json(&mut store, "highscore", &serde_json::json!({"high_score": 4})).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("nested/highscore.json")).unwrap();
        assert_eq!(on_disk, r#"{"high_score":4}"#);
        assert!(!dir.path().join("nested/highscore.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_record() {
        let mut store = MemoryStore::new();
        store.write("settings", "{not json").unwrap();
        let result: Result<Option<serde_json::Value>, _> = load_json(&store, "settings");
        assert!(matches!(result, Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let mut store = FileStore::new(&blocker);
        assert!(matches!(store.write("highscore", "1"), Err(PersistError::Io(_))));
    }
}
