use std::{
    collections::BTreeMap,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    get_data_file_path,
    load_json_from,
    save_json_to,
};
use crate::core::ShareMathError;

pub const INPUTS_FILE: &str = "inputs.json";

/// A flat string-to-string store, the shape of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ShareMathError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShareMathError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keeps every entry in memory and rewrites the whole JSON object on each
/// change. Entries survive restarts; nothing ever expires.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ShareMathError> {
        let path = path.into();
        let entries: BTreeMap<String, String> = load_json_from(&path)?;
        tracing::debug!("Opened store {} with {} entries", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Opens `inputs.json` in the per-user data directory. A corrupt file is
    /// logged and replaced by an empty store on the next write.
    pub fn open_default() -> Self {
        let path = get_data_file_path(INPUTS_FILE);
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}. Starting empty.", path.display(), e);
                Self { path, entries: BTreeMap::new() }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), ShareMathError> {
        save_json_to(&self.entries, &self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShareMathError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a"), Some("2".to_string()));
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("share-math-valuation", "$1,000,000").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("share-math-valuation"), Some("$1,000,000".to_string()));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }

    #[test]
    fn test_file_store_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join(INPUTS_FILE);

        let mut store = JsonFileStore::open(&path).unwrap();
        let result = store.set("share-math-revenue", "10");
        assert!(matches!(result, Err(ShareMathError::Io(_))));
        // The in-memory view still holds the value
        assert_eq!(store.get("share-math-revenue"), Some("10".to_string()));
    }
}
