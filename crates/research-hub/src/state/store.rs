//! String key-value persistence.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::StoreResult;

/// Durable string map backing user preferences.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;

    /// Delete `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Process-lifetime store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as one JSON object file.
///
/// The whole map is rewritten through a sibling `.tmp` file and a rename on
/// every mutation, so readers never see a half-written file. A mutation only
/// takes effect in memory once its write has succeeded.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty, and so does a
    /// file that is not a JSON object of strings (it is replaced on the next
    /// write).
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to parse preference store; starting empty"
                );
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "Opened preference store");
        Ok(Self { path, entries })
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("a", "1".into()).unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("bookmark_1", "true".into()).unwrap();
        store.set("other", "x".into()).unwrap();
        store.remove("other").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("bookmark_1").as_deref(), Some("true"));
        assert!(reopened.get("other").is_none());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get("bookmark_1").is_none());

        store.set("bookmark_1", "true".into()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("bookmark_1").as_deref(), Some("true"));
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        // The parent "directory" is a regular file, so every flush fails.
        let mut store = FileStore::open(blocker.join("prefs.json")).unwrap();
        assert!(store.set("bookmark_1", "true".into()).is_err());
        assert!(store.get("bookmark_1").is_none());
    }
}
