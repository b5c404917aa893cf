//! Key-value stores for the persisted stable.
//!
//! Every access is preceded by an [`StateStore::is_available`] check; an
//! unavailable store means the registry runs in memory only.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// A synchronous string key-value store.
pub trait StateStore {
    /// Whether the store can currently be used at all.
    fn is_available(&self) -> bool;

    /// Read the value for `key`, `None` when it was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn check_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous document intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        check_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStore for FileStore {
    fn is_available(&self) -> bool {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::debug!("State directory {} unavailable: {}", self.dir.display(), e);
            return false;
        }
        match fs::metadata(&self.dir) {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        tracing::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(Some(text))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Process-local store. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any serialization.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl StateStore for MemoryStore {
    fn is_available(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that is never available.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledStore;

impl StateStore for DisabledStore {
    fn is_available(&self) -> bool {
        false
    }

    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("state"));
        assert!(store.is_available());
        assert_eq!(store.read("stable").unwrap(), None);

        store.write("stable", "{\"a\":1}").unwrap();
        assert_eq!(store.read("stable").unwrap().as_deref(), Some("{\"a\":1}"));

        store.write("stable", "{}").unwrap();
        assert_eq!(store.read("stable").unwrap().as_deref(), Some("{}"));
        assert!(!temp.path().join("state").join("stable.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        assert!(matches!(store.write("../escape", "x"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.read(""), Err(StoreError::InvalidKey(_))));
        assert!(store.read("super-honse-state").is_ok());
    }

    #[test]
    fn test_file_store_unavailable_under_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = FileStore::new(blocker.join("state"));
        assert!(!store.is_available());
    }

    #[test]
    fn test_memory_and_disabled_stores() {
        let mut memory = MemoryStore::new().with_entry("k", "v");
        assert_eq!(memory.read("k").unwrap().as_deref(), Some("v"));
        memory.write("k", "w").unwrap();
        assert_eq!(memory.read("k").unwrap().as_deref(), Some("w"));

        let mut disabled: Box<dyn StateStore> = Box::new(DisabledStore);
        assert!(!disabled.is_available());
        disabled.write("k", "v").unwrap();
        assert_eq!(disabled.read("k").unwrap(), None);
    }
}
