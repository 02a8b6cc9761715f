//! Directory-backed storage: one JSON document per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::keys;
use super::traits::KeyValueStore;
use crate::error::{ReelError, Result};

/// File storage rooted at a data directory.
///
/// Key `movies-<id>` lives at `<root>/movies-<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::Storage` if the directory cannot be created or
    /// `root` exists but is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            ReelError::Storage(format!(
                "Failed to create data directory {}: {}",
                root.display(),
                e
            ))
        })?;
        if !root.is_dir() {
            return Err(ReelError::Storage(format!(
                "Data path is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        keys::validate(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ReelError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        crate::fs::write_atomic(&path, value.as_bytes()).map_err(|e| {
            ReelError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(key, bytes = value.len(), "stored document");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed document");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ReelError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("reel");

        let store = FileStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn test_open_on_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        assert!(FileStore::open(&file).is_err());
    }

    #[test]
    fn test_values_persist_across_instances() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("user", r#"{"a":1}"#).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("user").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );
        assert!(dir.path().join("user.json").exists());
    }

    #[test]
    fn test_missing_and_removed_keys_read_as_none() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("movies-x").unwrap(), None);

        store.set("movies-x", "[]").unwrap();
        store.remove("movies-x").unwrap();
        store.remove("movies-x").unwrap();
        assert_eq!(store.get("movies-x").unwrap(), None);
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.set("../escape", "x").is_err());
    }
}
