//! File-backed store: one file per key under a root directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{CacheError, KvStore};

/// Durable store keeping each key in its own `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_name_for(key)))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        // unique temp name per write; a failed persist removes the temp file
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value)?;
        tmp.persist(&path).map_err(|e| {
            CacheError::StoreError(format!("replace {}: {}", path.display(), e.error))
        })?;
        tracing::trace!(key, path = %path.display(), bytes = value.len(), "file store write");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.path_for(key).is_file())
    }
}

/// Map a key onto a safe file name.
fn file_name_for(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("cart-storage", br#"{"items":[]}"#).unwrap();
        assert!(store.exists("cart-storage").unwrap());
        assert_eq!(
            store.get("cart-storage").unwrap(),
            Some(br#"{"items":[]}"#.to_vec())
        );
    }

    #[test]
    fn test_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("absent").unwrap(), None);
        assert!(!store.exists("absent").unwrap());
        store.delete("absent").unwrap();
    }

    #[test]
    fn test_overwrite_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("k", b"one").unwrap();
        store.set("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));

        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_key_sanitized_into_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let path = store.path_for("cart-storage:../../etc");
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("cart-storage_.._.._etc.json")
        );
    }

    #[test]
    fn test_concurrent_writers_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let writers: Vec<_> = (0..4)
            .map(|id| {
                let root = root.clone();
                std::thread::spawn(move || {
                    let store = FileStore::open(root).unwrap();
                    let payload = format!(r#"{{"items":[{{"variant_id":{},"quantity":1}}]}}"#, id);
                    let mut failures = 0;
                    for _ in 0..200 {
                        if store.set("cart-storage", payload.as_bytes()).is_err() {
                            failures += 1;
                        }
                        let bytes = store.get("cart-storage").unwrap().unwrap();
                        if serde_json::from_slice::<serde_json::Value>(&bytes).is_err() {
                            failures += 1;
                        }
                    }
                    failures
                })
            })
            .collect();

        let failures: usize = writers.into_iter().map(|w| w.join().unwrap()).sum();
        assert_eq!(failures, 0);

        let stored = FileStore::open(&root).unwrap().get("cart-storage").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&stored).unwrap();
        assert!(json["items"][0]["variant_id"].as_i64().is_some_and(|id| (0..4).contains(&id)));

        // no temp files left behind
        let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.root().is_dir());
    }
}
