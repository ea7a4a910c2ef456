//! File-backed key-value store
//!
//! Each key lives in its own `<key>.json` file inside one directory.

use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_text, remove_if_exists, write_text_atomic};
use super::KeyValueStore;

/// Key-value store persisting each slot as a file
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn slot_path(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');

        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        read_text(self.slot_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        write_text_atomic(self.slot_path(key)?, value)
    }

    fn delete(&mut self, key: &str) -> LedgerResult<()> {
        remove_if_exists(self.slot_path(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("ledger_transactions_v1").unwrap(), None);

        store.set("ledger_transactions_v1", "[]").unwrap();
        assert!(temp_dir
            .path()
            .join("data")
            .join("ledger_transactions_v1.json")
            .exists());
        assert_eq!(
            store.get("ledger_transactions_v1").unwrap().as_deref(),
            Some("[]")
        );

        store.delete("ledger_transactions_v1").unwrap();
        assert_eq!(store.get("ledger_transactions_v1").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new(PathBuf::from("/tmp"));
        assert!(store.slot_path("../escape").is_err());
        assert!(store.slot_path("").is_err());
        assert!(store.slot_path("a/b").is_err());
    }
}
