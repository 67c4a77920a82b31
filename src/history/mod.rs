// src/history/mod.rs
use thiserror::Error;

use crate::models::GeneratedPassword;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized recent list.
pub const HISTORY_KEY: &str = "prevPasswords";

/// Number of recent passwords kept.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// The last few generated passwords, newest first, mirrored to a key-value store.
pub struct RecentPasswords<S: KeyValueStore> {
    store: S,
    entries: Vec<GeneratedPassword>,
}

impl<S: KeyValueStore> RecentPasswords<S> {
    /// Hydrate from the store. Missing or unreadable snapshots start an empty list.
    pub fn load(store: S) -> Self {
        let entries = match read_snapshot(&store) {
            Ok(Some(mut entries)) => {
                entries.truncate(HISTORY_CAPACITY);
                log::info!("Loaded {} recent passwords", entries.len());
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Ignoring stored recent passwords: {}", e);
                Vec::new()
            }
        };

        Self { store, entries }
    }

    /// Prepend a password and persist the truncated list. The in-memory list is
    /// updated even when the write fails.
    pub fn record(&mut self, password: GeneratedPassword) -> Result<()> {
        self.entries.insert(0, password);
        self.entries.truncate(HISTORY_CAPACITY);
        log::debug!("Recent list now holds {} passwords", self.len());
        self.persist()
    }

    pub fn entries(&self) -> &[GeneratedPassword] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 0-based position, 0 being the newest.
    pub fn get(&self, position: usize) -> Option<&GeneratedPassword> {
        self.entries.get(position)
    }

    fn persist(&self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &snapshot)?;
        Ok(())
    }
}

fn read_snapshot<S: KeyValueStore>(store: &S) -> Result<Option<Vec<GeneratedPassword>>> {
    match store.get(HISTORY_KEY)? {
        Some(raw) => {
            // A stored JSON null counts as absent
            let entries: Option<Vec<GeneratedPassword>> = serde_json::from_str(&raw)?;
            Ok(entries)
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore};
    use tempfile::tempdir;

    fn password(value: &str) -> GeneratedPassword {
        GeneratedPassword::new(value.to_string())
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> crate::storage::Result<Option<String>> {
            Err(StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }

        fn set(&self, _key: &str, _value: &str) -> crate::storage::Result<()> {
            Err(StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }
    }

    #[test]
    fn starts_empty_without_snapshot() {
        let history = RecentPasswords::load(MemoryStore::new());
        assert!(history.is_empty());
    }

    #[test]
    fn keeps_last_five_newest_first() {
        let mut history = RecentPasswords::load(MemoryStore::new());
        for i in 1..=6 {
            history.record(password(&format!("pass{i}"))).unwrap();
        }

        let values: Vec<&str> = history.entries().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["pass6", "pass5", "pass4", "pass3", "pass2"]);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(!history.is_empty());
        assert_eq!(history.get(0).unwrap().value, "pass6");
        assert!(history.get(5).is_none());
    }

    #[test]
    fn snapshot_round_trips_through_store() {
        let store = MemoryStore::new();
        let recorded: Vec<GeneratedPassword> = {
            let mut history = RecentPasswords::load(&store);
            for i in 0..3 {
                history.record(password(&format!("value{i}"))).unwrap();
            }
            history.entries().to_vec()
        };

        let reloaded = RecentPasswords::load(&store);
        assert_eq!(reloaded.entries(), recorded.as_slice());
    }

    #[test]
    fn round_trips_through_file_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut history = RecentPasswords::load(JsonFileStore::new(path.clone()));
        for i in 0..7 {
            history.record(password(&format!("file{i}"))).unwrap();
        }
        let expected = history.entries().to_vec();

        let reloaded = RecentPasswords::load(JsonFileStore::new(path));
        assert_eq!(reloaded.len(), HISTORY_CAPACITY);
        assert_eq!(reloaded.entries(), expected.as_slice());
    }

    #[test]
    fn stored_format_is_array_of_id_and_value() {
        let store = MemoryStore::new();
        let mut history = RecentPasswords::load(&store);
        let entry = password("abc12");
        history.record(entry.clone()).unwrap();

        let raw = store.get(HISTORY_KEY).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "id": entry.id.to_string(), "value": "abc12" }])
        );
    }

    #[test]
    fn oversized_snapshot_is_truncated_on_load() {
        let store = MemoryStore::new();
        let entries: Vec<GeneratedPassword> = (0..8).map(|i| password(&format!("p{i}"))).collect();
        store.set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap()).unwrap();

        let history = RecentPasswords::load(&store);
        assert_eq!(history.entries(), &entries[..HISTORY_CAPACITY]);
    }

    #[test]
    fn corrupt_or_null_snapshot_starts_empty() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "[{\"broken\": ").unwrap();
        assert!(RecentPasswords::load(&store).is_empty());

        store.set(HISTORY_KEY, "null").unwrap();
        assert!(RecentPasswords::load(&store).is_empty());
    }

    #[test]
    fn failed_write_still_updates_memory() {
        let mut history = RecentPasswords::load(FailingStore);
        assert!(history.is_empty());

        let result = history.record(password("kept1"));
        assert!(matches!(result, Err(HistoryError::StorageError(_))));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().value, "kept1");
    }
}
