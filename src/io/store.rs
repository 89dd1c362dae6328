use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::log;

/// Error type for collection storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("corrupt data in slot '{slot}': {source}")]
    Corrupt {
        slot: String,
        source: serde_json::Error,
    },
    #[error("could not access slot '{slot}': {source}")]
    Io {
        slot: String,
        source: std::io::Error,
    },
}

/// Slot name for the todo collection
pub const TODOS_SLOT: &str = "todos";
/// Slot name for the habit collection
pub const HABITS_SLOT: &str = "habits";

/// Whole-collection JSON persistence over a data directory.
///
/// Each named slot is one file (`<slot>.json`) holding a full serialized
/// collection. Saves overwrite the slot wholesale; there is no incremental
/// persistence and no locking — the app is the only writer.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Store { dir }
    }

    /// Open a store, creating the data directory if needed.
    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            slot: dir.display().to_string(),
            source: e,
        })?;
        Ok(Store { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    /// Load the named slot. A missing file is an empty collection; an
    /// unreadable or unparseable one is an error for the caller to handle.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, StoreError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| StoreError::Io {
            slot: slot.to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            slot: slot.to_string(),
            source: e,
        })
    }

    /// Load the named slot, substituting an empty collection on failure.
    ///
    /// This is the UI call path: a corrupt or unreadable slot is recorded
    /// in the event log and the user continues with empty data.
    pub fn load_or_default<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        match self.load(slot) {
            Ok(items) => items,
            Err(e) => {
                log::log_error(&self.dir, &format!("load {}", slot), &e);
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and replace the slot file.
    ///
    /// The write goes through a temp file in the same directory and is
    /// renamed into place, so a crash mid-write cannot truncate the slot.
    pub fn save<T: Serialize>(&self, slot: &str, items: &[T]) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            slot: slot.to_string(),
            source: e,
        };

        let content = serde_json::to_string_pretty(items).map_err(|e| StoreError::Corrupt {
            slot: slot.to_string(),
            source: e,
        })?;

        let tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        fs::write(tmp.path(), content).map_err(io_err)?;
        tmp.persist(self.slot_path(slot))
            .map_err(|e| io_err(e.error))?;
        Ok(())
    }

    /// Save, logging and swallowing any failure. The in-memory collection
    /// stays the live copy; there is no retry.
    pub fn save_logged<T: Serialize>(&self, slot: &str, items: &[T]) {
        if let Err(e) = self.save(slot, items) {
            log::log_error(&self.dir, &format!("save {}", slot), &e);
        }
    }
}

/// Resolve the data directory: explicit override, then `TEND_DIR`, then
/// `XDG_DATA_HOME/tend`, then `~/.local/share/tend`.
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var("TEND_DIR") {
        return PathBuf::from(dir);
    }
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    base.join("tend")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{Item, ItemFields, Priority};
    use tempfile::TempDir;

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                key: "1700000000000".into(),
                text: "Buy milk".into(),
                description: "2%".into(),
                priority: Priority::High,
                due_date: "2025-06-01".into(),
                completed: false,
            },
            Item {
                key: "1700000000001".into(),
                text: "Water plants".into(),
                description: String::new(),
                priority: Priority::Low,
                due_date: String::new(),
                completed: true,
            },
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        let items = sample_items();

        store.save(TODOS_SLOT, &items).unwrap();
        let loaded: Vec<Item> = store.load(TODOS_SLOT).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn load_missing_slot_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        let loaded: Vec<Item> = store.load(TODOS_SLOT).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn load_corrupt_slot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        std::fs::write(dir.path().join("todos.json"), "not json {{{").unwrap();

        let result: Result<Vec<Item>, _> = store.load(TODOS_SLOT);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn load_or_default_swallows_corruption() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        std::fs::write(dir.path().join("todos.json"), "not json {{{").unwrap();

        let loaded: Vec<Item> = store.load_or_default(TODOS_SLOT);
        assert!(loaded.is_empty());
        // The failure is recorded, not surfaced
        let log = std::fs::read_to_string(dir.path().join(".tend.log")).unwrap();
        assert!(log.contains("load todos"));
    }

    #[test]
    fn slots_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        let items = sample_items();
        let habits = vec![crate::model::habit::Habit::new("h1".into(), "stretch".into())];

        store.save(TODOS_SLOT, &items).unwrap();
        store.save(HABITS_SLOT, &habits).unwrap();

        let loaded_items: Vec<Item> = store.load(TODOS_SLOT).unwrap();
        let loaded_habits: Vec<crate::model::habit::Habit> = store.load(HABITS_SLOT).unwrap();
        assert_eq!(loaded_items, items);
        assert_eq!(loaded_habits, habits);
    }

    #[test]
    fn save_overwrites_wholesale() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        store.save(TODOS_SLOT, &sample_items()).unwrap();

        let one = vec![Item::from_fields(
            "42".into(),
            ItemFields {
                text: "only".into(),
                ..ItemFields::default()
            },
            false,
        )];
        store.save(TODOS_SLOT, &one).unwrap();
        let loaded: Vec<Item> = store.load(TODOS_SLOT).unwrap();
        assert_eq!(loaded, one);
    }

    #[test]
    fn data_dir_prefers_explicit_override() {
        let dir = data_dir(Some(Path::new("/tmp/explicit")));
        assert_eq!(dir, PathBuf::from("/tmp/explicit"));
    }
}
