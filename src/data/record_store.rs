use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::infrastructure::config::AppConfig;

/// Collection holding every registered [`crate::domain::user::User`].
pub const USERS: &str = "users";
/// Collection holding every [`crate::domain::todo::Todo`] across all users.
pub const TODOS: &str = "todos";
/// Single-value slot holding the authenticated user, if any.
pub const CURRENT_USER: &str = "currentUser";

/// Whole-collection key-value persistence. The only primitives are
/// whole-collection read and whole-collection overwrite, so every mutation
/// is a read-modify-write of the full collection. That costs O(collection)
/// per operation, which is fine for the intended scale: one person's
/// manually entered journal.
///
/// The store never fails: an unavailable or unreadable medium degrades to
/// empty reads and dropped writes, and callers are expected to tolerate
/// the empty state.
pub trait RecordStore {
    fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Vec<T>;
    fn write_all<T: Serialize>(&self, collection: &str, records: &[T]);

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T>;
    fn write_slot<T: Serialize>(&self, slot: &str, value: &T);
    fn clear_slot(&self, slot: &str);
}

/// Durable store keeping each collection in `<dir>/<name>.json`. Writes go
/// through a temp file in the same directory and a rename, so a crash
/// mid-write leaves the previous payload intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn load(&self, name: &str) -> Option<String> {
        match fs::read_to_string(self.path(name)) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(name, error = %err, "storage medium unreadable, degrading to empty");
                None
            }
        }
    }

    fn persist(&self, name: &str, payload: &[u8]) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(name, error = %err, "cannot create data directory, write dropped");
            return;
        }
        let tmp = self.dir.join(format!("{name}.json.tmp"));
        let result = fs::write(&tmp, payload).and_then(|()| fs::rename(&tmp, self.path(name)));
        if let Err(err) = result {
            warn!(name, error = %err, "write failed, previous payload kept");
        }
    }
}

impl RecordStore for JsonFileStore {
    fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        let Some(raw) = self.load(collection) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(collection, error = %err, "corrupt collection payload, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_all<T: Serialize>(&self, collection: &str, records: &[T]) {
        match serde_json::to_vec(records) {
            Ok(payload) => self.persist(collection, &payload),
            Err(err) => warn!(collection, error = %err, "serialization failed, write dropped"),
        }
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let raw = self.load(slot)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(slot, error = %err, "corrupt slot payload, treating as absent");
                None
            }
        }
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) {
        match serde_json::to_vec(value) {
            Ok(payload) => self.persist(slot, &payload),
            Err(err) => warn!(slot, error = %err, "serialization failed, write dropped"),
        }
    }

    fn clear_slot(&self, slot: &str) {
        if let Err(err) = fs::remove_file(self.path(slot)) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(slot, error = %err, "could not clear slot");
            }
        } else {
            debug!(slot, "slot cleared");
        }
    }
}
