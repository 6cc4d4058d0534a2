use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::data::record_store::RecordStore;

/// Process-local store backed by a map of JSON values. Used in tests and by
/// embedders that want the full service stack without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read_all<T: DeserializeOwned>(&self, collection: &str) -> Vec<T> {
        let cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        let Some(value) = cells.get(collection) else {
            return Vec::new();
        };
        match serde_json::from_value(value.clone()) {
            Ok(records) => records,
            Err(err) => {
                warn!(collection, error = %err, "corrupt collection payload, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_all<T: Serialize>(&self, collection: &str, records: &[T]) {
        match serde_json::to_value(records) {
            Ok(value) => {
                let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
                cells.insert(collection.to_owned(), value);
            }
            Err(err) => warn!(collection, error = %err, "serialization failed, write dropped"),
        }
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        let value = cells.get(slot)?.clone();
        drop(cells);
        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(slot, error = %err, "corrupt slot payload, treating as absent");
                None
            }
        }
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
                cells.insert(slot.to_owned(), value);
            }
            Err(err) => warn!(slot, error = %err, "serialization failed, write dropped"),
        }
    }

    fn clear_slot(&self, slot: &str) {
        let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        cells.remove(slot);
    }
}

/// The storage-medium-unavailable environment: every read is empty, every
/// write is dropped. Matches the contract that a missing medium is the
/// empty state, never an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl RecordStore for NullStore {
    fn read_all<T: DeserializeOwned>(&self, _collection: &str) -> Vec<T> {
        Vec::new()
    }

    fn write_all<T: Serialize>(&self, _collection: &str, _records: &[T]) {}

    fn read_slot<T: DeserializeOwned>(&self, _slot: &str) -> Option<T> {
        None
    }

    fn write_slot<T: Serialize>(&self, _slot: &str, _value: &T) {}

    fn clear_slot(&self, _slot: &str) {}
}
