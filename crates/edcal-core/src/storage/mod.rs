//! Durable key-value storage backed by SQLite.
//!
//! The persistence adapter thinks in "document at a key" terms: one current
//! key that gets written, a few deprecated keys consulted as read fallbacks.
//! This module provides that durable KV surface on top of a single SQLite
//! table.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StorageResultExt};

pub mod keys;
pub mod reconcile;

pub use keys::StorageKeys;

/// Key-value storage handle over one SQLite database file.
pub struct Storage {
    connection: Connection,
}

impl Storage {
    /// Opens the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open storage database")?;

        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute(
                "CREATE TABLE IF NOT EXISTS storage (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                )",
                [],
            )
            .storage_context("Failed to initialize storage schema")?;
        Ok(())
    }

    /// Reads the value stored at a key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .storage_context("Failed to read storage key")
    }

    /// Writes a value at a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                "INSERT INTO storage (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .storage_context("Failed to write storage key")?;
        Ok(())
    }

    /// Removes a key if present.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM storage WHERE key = ?1", params![key])
            .storage_context("Failed to remove storage key")?;
        Ok(())
    }

    /// Scans keys in order and returns the first non-empty hit.
    ///
    /// This is the legacy-key migration shim: the caller passes the current
    /// key followed by the deprecated ones, and old data is found without
    /// ever being rewritten under its old key.
    pub fn first_hit<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<Option<(String, String)>> {
        for key in keys {
            if let Some(value) = self.get(key)? {
                if !value.is_empty() {
                    return Ok(Some((key.to_string(), value)));
                }
            }
        }
        Ok(None)
    }

    /// Removes the current key and every legacy key.
    pub fn clear(&self, keys: &StorageKeys) -> Result<()> {
        for key in keys.lookup_order() {
            self.remove(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = Storage::new(dir.path().join("test.db")).expect("Failed to open storage");
        (dir, storage)
    }

    #[test]
    fn set_get_remove_round_trip() {
        let (_dir, storage) = open_temp_storage();
        assert_eq!(storage.get("k").expect("get"), None);

        storage.set("k", "v1").expect("set");
        assert_eq!(storage.get("k").expect("get"), Some("v1".to_string()));

        storage.set("k", "v2").expect("overwrite");
        assert_eq!(storage.get("k").expect("get"), Some("v2".to_string()));

        storage.remove("k").expect("remove");
        assert_eq!(storage.get("k").expect("get"), None);
    }

    #[test]
    fn first_hit_prefers_earlier_keys() {
        let (_dir, storage) = open_temp_storage();
        storage.set("old", "legacy data").expect("set");
        storage.set("older", "ancient data").expect("set");

        let hit = storage
            .first_hit(["new", "old", "older"])
            .expect("first_hit");
        assert_eq!(hit, Some(("old".to_string(), "legacy data".to_string())));
    }

    #[test]
    fn first_hit_skips_empty_values() {
        let (_dir, storage) = open_temp_storage();
        storage.set("new", "").expect("set");
        storage.set("old", "data").expect("set");

        let hit = storage.first_hit(["new", "old"]).expect("first_hit");
        assert_eq!(hit, Some(("old".to_string(), "data".to_string())));
    }

    #[test]
    fn clear_removes_current_and_legacy_keys() {
        let (_dir, storage) = open_temp_storage();
        let keys = StorageKeys::default();
        for key in keys.lookup_order() {
            storage.set(key, "something").expect("set");
        }
        storage.set("unrelated", "kept").expect("set");

        storage.clear(&keys).expect("clear");
        for key in keys.lookup_order() {
            assert_eq!(storage.get(key).expect("get"), None);
        }
        assert_eq!(
            storage.get("unrelated").expect("get"),
            Some("kept".to_string())
        );
    }
}
