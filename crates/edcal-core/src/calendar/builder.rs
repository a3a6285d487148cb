//! Builder for creating and configuring Calendar instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::task;

use super::{Calendar, DEFAULT_DEBOUNCE};
use crate::{
    error::{CalendarError, Result},
    models::PlanDocument,
    storage::{reconcile, Storage, StorageKeys},
    store::PlanStore,
};

/// Builder for creating and configuring Calendar instances.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    database_path: Option<PathBuf>,
    keys: StorageKeys,
    debounce: Duration,
}

impl CalendarBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            keys: StorageKeys::default(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/edcal/edcal.db` or `~/.local/share/edcal/edcal.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the storage key set (current + legacy fallbacks).
    pub fn with_storage_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Overrides the autosave debounce delay (500 ms by default).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Builds the calendar, executing the load protocol once.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::FileSystem` if the database path is invalid
    /// Returns `CalendarError::Storage` if storage initialization fails
    pub async fn build(self) -> Result<Calendar> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CalendarError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let load_path = db_path.clone();
        let load_keys = self.keys.clone();
        let store = task::spawn_blocking(move || {
            let storage = Storage::new(&load_path)?;
            load_store(&storage, &load_keys)
        })
        .await
        .map_err(|e| CalendarError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Calendar::new(db_path, self.keys, self.debounce, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("edcal")
            .place_data_file("edcal.db")
            .map_err(|e| CalendarError::XdgDirectory(e.to_string()))
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes the load protocol: current key first, legacy keys as fallback,
/// loose parse, reconciliation against the catalog.
///
/// A document that cannot be parsed at all is treated as "no data found" and
/// logged; the calendar then starts from the catalog defaults.
fn load_store(storage: &Storage, keys: &StorageKeys) -> Result<PlanStore> {
    let Some((key, raw)) = storage.first_hit(keys.lookup_order())? else {
        log::info!("no persisted plan found; starting from the catalog");
        return Ok(PlanStore::default());
    };

    match PlanDocument::from_json_str(&raw) {
        Ok(document) => {
            log::info!("loaded plan document from storage key '{key}'");
            Ok(reconcile::reconcile_document(document))
        }
        Err(e) => {
            log::warn!("discarding unreadable plan document at '{key}': {e}");
            Ok(PlanStore::default())
        }
    }
}
