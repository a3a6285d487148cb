//! High-level calendar API.
//!
//! [`Calendar`] is the long-lived owner of the in-memory [`PlanStore`]: it
//! loads the store through the persistence adapter at startup (see
//! [`builder`]), applies mutations, and writes changes back through a
//! debounced autosave (see [`autosave`]). Handlers for the individual
//! operations live in [`handlers`].
//!
//! Mutations take the store mutex only for the duration of the in-memory
//! change; persistence happens afterwards on the timer task, off the calling
//! path. A final [`Calendar::flush`] cancels any pending timer and persists
//! immediately, which is how short-lived callers guarantee their last edit
//! survives.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use jiff::Timestamp;

use crate::{error::Result, storage::StorageKeys, store::PlanStore};

pub mod autosave;
pub mod builder;
pub mod handlers;

#[cfg(test)]
mod tests;

pub use builder::CalendarBuilder;

use autosave::{Autosave, SaveTarget};

/// Delay between the last store mutation and the persistence write.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Main calendar interface owning the plan store and its persistence.
pub struct Calendar {
    db_path: PathBuf,
    keys: StorageKeys,
    debounce: Duration,
    store: Arc<Mutex<PlanStore>>,
    autosave: Mutex<Autosave>,
    saved_at: Arc<Mutex<Option<Timestamp>>>,
}

impl Calendar {
    /// Creates a calendar around an already-loaded store.
    pub(crate) fn new(
        db_path: PathBuf,
        keys: StorageKeys,
        debounce: Duration,
        store: PlanStore,
    ) -> Self {
        Self {
            db_path,
            keys,
            debounce,
            store: Arc::new(Mutex::new(store)),
            autosave: Mutex::new(Autosave::default()),
            saved_at: Arc::new(Mutex::new(None)),
        }
    }

    /// Locks the store, recovering from poisoning.
    ///
    /// Mutations never panic while holding the lock, so a poisoned mutex can
    /// only carry a fully consistent store.
    pub(crate) fn store(&self) -> MutexGuard<'_, PlanStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a clone of the current store state.
    pub fn snapshot(&self) -> PlanStore {
        self.store().clone()
    }

    /// Timestamp of the last successful persistence write, if any.
    pub fn saved_at(&self) -> Option<Timestamp> {
        *self.saved_at.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a debounced write is scheduled and has not fired yet.
    pub fn save_pending(&self) -> bool {
        self.autosave
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_pending()
    }

    /// Schedules (or reschedules) the debounced write.
    pub(crate) fn schedule_save(&self) {
        self.autosave
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .schedule(self.debounce, self.save_target());
    }

    /// Drops any pending debounced write without persisting.
    pub(crate) fn cancel_pending_save(&self) {
        self.autosave
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }

    /// Cancels any pending debounced write and persists immediately.
    pub async fn flush(&self) -> Result<()> {
        self.cancel_pending_save();
        autosave::write_now(self.save_target()).await
    }

    fn save_target(&self) -> SaveTarget {
        SaveTarget {
            db_path: self.db_path.clone(),
            key: self.keys.current.clone(),
            store: Arc::clone(&self.store),
            saved_at: Arc::clone(&self.saved_at),
        }
    }
}
