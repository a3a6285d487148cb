//! Debounced persistence writes.
//!
//! Every store mutation schedules a deferred write of the full document to
//! the current storage key. Scheduling again before the delay elapses cancels
//! the pending timer, so a burst of edits produces exactly one write. The
//! store is serialized when the timer fires, never from a snapshot taken at
//! scheduling time.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use jiff::Timestamp;
use tokio::{task, time};

use crate::{
    error::{CalendarError, Result},
    storage::Storage,
    store::PlanStore,
};

/// State of the deferred save task. At most one timer is pending per
/// calendar.
#[derive(Default)]
pub(crate) struct Autosave {
    pending: Option<task::JoinHandle<()>>,
}

impl Autosave {
    /// Cancels any pending timer and starts a new one.
    pub(crate) fn schedule(&mut self, debounce: Duration, target: SaveTarget) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            time::sleep(debounce).await;
            if let Err(e) = write_now(target).await {
                log::error!("debounced save failed: {e}");
            }
        }));
    }

    /// Cancels the pending timer, if any, without writing.
    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a write is scheduled and has not fired yet.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Everything a deferred write needs to reach the store and the database.
pub(crate) struct SaveTarget {
    pub(crate) db_path: PathBuf,
    pub(crate) key: String,
    pub(crate) store: Arc<Mutex<PlanStore>>,
    pub(crate) saved_at: Arc<Mutex<Option<Timestamp>>>,
}

/// Serializes the current store and writes it at the current key.
pub(crate) async fn write_now(target: SaveTarget) -> Result<()> {
    let json = {
        let store = target
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        serde_json::to_string(&store.document())?
    };

    let SaveTarget {
        db_path,
        key,
        saved_at,
        ..
    } = target;

    task::spawn_blocking(move || {
        let storage = Storage::new(&db_path)?;
        storage.set(&key, &json)
    })
    .await
    .map_err(|e| CalendarError::Configuration {
        message: format!("Task join error: {e}"),
    })??;

    *saved_at.lock().unwrap_or_else(PoisonError::into_inner) = Some(Timestamp::now());
    Ok(())
}
