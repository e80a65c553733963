//! Whole-collection persistence boundary for alerts.
//!
//! The service never patches individual records on disk: every mutation is
//! load, modify in memory, save the full collection. Stores are injected
//! into the service at construction so tests can swap the file-backed store
//! for [`MemoryStore`].

pub mod file_store;

pub use file_store::FileStore;

use std::sync::Mutex;

use crate::error::StorageError;
use crate::models::Alert;

/// Durable storage of the full alert collection as a single unit.
pub trait AlertStore: Send + Sync {
    /// Returns the persisted collection, in insertion order. A store that
    /// has never been written to yields an empty collection; this is not an
    /// error. Unreadable content degrades to empty as well (see
    /// [`FileStore`] for the policy).
    fn load(&self) -> Vec<Alert>;

    /// Replaces the persisted collection. Either the full collection lands
    /// or the previous contents survive; failures propagate to the caller.
    fn save(&self, alerts: &[Alert]) -> Result<(), StorageError>;
}

/// In-memory store, mainly for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    alerts: Mutex<Vec<Alert>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertStore for MemoryStore {
    fn load(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save(&self, alerts: &[Alert]) -> Result<(), StorageError> {
        *self
            .alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = alerts.to_vec();
        Ok(())
    }
}
