//! The in-memory copy of the transaction list.
//!
//! The store replaces the whole list on every change notification; nothing
//! patches it incrementally. The cell hands out the current list as a shared
//! immutable slice, so a render pass that started before a snapshot arrived
//! keeps reading a consistent list while the next pass sees the new one.

use std::sync::{Arc, RwLock};

use crate::transaction::Transaction;

/// Holds the current snapshot and swaps it atomically.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    current: RwLock<Arc<[Transaction]>>,
}

impl SnapshotCell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a new snapshot.
    pub fn apply(&self, transactions: Vec<Transaction>) {
        let snapshot: Arc<[Transaction]> = transactions.into();
        *self.write_guard() = snapshot;
    }

    /// The current snapshot. Cheap to clone; never mutated in place.
    pub fn load(&self) -> Arc<[Transaction]> {
        self.read_guard().clone()
    }

    /// Drop all data, e.g. on logout.
    pub fn clear(&self) {
        *self.write_guard() = Vec::new().into();
    }

    // The guarded value is a single pointer that is only ever replaced
    // wholesale, so a poisoned lock still holds a complete snapshot.
    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Arc<[Transaction]>> {
        self.current
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Arc<[Transaction]>> {
        self.current
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
