//! The remote wallet store: client, snapshot handling, and the save
//! pipeline.
//!
//! Everything durable lives in a managed per-user document collection. The
//! engine never patches the in-memory list: the store (or the polling
//! listener standing in for its push channel) delivers whole snapshots, and
//! the [SnapshotCell] swaps them in atomically.

mod client;
mod listener;
mod save;
mod snapshot;

pub use client::{DocumentStore, MemoryStore, RestStore, UsernameRecord};
pub use listener::{SnapshotReceiver, watch_snapshots};
pub use save::{delete_transaction, save_transaction};
pub use snapshot::SnapshotCell;
