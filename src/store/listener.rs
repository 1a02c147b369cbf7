//! Snapshot push channel.
//!
//! The managed store pushes a full snapshot on every change. This listener
//! adapts that contract to a polling REST client: it re-fetches the list on
//! an interval and publishes it through a watch channel whenever it differs
//! from the last published snapshot. Consumers only ever see whole lists.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::transaction::Transaction;

use super::client::DocumentStore;

/// Receives whole-list snapshots as they change.
pub type SnapshotReceiver = watch::Receiver<Arc<[Transaction]>>;

/// Start watching the store for snapshot changes.
///
/// A failed poll is logged and the last good snapshot stays current; there
/// is no retry beyond the next tick. The task ends when every receiver has
/// been dropped.
pub fn watch_snapshots(
    store: Arc<dyn DocumentStore>,
    poll_interval: Duration,
) -> (SnapshotReceiver, JoinHandle<()>) {
    let (sender, receiver) = watch::channel::<Arc<[Transaction]>>(Vec::new().into());

    let handle = tokio::spawn(async move {
        loop {
            if sender.is_closed() {
                break;
            }

            match store.list().await {
                Ok(transactions) => {
                    let snapshot: Arc<[Transaction]> = transactions.into();
                    sender.send_if_modified(|current| {
                        if *current == snapshot {
                            false
                        } else {
                            *current = snapshot;
                            true
                        }
                    });
                }
                Err(error) => {
                    tracing::warn!("could not fetch a snapshot: {error}");
                }
            }

            tokio::time::sleep(poll_interval).await;
        }
    });

    (receiver, handle)
}
