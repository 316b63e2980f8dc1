//! Live change feed and per-project ledger subscriptions.
//!
//! The store's real-time fan-out is modelled as a broadcast feed of
//! `{collection, project_id}` events published after each committed write.
//! The three ledger collections are independent streams with no guaranteed
//! relative order; a consumer resyncs by reloading the latest snapshot of all
//! three and recomputing, so a transient mixed render self-corrects on the
//! next event. Dropping a [`ProjectLedger`] releases its subscription.

use crate::{
    core::ledger::{self, ProjectStats},
    entities::{allocation, funding, transaction, Allocation, Funding, Transaction},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use tokio::sync::broadcast;

/// Which ledger collection a change event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCollection {
    /// `budget_allocations`
    Allocations,
    /// `fundings`
    Fundings,
    /// `transactions`
    Transactions,
}

/// A committed change to one ledger collection of one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEvent {
    /// The collection that changed
    pub collection: LedgerCollection,
    /// The project whose records changed
    pub project_id: i64,
}

/// Broadcast feed of committed ledger changes. Cloning shares the same
/// channel; publishing with no live subscribers is a no-op.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<LedgerEvent>,
}

impl ChangeFeed {
    /// Creates a feed buffering up to `capacity` undelivered events per
    /// subscriber. A slow subscriber that lags past the buffer resyncs from
    /// the store instead of replaying the missed events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes a committed change. Called only after the store confirmed
    /// the write, never optimistically.
    pub fn publish(&self, collection: LedgerCollection, project_id: i64) {
        // send only fails when there are no subscribers, which is fine
        let _ = self.sender.send(LedgerEvent {
            collection,
            project_id,
        });
    }

    /// Opens a raw subscription to all ledger events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscriptions, used to verify teardown.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

/// A live view of one project's financial state. Holds its own feed
/// subscription; dropping the value releases it.
pub struct ProjectLedger {
    db: DatabaseConnection,
    project_id: i64,
    receiver: broadcast::Receiver<LedgerEvent>,
}

impl ProjectLedger {
    /// Attaches a live ledger view for `project_id` to the feed.
    #[must_use]
    pub fn attach(db: DatabaseConnection, feed: &ChangeFeed, project_id: i64) -> Self {
        Self {
            db,
            project_id,
            receiver: feed.subscribe(),
        }
    }

    /// Reloads the latest snapshot of all three collections and recomputes
    /// the derived stats. Each collection is authoritative for itself only;
    /// no cross-collection atomicity is assumed.
    pub async fn snapshot(&self) -> Result<ProjectStats> {
        let allocations = Allocation::find()
            .filter(allocation::Column::ProjectId.eq(self.project_id))
            .all(&self.db)
            .await?;
        let fundings = Funding::find()
            .filter(funding::Column::ProjectId.eq(self.project_id))
            .all(&self.db)
            .await?;
        let transactions = Transaction::find()
            .filter(transaction::Column::ProjectId.eq(self.project_id))
            .all(&self.db)
            .await?;

        Ok(ledger::compute_stats(&allocations, &fundings, &transactions))
    }

    /// Waits for the next committed change touching this project and returns
    /// the recomputed stats. Events for other projects are skipped; lagging
    /// behind the feed buffer degrades to an immediate resync.
    pub async fn next_change(&mut self) -> Result<ProjectStats> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.project_id == self.project_id => {
                    return self.snapshot().await;
                }
                Ok(_) => {}
                // Lagged or closed: the snapshot is the authoritative state.
                Err(broadcast::error::RecvError::Lagged(_))
                | Err(broadcast::error::RecvError::Closed) => {
                    return self.snapshot().await;
                }
            }
        }
    }
}

/// Loads the ledger history of a project for display: allocations newest
/// first by `allocated_at`, fundings and transactions newest first by
/// `created_at`.
pub async fn load_history(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<(
    Vec<allocation::Model>,
    Vec<funding::Model>,
    Vec<transaction::Model>,
)> {
    let allocations = Allocation::find()
        .filter(allocation::Column::ProjectId.eq(project_id))
        .order_by_desc(allocation::Column::AllocatedAt)
        .all(db)
        .await?;
    let fundings = Funding::find()
        .filter(funding::Column::ProjectId.eq(project_id))
        .order_by_desc(funding::Column::CreatedAt)
        .all(db)
        .await?;
    let transactions = Transaction::find()
        .filter(transaction::Column::ProjectId.eq(project_id))
        .order_by_desc(transaction::Column::CreatedAt)
        .all(db)
        .await?;

    Ok((allocations, fundings, transactions))
}
