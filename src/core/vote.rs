//! Session-local vote deduplication.
//!
//! The store only ever sees an atomic increment; whether a visitor already
//! voted is tracked per client session in memory. The guard is intentionally
//! weak: a new session (or process restart) forgets all prior votes, which
//! matches the public voting surface where best-effort dedup is enough.

use crate::errors::Result;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use tracing::debug;

/// What happened when a session tried to vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was counted; carries the new total.
    Counted {
        /// Vote total after the increment
        total: i32,
    },
    /// This session already voted for the project; nothing was written.
    AlreadyVoted,
}

/// Per-session vote memory. One guard per client session, not shared.
#[derive(Debug, Default)]
pub struct VoteGuard {
    voted: HashSet<i64>,
}

impl VoteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this session has already voted for the project.
    #[must_use]
    pub fn has_voted(&self, project_id: i64) -> bool {
        self.voted.contains(&project_id)
    }

    /// Casts a vote for the project unless this session already did.
    ///
    /// The project is marked as voted only after the increment succeeds, so
    /// a failed write leaves the session free to retry.
    pub async fn vote(
        &mut self,
        db: &DatabaseConnection,
        project_id: i64,
    ) -> Result<VoteOutcome> {
        if self.has_voted(project_id) {
            debug!(project_id, "duplicate vote ignored");
            return Ok(VoteOutcome::AlreadyVoted);
        }

        let updated = super::project::add_vote(db, project_id).await?;
        self.voted.insert(project_id);
        Ok(VoteOutcome::Counted {
            total: updated.votes,
        })
    }
}
