//! Async front for the shared ledger.
//!
//! Proof-of-work is CPU-bound, so each append runs on tokio's blocking pool.
//! With a deadline configured, an append that overruns it is cancelled; the
//! caller still learns the true outcome, because the service waits for the
//! search to stop before answering. A block that completed in that window is
//! returned as a success rather than reported as a timeout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;
use votechain_ledger::{Block, ChainSnapshot, LedgerError, SharedLedger, VoteCount};
use votechain_types::Vote;
use votechain_work::WorkError;

use crate::NodeError;

#[derive(Clone)]
pub struct LedgerService {
    ledger: Arc<SharedLedger>,
    append_timeout: Option<Duration>,
}

impl LedgerService {
    pub fn new(ledger: Arc<SharedLedger>, append_timeout: Option<Duration>) -> Self {
        Self {
            ledger,
            append_timeout,
        }
    }

    /// Seal `vote` without blocking the async runtime.
    pub async fn append(&self, vote: Vote) -> Result<Block, NodeError> {
        let cancel = Arc::new(AtomicBool::new(false));
        let mut task = {
            let ledger = Arc::clone(&self.ledger);
            let cancel = Arc::clone(&cancel);
            tokio::task::spawn_blocking(move || ledger.append_cancellable(vote, &cancel))
        };

        let Some(limit) = self.append_timeout else {
            return Self::finish(task.await);
        };

        match tokio::time::timeout(limit, &mut task).await {
            Ok(joined) => Self::finish(joined),
            Err(_) => {
                cancel.store(true, Ordering::Relaxed);
                match task.await {
                    Ok(Err(LedgerError::Work(WorkError::Cancelled))) => {
                        tracing::warn!(?limit, "append cancelled after deadline");
                        Err(NodeError::Timeout(limit))
                    }
                    other => Self::finish(other),
                }
            }
        }
    }

    fn finish(joined: Result<Result<Block, LedgerError>, JoinError>) -> Result<Block, NodeError> {
        let block = joined.map_err(|e| NodeError::Task(e.to_string()))??;
        Ok(block)
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        self.ledger.snapshot()
    }

    pub fn has_voted(&self, voter: &str) -> bool {
        self.ledger.has_voted(voter)
    }

    pub fn vote_count(&self) -> VoteCount {
        self.ledger.vote_count()
    }

    pub fn validate(&self) -> Result<bool, NodeError> {
        Ok(self.ledger.validate()?)
    }
}
