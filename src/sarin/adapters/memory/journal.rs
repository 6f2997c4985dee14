//! In-memory transfer journal.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::sarin::domain::CompletedReassignment;
use crate::sarin::ports::{TransferJournal, TransferJournalError, TransferJournalResult};

/// Thread-safe in-memory transfer journal.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransferJournal {
    state: Arc<RwLock<Vec<CompletedReassignment>>>,
}

impl InMemoryTransferJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TransferJournalError {
    TransferJournalError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TransferJournal for InMemoryTransferJournal {
    async fn record(&self, reassignment: &CompletedReassignment) -> TransferJournalResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.push(reassignment.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> TransferJournalResult<Vec<CompletedReassignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.iter().rev().take(limit).cloned().collect())
    }
}
