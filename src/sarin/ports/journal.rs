//! Journal port for completed reassignment history.

use crate::sarin::domain::CompletedReassignment;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transfer journal operations.
pub type TransferJournalResult<T> = Result<T, TransferJournalError>;

/// Record of completed packet reassignments, newest first.
///
/// Backs the "recent reassignments" listing; the journal is append-only
/// and plays no part in balance accounting.
#[async_trait]
pub trait TransferJournal: Send + Sync {
    /// Appends a completed reassignment.
    ///
    /// # Errors
    ///
    /// Returns [`TransferJournalError::Unavailable`] when the backing store
    /// cannot be written.
    async fn record(&self, reassignment: &CompletedReassignment) -> TransferJournalResult<()>;

    /// Returns up to `limit` of the most recent reassignments, newest first.
    async fn recent(&self, limit: usize) -> TransferJournalResult<Vec<CompletedReassignment>>;
}

/// Errors returned by transfer journal implementations.
#[derive(Debug, Clone, Error)]
pub enum TransferJournalError {
    /// The backing store failed.
    #[error("transfer journal unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransferJournalError {
    /// Wraps a backing-store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
