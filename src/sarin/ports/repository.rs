//! Repository port for packet entry storage and lot lookup.

use crate::sarin::domain::{EntryId, LotNumber, PacketEntry};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for packet entry repository operations.
pub type PacketEntryRepositoryResult<T> = Result<T, PacketEntryRepositoryError>;

/// Packet entry storage contract.
#[async_trait]
pub trait PacketEntryRepository: Send + Sync {
    /// Stores a new packet entry.
    ///
    /// # Errors
    ///
    /// Returns [`PacketEntryRepositoryError::DuplicateEntry`] when the entry
    /// ID already exists.
    async fn store(&self, entry: &PacketEntry) -> PacketEntryRepositoryResult<()>;

    /// Returns all entries recorded against the given lot, oldest first.
    async fn find_by_lot(&self, lot: &LotNumber) -> PacketEntryRepositoryResult<Vec<PacketEntry>>;

    /// Returns the number of stored entries.
    async fn count(&self) -> PacketEntryRepositoryResult<usize>;
}

/// Errors returned by packet entry repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PacketEntryRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate entry identifier: {0}")]
    DuplicateEntry(EntryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PacketEntryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
