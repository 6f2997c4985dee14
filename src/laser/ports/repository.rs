//! Repository port for laser lot persistence and lookup.

use crate::laser::domain::{LaserLot, LotNumber};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for laser lot repository operations.
pub type LaserLotRepositoryResult<T> = Result<T, LaserLotRepositoryError>;

/// Laser lot storage contract.
///
/// Lot numbers are unique across all laser operations; storing a second
/// lot under an existing number is refused.
#[async_trait]
pub trait LaserLotRepository: Send + Sync {
    /// Stores a new lot.
    ///
    /// # Errors
    ///
    /// Returns [`LaserLotRepositoryError::DuplicateLotNumber`] when a lot
    /// with the same number already exists.
    async fn store(&self, lot: &LaserLot) -> LaserLotRepositoryResult<()>;

    /// Persists changes to an existing lot (status transitions).
    ///
    /// # Errors
    ///
    /// Returns [`LaserLotRepositoryError::NotFound`] when the lot does not
    /// exist.
    async fn update(&self, lot: &LaserLot) -> LaserLotRepositoryResult<()>;

    /// Finds a lot by its number.
    ///
    /// Returns `None` when no lot has the given number.
    async fn find_by_number(&self, number: &LotNumber)
        -> LaserLotRepositoryResult<Option<LaserLot>>;

    /// Returns all active lots, oldest entry first.
    async fn list_active(&self) -> LaserLotRepositoryResult<Vec<LaserLot>>;

    /// Returns all returned lots, most recently returned first.
    async fn list_returned(&self) -> LaserLotRepositoryResult<Vec<LaserLot>>;

    /// Returns the number of stored lots, active and returned.
    async fn count(&self) -> LaserLotRepositoryResult<usize>;
}

/// Errors returned by laser lot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LaserLotRepositoryError {
    /// A lot with the same number already exists.
    #[error("lot number {0} already exists")]
    DuplicateLotNumber(LotNumber),

    /// The lot was not found.
    #[error("lot not found: {0}")]
    NotFound(LotNumber),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LaserLotRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
