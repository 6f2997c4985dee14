//! Ledger port for per-(operator, lot) packet balance bookkeeping.

use crate::sarin::domain::{LotNumber, OperatorName, PacketQuantity, TransferRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Balances actually written by a committed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedTransfer {
    /// Source operator's balance after the debit.
    pub from_after: u64,
    /// Destination operator's balance after the credit.
    pub to_after: u64,
}

/// Packet balance bookkeeping contract.
///
/// The ledger owns every (operator, lot) balance; the rest of the context
/// only reads them. Balances are non-negative by construction: credits add,
/// and transfers debit only what [`PacketLedger::apply_transfer`] has
/// re-verified as available.
#[async_trait]
pub trait PacketLedger: Send + Sync {
    /// Returns the packets currently attributed to `operator` within `lot`.
    ///
    /// Unknown (operator, lot) pairs read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unavailable`] when the backing store cannot be
    /// read.
    async fn balance(&self, operator: &OperatorName, lot: &LotNumber) -> LedgerResult<u64>;

    /// Credits `quantity` packets to `operator` within `lot`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unavailable`] when the backing store cannot be
    /// written.
    async fn credit(
        &self,
        operator: &OperatorName,
        lot: &LotNumber,
        quantity: PacketQuantity,
    ) -> LedgerResult<u64>;

    /// Moves the requested packets from source to destination in one atomic
    /// step.
    ///
    /// The available balance is re-checked under the same critical section
    /// that performs the debit and credit, so two racing transfers cannot
    /// both observe a sufficient balance and drive it negative.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] when the source no
    /// longer holds the requested quantity at commit time, or
    /// [`LedgerError::Unavailable`] when the backing store fails.
    async fn apply_transfer(&self, request: &TransferRequest) -> LedgerResult<CommittedTransfer>;

    /// Returns every non-zero (operator, lot) balance.
    async fn snapshot(&self) -> LedgerResult<Vec<(OperatorName, LotNumber, u64)>>;
}

/// Errors returned by ledger implementations.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The source operator no longer holds the requested quantity.
    #[error("{operator} only has {available} packets in lot {lot}")]
    InsufficientBalance {
        /// The operator that was short at commit time.
        operator: OperatorName,
        /// The lot the transfer was scoped to.
        lot: LotNumber,
        /// Packets actually available at commit time.
        available: u64,
        /// Packets the transfer asked for.
        requested: u64,
    },

    /// The backing store failed.
    #[error("ledger unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl LedgerError {
    /// Wraps a backing-store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
