//! Reassignment request and outcome types.

use super::ids::{LotNumber, OperatorName};
use super::quantity::PacketQuantity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw reassignment form input, prior to any validation.
///
/// Mirrors the reassignment form exactly as the user filled it in: all
/// fields are unchecked strings plus a signed count, so a rejected draft
/// can be handed back for correction without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDraft {
    lot: String,
    from_operator: String,
    to_operator: String,
    quantity: i64,
}

impl TransferDraft {
    /// Creates a draft from raw form values.
    #[must_use]
    pub fn new(
        lot: impl Into<String>,
        from_operator: impl Into<String>,
        to_operator: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            lot: lot.into(),
            from_operator: from_operator.into(),
            to_operator: to_operator.into(),
            quantity,
        }
    }

    /// Returns the raw lot number field.
    #[must_use]
    pub fn lot(&self) -> &str {
        &self.lot
    }

    /// Returns the raw source operator field.
    #[must_use]
    pub fn from_operator(&self) -> &str {
        &self.from_operator
    }

    /// Returns the raw destination operator field.
    #[must_use]
    pub fn to_operator(&self) -> &str {
        &self.to_operator
    }

    /// Returns the raw packet count field.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Validated reassignment request.
///
/// Construction is reserved to [`crate::sarin::validation::transfer`]; a
/// value of this type guarantees non-empty identifiers, distinct operators,
/// and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub(crate) lot: LotNumber,
    pub(crate) from: OperatorName,
    pub(crate) to: OperatorName,
    pub(crate) quantity: PacketQuantity,
}

impl TransferRequest {
    /// Returns the lot the transfer is scoped to.
    #[must_use]
    pub const fn lot(&self) -> &LotNumber {
        &self.lot
    }

    /// Returns the source operator.
    #[must_use]
    pub const fn from(&self) -> &OperatorName {
        &self.from
    }

    /// Returns the destination operator.
    #[must_use]
    pub const fn to(&self) -> &OperatorName {
        &self.to
    }

    /// Returns the packet count to move.
    #[must_use]
    pub const fn quantity(&self) -> PacketQuantity {
        self.quantity
    }
}

/// Before/after balance pair for one operator within the transfer's lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    /// Balance read at validation time.
    pub before: u64,
    /// Balance the transfer would leave behind.
    pub after: u64,
}

/// Admitted transfer together with the balances it would produce.
///
/// Produced by the pure validation layer; nothing has been committed yet.
/// The preview is advisory: the ledger re-checks availability atomically
/// when the transfer is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedTransfer {
    request: TransferRequest,
    source: BalanceChange,
    destination: BalanceChange,
}

impl ApprovedTransfer {
    pub(crate) const fn new(
        request: TransferRequest,
        source: BalanceChange,
        destination: BalanceChange,
    ) -> Self {
        Self {
            request,
            source,
            destination,
        }
    }

    /// Returns the validated request this approval covers.
    #[must_use]
    pub const fn request(&self) -> &TransferRequest {
        &self.request
    }

    /// Returns the source operator's before/after balances.
    #[must_use]
    pub const fn source(&self) -> BalanceChange {
        self.source
    }

    /// Returns the destination operator's before/after balances.
    #[must_use]
    pub const fn destination(&self) -> BalanceChange {
        self.destination
    }

    /// Returns the total packets held by both parties, which the transfer
    /// leaves unchanged.
    #[must_use]
    pub const fn conserved_total(&self) -> u64 {
        self.source.before + self.destination.before
    }
}

/// A reassignment that has been committed to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedReassignment {
    request: TransferRequest,
    source_after: u64,
    destination_after: u64,
    occurred_at: DateTime<Utc>,
}

impl CompletedReassignment {
    /// Creates a completed-reassignment record.
    #[must_use]
    pub const fn new(
        request: TransferRequest,
        source_after: u64,
        destination_after: u64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            request,
            source_after,
            destination_after,
            occurred_at,
        }
    }

    /// Returns the request that was committed.
    #[must_use]
    pub const fn request(&self) -> &TransferRequest {
        &self.request
    }

    /// Returns the source operator's balance after the commit.
    #[must_use]
    pub const fn source_after(&self) -> u64 {
        self.source_after
    }

    /// Returns the destination operator's balance after the commit.
    #[must_use]
    pub const fn destination_after(&self) -> u64 {
        self.destination_after
    }

    /// Returns when the transfer was committed.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
