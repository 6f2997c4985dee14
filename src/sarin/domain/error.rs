//! Error types for Sarin domain validation.

use super::ids::{LotNumber, OperatorName};
use thiserror::Error;

/// Errors returned while constructing Sarin domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SarinDomainError {
    /// The lot number is empty after trimming.
    #[error("lot number must not be empty")]
    EmptyLotNumber,

    /// The operator name is empty after trimming.
    #[error("operator name must not be empty")]
    EmptyOperatorName,

    /// The kapan number is empty after trimming.
    #[error("kapan number must not be empty")]
    EmptyKapanNumber,

    /// The machine number is empty after trimming.
    #[error("machine number must not be empty")]
    EmptyMachineNumber,

    /// The main packet number is empty after trimming.
    #[error("main packet number must not be empty")]
    EmptyMainPacketNumber,

    /// The sender name is empty after trimming.
    #[error("sender name must not be empty")]
    EmptySenderName,

    /// The packet count is zero or negative.
    #[error("packet count must be greater than 0, got {0}")]
    NonPositivePacketCount(i64),
}

/// Reasons a packet reassignment request is refused.
///
/// Every rejection is recoverable: the caller surfaces the reason to the
/// user and the entered form values remain available for correction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferRejection {
    /// One or more required fields were left blank.
    #[error("lot number, source operator, destination operator, and packet count are required")]
    MissingFields,

    /// Source and destination name the same operator.
    #[error("source and destination operators must differ")]
    SameOperator,

    /// The requested packet count is zero or negative.
    #[error("packet count must be greater than 0, got {0}")]
    NonPositiveQuantity(i64),

    /// The source operator holds fewer packets than requested.
    ///
    /// Carries the true available amount so callers can render a precise
    /// message.
    #[error("{operator} only has {available} packets in lot {lot}")]
    InsufficientBalance {
        /// The source operator that was short.
        operator: OperatorName,
        /// The lot the transfer was scoped to.
        lot: LotNumber,
        /// Packets actually available at validation time.
        available: u64,
    },
}
