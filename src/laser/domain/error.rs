//! Error types for laser domain validation and parsing.

use super::ids::LotNumber;
use thiserror::Error;

/// Errors returned while constructing laser domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaserDomainError {
    /// The lot number is empty after trimming.
    #[error("lot number must not be empty")]
    EmptyLotNumber,

    /// The kapan number is empty after trimming.
    #[error("kapan number must not be empty")]
    EmptyKapanNumber,

    /// The tension type identifier is empty after trimming.
    #[error("tension type must not be empty")]
    EmptyTensionTypeId,

    /// The machine identifier is empty after trimming.
    #[error("machine must not be empty")]
    EmptyMachineId,

    /// The operator name is empty after trimming.
    #[error("operator name must not be empty")]
    EmptyOperatorName,

    /// The sender name is empty after trimming.
    #[error("sender name must not be empty")]
    EmptySenderName,

    /// The machine name is empty after trimming.
    #[error("machine name must not be empty")]
    EmptyMachineName,

    /// The tension type name is empty after trimming.
    #[error("tension type name must not be empty")]
    EmptyTensionTypeName,

    /// The packet count is zero or negative.
    #[error("packet count must be greater than 0, got {0}")]
    NonPositivePacketCount(i64),

    /// The lot has already been returned.
    #[error("lot {0} has already been returned")]
    AlreadyReturned(LotNumber),
}

/// Error returned while parsing machine statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown machine status: {0}")]
pub struct ParseMachineStatusError(pub String);

/// Error returned while parsing return reasons.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown return reason: {0}")]
pub struct ParseReturnReasonError(pub String);
