//! Identifier and validated scalar types for the laser domain.

use super::LaserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized laser lot number (e.g. `LL001`), unique across all laser
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotNumber(String);

impl LotNumber {
    /// Creates a validated lot number.
    ///
    /// The input is trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyLotNumber`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyLotNumber);
        }
        Ok(Self(normalized))
    }

    /// Returns the lot number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LotNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kapan number naming the source batch a laser lot came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KapanNumber(String);

impl KapanNumber {
    /// Creates a validated kapan number.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyKapanNumber`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyKapanNumber);
        }
        Ok(Self(normalized))
    }

    /// Returns the kapan number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KapanNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a tension type (e.g. `T001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TensionTypeId(String);

impl TensionTypeId {
    /// Creates a validated tension type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyTensionTypeId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyTensionTypeId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TensionTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a laser machine (e.g. `M1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(String);

impl MachineId {
    /// Creates a validated machine identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyMachineId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyMachineId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a laser operator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorName(String);

impl OperatorName {
    /// Creates a validated operator name, trimmed but otherwise preserved.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyOperatorName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyOperatorName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the operator name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of whoever sent the material for a laser lot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderName(String);

impl SenderName {
    /// Creates a validated sender name, trimmed but otherwise preserved.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptySenderName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LaserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptySenderName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the sender name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive number of packets in a laser lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketCount(u64);

impl PacketCount {
    /// Creates a validated packet count from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::NonPositivePacketCount`] when the value
    /// is zero or negative.
    pub fn new(value: i64) -> Result<Self, LaserDomainError> {
        match u64::try_from(value) {
            Ok(count) if count > 0 => Ok(Self(count)),
            _ => Err(LaserDomainError::NonPositivePacketCount(value)),
        }
    }

    /// Returns the underlying packet count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PacketCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
