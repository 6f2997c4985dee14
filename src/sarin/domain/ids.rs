//! Identifier and validated scalar types for the Sarin domain.

use super::SarinDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a recorded packet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an entry identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for EntryId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized lot number identifying a batch of packets (e.g. `L001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotNumber(String);

impl LotNumber {
    /// Creates a validated lot number.
    ///
    /// The input is trimmed and uppercased so `l001` and `L001 ` identify
    /// the same lot.
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::EmptyLotNumber`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SarinDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(SarinDomainError::EmptyLotNumber);
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

/// Name of the worker to whom packets are attributed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorName(String);

impl OperatorName {
    /// Creates a validated operator name.
    ///
    /// The input is trimmed; interior whitespace and casing are preserved
    /// because operator names are display names (`John Doe`).
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::EmptyOperatorName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SarinDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(SarinDomainError::EmptyOperatorName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the operator name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OperatorName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kapan number naming the source batch a packet entry came from.
///
/// Kapan identifiers are domain bookkeeping only; they take no part in
/// balance accounting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KapanNumber(String);

impl KapanNumber {
    /// Creates a validated kapan number.
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::EmptyKapanNumber`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SarinDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(SarinDomainError::EmptyKapanNumber);
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

/// Machine number a packet entry was processed on (e.g. `M001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineNumber(String);

impl MachineNumber {
    /// Creates a validated machine number.
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::EmptyMachineNumber`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SarinDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(SarinDomainError::EmptyMachineNumber);
        }
        Ok(Self(normalized))
    }

    /// Returns the machine number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional main packet number grouping entries within a lot (e.g. `MP001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MainPacketNumber(String);

impl MainPacketNumber {
    /// Creates a validated main packet number.
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::EmptyMainPacketNumber`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SarinDomainError> {
        let normalized = value.into().trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(SarinDomainError::EmptyMainPacketNumber);
        }
        Ok(Self(normalized))
    }

    /// Returns the main packet number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MainPacketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
