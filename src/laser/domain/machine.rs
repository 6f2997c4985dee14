//! Laser machine catalog entry.

use super::error::{LaserDomainError, ParseMachineStatusError};
use super::ids::MachineId;
use serde::{Deserialize, Serialize};

/// Operational status of a laser machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    /// The machine accepts new lots.
    Active,
    /// The machine is down for maintenance; no new lots.
    Maintenance,
}

impl MachineStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
        }
    }
}

impl TryFrom<&str> for MachineStatus {
    type Error = ParseMachineStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(ParseMachineStatusError(value.to_owned())),
        }
    }
}

/// A laser machine known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    id: MachineId,
    name: String,
    status: MachineStatus,
}

impl Machine {
    /// Creates a machine catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyMachineName`] when the display name
    /// is empty after trimming.
    pub fn new(
        id: MachineId,
        name: impl Into<String>,
        status: MachineStatus,
    ) -> Result<Self, LaserDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyMachineName);
        }
        Ok(Self {
            id,
            name: normalized,
            status,
        })
    }

    /// Returns the machine identifier.
    #[must_use]
    pub const fn id(&self) -> &MachineId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the operational status.
    #[must_use]
    pub const fn status(&self) -> MachineStatus {
        self.status
    }

    /// Returns whether the machine accepts new lots.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, MachineStatus::Active)
    }

    /// Changes the operational status.
    pub const fn set_status(&mut self, status: MachineStatus) {
        self.status = status;
    }
}
