//! Tension type catalog entry.

use super::error::LaserDomainError;
use super::ids::TensionTypeId;
use serde::{Deserialize, Serialize};

/// A tension setting lots can be cut under (e.g. `Normal`, `Pressure`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensionType {
    id: TensionTypeId,
    name: String,
}

impl TensionType {
    /// Creates a tension type catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::EmptyTensionTypeName`] when the display
    /// name is empty after trimming.
    pub fn new(id: TensionTypeId, name: impl Into<String>) -> Result<Self, LaserDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(LaserDomainError::EmptyTensionTypeName);
        }
        Ok(Self {
            id,
            name: normalized,
        })
    }

    /// Returns the tension type identifier.
    #[must_use]
    pub const fn id(&self) -> &TensionTypeId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
