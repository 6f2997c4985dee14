//! Validated packet quantity type.

use super::SarinDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive number of packets moved or recorded by a single operation.
///
/// Form input arrives as a signed integer so that zero and negative values
/// can be rejected with a precise reason rather than wrapping silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketQuantity(u64);

impl PacketQuantity {
    /// Creates a validated quantity from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`SarinDomainError::NonPositivePacketCount`] when the value
    /// is zero or negative.
    pub fn new(value: i64) -> Result<Self, SarinDomainError> {
        match u64::try_from(value) {
            Ok(count) if count > 0 => Ok(Self(count)),
            _ => Err(SarinDomainError::NonPositivePacketCount(value)),
        }
    }

    /// Returns the underlying packet count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PacketQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
