//! Laser lot aggregate and return lifecycle.

use super::error::{LaserDomainError, ParseReturnReasonError};
use super::ids::{KapanNumber, LotNumber, MachineId, OperatorName, PacketCount, SenderName, TensionTypeId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Why a lot was sent back from the laser floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    /// The cut did not meet quality requirements.
    QualityIssues,
    /// The assigned machine malfunctioned mid-lot.
    MachineMalfunction,
    /// The lot was cut under the wrong tension setting.
    WrongTensionSetting,
    /// The operator asked for the lot to be pulled.
    OperatorRequest,
    /// Processing was stopped before completion.
    ProcessIncomplete,
    /// A technical error outside the machine itself.
    TechnicalError,
    /// Any reason not covered above.
    Other,
}

impl ReturnReason {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QualityIssues => "quality_issues",
            Self::MachineMalfunction => "machine_malfunction",
            Self::WrongTensionSetting => "wrong_tension_setting",
            Self::OperatorRequest => "operator_request",
            Self::ProcessIncomplete => "process_incomplete",
            Self::TechnicalError => "technical_error",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for ReturnReason {
    type Error = ParseReturnReasonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "quality_issues" => Ok(Self::QualityIssues),
            "machine_malfunction" => Ok(Self::MachineMalfunction),
            "wrong_tension_setting" => Ok(Self::WrongTensionSetting),
            "operator_request" => Ok(Self::OperatorRequest),
            "process_incomplete" => Ok(Self::ProcessIncomplete),
            "technical_error" => Ok(Self::TechnicalError),
            "other" => Ok(Self::Other),
            _ => Err(ParseReturnReasonError(value.to_owned())),
        }
    }
}

/// Lifecycle state of a laser lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LotStatus {
    /// The lot is on the laser floor.
    Active,
    /// The lot was sent back.
    Returned {
        /// Why the lot came back.
        reason: ReturnReason,
        /// When the return was recorded.
        returned_at: DateTime<Utc>,
    },
}

/// Validated fields of a laser lot, prior to timestamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaserLotFields {
    /// Unique lot number.
    pub number: LotNumber,
    /// Tension setting the lot is cut under.
    pub tension: TensionTypeId,
    /// Machine the lot is assigned to.
    pub machine: MachineId,
    /// Number of packets in the lot.
    pub count: PacketCount,
    /// Source kapan.
    pub kapan: KapanNumber,
    /// Who sent the material, if recorded.
    pub sender: Option<SenderName>,
    /// Operator running the lot, if assigned.
    pub operator: Option<OperatorName>,
}

/// Laser lot aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserLot {
    number: LotNumber,
    tension: TensionTypeId,
    machine: MachineId,
    count: PacketCount,
    kapan: KapanNumber,
    sender: Option<SenderName>,
    operator: Option<OperatorName>,
    entry_date: DateTime<Utc>,
    status: LotStatus,
}

impl LaserLot {
    /// Creates a new active lot from validated fields.
    #[must_use]
    pub fn new(fields: LaserLotFields, clock: &impl Clock) -> Self {
        Self {
            number: fields.number,
            tension: fields.tension,
            machine: fields.machine,
            count: fields.count,
            kapan: fields.kapan,
            sender: fields.sender,
            operator: fields.operator,
            entry_date: clock.utc(),
            status: LotStatus::Active,
        }
    }

    /// Returns the lot number.
    #[must_use]
    pub const fn number(&self) -> &LotNumber {
        &self.number
    }

    /// Returns the tension type the lot is cut under.
    #[must_use]
    pub const fn tension(&self) -> &TensionTypeId {
        &self.tension
    }

    /// Returns the assigned machine.
    #[must_use]
    pub const fn machine(&self) -> &MachineId {
        &self.machine
    }

    /// Returns the packet count.
    #[must_use]
    pub const fn count(&self) -> PacketCount {
        self.count
    }

    /// Returns the source kapan number.
    #[must_use]
    pub const fn kapan(&self) -> &KapanNumber {
        &self.kapan
    }

    /// Returns the sender, if recorded.
    #[must_use]
    pub const fn sender(&self) -> Option<&SenderName> {
        self.sender.as_ref()
    }

    /// Returns the operator, if assigned.
    #[must_use]
    pub const fn operator(&self) -> Option<&OperatorName> {
        self.operator.as_ref()
    }

    /// Returns when the lot was entered.
    #[must_use]
    pub const fn entry_date(&self) -> DateTime<Utc> {
        self.entry_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> &LotStatus {
        &self.status
    }

    /// Returns whether the lot is still on the laser floor.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, LotStatus::Active)
    }

    /// Returns the return timestamp for returned lots.
    #[must_use]
    pub const fn returned_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            LotStatus::Active => None,
            LotStatus::Returned { returned_at, .. } => Some(returned_at),
        }
    }

    /// Marks the lot as returned.
    ///
    /// # Errors
    ///
    /// Returns [`LaserDomainError::AlreadyReturned`] when the lot has
    /// already been returned.
    pub fn mark_returned(
        &mut self,
        reason: ReturnReason,
        clock: &impl Clock,
    ) -> Result<(), LaserDomainError> {
        if !self.is_active() {
            return Err(LaserDomainError::AlreadyReturned(self.number.clone()));
        }
        self.status = LotStatus::Returned {
            reason,
            returned_at: clock.utc(),
        };
        Ok(())
    }
}
