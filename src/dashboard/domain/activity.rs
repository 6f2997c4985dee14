//! Recent-activity records.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Creates a new random activity identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow a recent-activity record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A Sarin packet entry was recorded.
    PacketEntry,
    /// A laser lot was created or returned.
    LaserLot,
    /// Packets were reassigned between operators.
    Reassignment,
    /// A lot analysis was produced.
    Analysis,
}

impl ActivityKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PacketEntry => "packet_entry",
            Self::LaserLot => "laser_lot",
            Self::Reassignment => "reassignment",
            Self::Analysis => "analysis",
        }
    }
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    kind: ActivityKind,
    operator: String,
    description: String,
    occurred_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Creates an activity record stamped with the current clock time.
    #[must_use]
    pub fn new(
        kind: ActivityKind,
        operator: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            kind,
            operator: operator.into(),
            description: description.into(),
            occurred_at: clock.utc(),
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the originating workflow.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the operator the activity is attributed to.
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the activity happened.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
