//! Laser operator catalog entry.

use super::ids::{MachineId, OperatorName};
use serde::{Deserialize, Serialize};

/// A laser operator and the machine they usually run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserOperator {
    name: OperatorName,
    default_machine: Option<MachineId>,
}

impl LaserOperator {
    /// Creates an operator without a default machine.
    #[must_use]
    pub const fn new(name: OperatorName) -> Self {
        Self {
            name,
            default_machine: None,
        }
    }

    /// Sets the operator's default machine.
    #[must_use]
    pub fn with_default_machine(mut self, machine: MachineId) -> Self {
        self.default_machine = Some(machine);
        self
    }

    /// Returns the operator name.
    #[must_use]
    pub const fn name(&self) -> &OperatorName {
        &self.name
    }

    /// Returns the machine this operator defaults to, if any.
    #[must_use]
    pub const fn default_machine(&self) -> Option<&MachineId> {
        self.default_machine.as_ref()
    }
}
