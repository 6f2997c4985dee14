//! Machine assignment rules.
//!
//! Assignment is a pair of static lookup tables loaded once at startup
//! from configuration: tension type to machine, and operator to machine.
//! A lookup either yields a machine or it does not; there is no other
//! failure mode. Callers keep their current machine selection when no
//! mapping exists.

use super::ids::{MachineId, OperatorName, TensionTypeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable tension-to-machine and operator-to-machine lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRules {
    #[serde(default)]
    tension_to_machine: HashMap<TensionTypeId, MachineId>,
    #[serde(default)]
    operator_to_machine: HashMap<OperatorName, MachineId>,
}

impl AssignmentRules {
    /// Creates empty rules that never suggest a machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates rules from the two lookup tables.
    #[must_use]
    pub fn from_tables(
        tension_to_machine: impl IntoIterator<Item = (TensionTypeId, MachineId)>,
        operator_to_machine: impl IntoIterator<Item = (OperatorName, MachineId)>,
    ) -> Self {
        Self {
            tension_to_machine: tension_to_machine.into_iter().collect(),
            operator_to_machine: operator_to_machine.into_iter().collect(),
        }
    }

    /// Returns the machine mapped to a tension type, if any.
    #[must_use]
    pub fn machine_for_tension(&self, tension: &TensionTypeId) -> Option<&MachineId> {
        self.tension_to_machine.get(tension)
    }

    /// Returns the machine mapped to an operator, if any.
    #[must_use]
    pub fn machine_for_operator(&self, operator: &OperatorName) -> Option<&MachineId> {
        self.operator_to_machine.get(operator)
    }

    /// Returns whether both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tension_to_machine.is_empty() && self.operator_to_machine.is_empty()
    }
}
