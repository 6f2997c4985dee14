//! Thread-safe in-memory production catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::laser::domain::{
    LaserOperator, Machine, MachineId, OperatorName, TensionType, TensionTypeId,
};
use crate::laser::ports::{CatalogError, CatalogResult, ProductionCatalog};

/// Thread-safe in-memory production catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductionCatalog {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    machines: HashMap<MachineId, Machine>,
    tension_types: HashMap<TensionTypeId, TensionType>,
    operators: HashMap<OperatorName, LaserOperator>,
}

impl InMemoryProductionCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> CatalogError {
    CatalogError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProductionCatalog for InMemoryProductionCatalog {
    async fn add_machine(&self, machine: &Machine) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.machines.contains_key(machine.id()) {
            return Err(CatalogError::DuplicateMachine(machine.id().clone()));
        }
        state.machines.insert(machine.id().clone(), machine.clone());
        Ok(())
    }

    async fn remove_machine(&self, id: &MachineId) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .machines
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CatalogError::MachineNotFound(id.clone()))
    }

    async fn find_machine(&self, id: &MachineId) -> CatalogResult<Option<Machine>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.machines.get(id).cloned())
    }

    async fn list_machines(&self) -> CatalogResult<Vec<Machine>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut machines: Vec<_> = state.machines.values().cloned().collect();
        machines.sort_by(|left, right| left.id().cmp(right.id()));
        Ok(machines)
    }

    async fn add_tension_type(&self, tension: &TensionType) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tension_types.contains_key(tension.id()) {
            return Err(CatalogError::DuplicateTensionType(tension.id().clone()));
        }
        state
            .tension_types
            .insert(tension.id().clone(), tension.clone());
        Ok(())
    }

    async fn remove_tension_type(&self, id: &TensionTypeId) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .tension_types
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CatalogError::TensionTypeNotFound(id.clone()))
    }

    async fn find_tension_type(&self, id: &TensionTypeId) -> CatalogResult<Option<TensionType>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tension_types.get(id).cloned())
    }

    async fn list_tension_types(&self) -> CatalogResult<Vec<TensionType>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tension_types: Vec<_> = state.tension_types.values().cloned().collect();
        tension_types.sort_by(|left, right| left.id().cmp(right.id()));
        Ok(tension_types)
    }

    async fn add_operator(&self, operator: &LaserOperator) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.operators.contains_key(operator.name()) {
            return Err(CatalogError::DuplicateOperator(operator.name().clone()));
        }
        state
            .operators
            .insert(operator.name().clone(), operator.clone());
        Ok(())
    }

    async fn remove_operator(&self, name: &OperatorName) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .operators
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CatalogError::OperatorNotFound(name.clone()))
    }

    async fn find_operator(&self, name: &OperatorName) -> CatalogResult<Option<LaserOperator>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.operators.get(name).cloned())
    }

    async fn list_operators(&self) -> CatalogResult<Vec<LaserOperator>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut operators: Vec<_> = state.operators.values().cloned().collect();
        operators.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(operators)
    }
}
