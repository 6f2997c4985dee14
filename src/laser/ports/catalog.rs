//! Catalog port for machines, tension types, and laser operators.

use crate::laser::domain::{LaserOperator, Machine, MachineId, OperatorName, TensionType, TensionTypeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Registry of the reference data laser lots are created against.
#[async_trait]
pub trait ProductionCatalog: Send + Sync {
    /// Adds a machine.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateMachine`] when the identifier is
    /// already registered.
    async fn add_machine(&self, machine: &Machine) -> CatalogResult<()>;

    /// Removes a machine.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MachineNotFound`] when no machine has the
    /// given identifier.
    async fn remove_machine(&self, id: &MachineId) -> CatalogResult<()>;

    /// Finds a machine by identifier.
    async fn find_machine(&self, id: &MachineId) -> CatalogResult<Option<Machine>>;

    /// Returns all machines, ordered by identifier.
    async fn list_machines(&self) -> CatalogResult<Vec<Machine>>;

    /// Adds a tension type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateTensionType`] when the identifier
    /// is already registered.
    async fn add_tension_type(&self, tension: &TensionType) -> CatalogResult<()>;

    /// Removes a tension type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::TensionTypeNotFound`] when no tension type
    /// has the given identifier.
    async fn remove_tension_type(&self, id: &TensionTypeId) -> CatalogResult<()>;

    /// Finds a tension type by identifier.
    async fn find_tension_type(&self, id: &TensionTypeId) -> CatalogResult<Option<TensionType>>;

    /// Returns all tension types, ordered by identifier.
    async fn list_tension_types(&self) -> CatalogResult<Vec<TensionType>>;

    /// Adds a laser operator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateOperator`] when the name is already
    /// registered.
    async fn add_operator(&self, operator: &LaserOperator) -> CatalogResult<()>;

    /// Removes a laser operator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::OperatorNotFound`] when no operator has the
    /// given name.
    async fn remove_operator(&self, name: &OperatorName) -> CatalogResult<()>;

    /// Finds a laser operator by name.
    async fn find_operator(&self, name: &OperatorName) -> CatalogResult<Option<LaserOperator>>;

    /// Returns all laser operators, ordered by name.
    async fn list_operators(&self) -> CatalogResult<Vec<LaserOperator>>;
}

/// Errors returned by catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// A machine with the same identifier already exists.
    #[error("machine {0} already exists")]
    DuplicateMachine(MachineId),

    /// The machine was not found.
    #[error("machine not found: {0}")]
    MachineNotFound(MachineId),

    /// A tension type with the same identifier already exists.
    #[error("tension type {0} already exists")]
    DuplicateTensionType(TensionTypeId),

    /// The tension type was not found.
    #[error("tension type not found: {0}")]
    TensionTypeNotFound(TensionTypeId),

    /// An operator with the same name already exists.
    #[error("operator {0} already exists")]
    DuplicateOperator(OperatorName),

    /// The operator was not found.
    #[error("operator not found: {0}")]
    OperatorNotFound(OperatorName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
