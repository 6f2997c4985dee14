//! Service layer for catalog management.
//!
//! Backs the control panel: adding and removing machines, tension types,
//! and laser operators, with the reference-data checks the raw catalog
//! port does not enforce.

use crate::laser::domain::{
    LaserDomainError, LaserOperator, Machine, MachineId, MachineStatus, OperatorName, TensionType,
    TensionTypeId,
};
use crate::laser::ports::{CatalogError, ProductionCatalog};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for catalog management.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LaserDomainError),
    /// An operator's default machine is not in the catalog.
    #[error("default machine not in catalog: {0}")]
    UnknownDefaultMachine(MachineId),
    /// Catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for catalog service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Catalog management orchestration service.
#[derive(Clone)]
pub struct CatalogService<G>
where
    G: ProductionCatalog,
{
    catalog: Arc<G>,
}

impl<G> CatalogService<G>
where
    G: ProductionCatalog,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(catalog: Arc<G>) -> Self {
        Self { catalog }
    }

    /// Registers a machine.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Domain`] for blank fields or
    /// [`CatalogServiceError::Catalog`] for duplicate identifiers.
    pub async fn add_machine(
        &self,
        id: &str,
        name: &str,
        status: MachineStatus,
    ) -> CatalogServiceResult<Machine> {
        let machine = Machine::new(MachineId::new(id)?, name, status)?;
        self.catalog.add_machine(&machine).await?;
        Ok(machine)
    }

    /// Removes a machine.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the machine does not
    /// exist.
    pub async fn remove_machine(&self, id: &str) -> CatalogServiceResult<()> {
        let machine_id = MachineId::new(id)?;
        Ok(self.catalog.remove_machine(&machine_id).await?)
    }

    /// Returns all machines.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the listing fails.
    pub async fn machines(&self) -> CatalogServiceResult<Vec<Machine>> {
        Ok(self.catalog.list_machines().await?)
    }

    /// Returns the machines currently accepting lots.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the listing fails.
    pub async fn active_machines(&self) -> CatalogServiceResult<Vec<Machine>> {
        let machines = self.catalog.list_machines().await?;
        Ok(machines.into_iter().filter(Machine::is_active).collect())
    }

    /// Registers a tension type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Domain`] for blank fields or
    /// [`CatalogServiceError::Catalog`] for duplicate identifiers.
    pub async fn add_tension_type(
        &self,
        id: &str,
        name: &str,
    ) -> CatalogServiceResult<TensionType> {
        let tension = TensionType::new(TensionTypeId::new(id)?, name)?;
        self.catalog.add_tension_type(&tension).await?;
        Ok(tension)
    }

    /// Removes a tension type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the tension type does
    /// not exist.
    pub async fn remove_tension_type(&self, id: &str) -> CatalogServiceResult<()> {
        let tension_id = TensionTypeId::new(id)?;
        Ok(self.catalog.remove_tension_type(&tension_id).await?)
    }

    /// Returns all tension types.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the listing fails.
    pub async fn tension_types(&self) -> CatalogServiceResult<Vec<TensionType>> {
        Ok(self.catalog.list_tension_types().await?)
    }

    /// Registers a laser operator, checking any default machine exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::UnknownDefaultMachine`] when the
    /// default machine is not registered,
    /// [`CatalogServiceError::Domain`] for blank fields, or
    /// [`CatalogServiceError::Catalog`] for duplicate names.
    pub async fn add_operator(
        &self,
        name: &str,
        default_machine: Option<&str>,
    ) -> CatalogServiceResult<LaserOperator> {
        let mut operator = LaserOperator::new(OperatorName::new(name)?);
        if let Some(raw) = default_machine {
            let machine_id = MachineId::new(raw)?;
            if self.catalog.find_machine(&machine_id).await?.is_none() {
                return Err(CatalogServiceError::UnknownDefaultMachine(machine_id));
            }
            operator = operator.with_default_machine(machine_id);
        }
        self.catalog.add_operator(&operator).await?;
        Ok(operator)
    }

    /// Removes a laser operator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the operator does not
    /// exist.
    pub async fn remove_operator(&self, name: &str) -> CatalogServiceResult<()> {
        let operator_name = OperatorName::new(name)?;
        Ok(self.catalog.remove_operator(&operator_name).await?)
    }

    /// Returns all laser operators.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the listing fails.
    pub async fn operators(&self) -> CatalogServiceResult<Vec<LaserOperator>> {
        Ok(self.catalog.list_operators().await?)
    }
}
