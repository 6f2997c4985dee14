//! Thread-safe in-memory laser lot repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::laser::domain::{LaserLot, LotNumber};
use crate::laser::ports::{LaserLotRepository, LaserLotRepositoryError, LaserLotRepositoryResult};

/// Thread-safe in-memory laser lot repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLaserLotRepository {
    state: Arc<RwLock<HashMap<LotNumber, LaserLot>>>,
}

impl InMemoryLaserLotRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> LaserLotRepositoryError {
    LaserLotRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl LaserLotRepository for InMemoryLaserLotRepository {
    async fn store(&self, lot: &LaserLot) -> LaserLotRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.contains_key(lot.number()) {
            return Err(LaserLotRepositoryError::DuplicateLotNumber(
                lot.number().clone(),
            ));
        }
        state.insert(lot.number().clone(), lot.clone());
        Ok(())
    }

    async fn update(&self, lot: &LaserLot) -> LaserLotRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.contains_key(lot.number()) {
            return Err(LaserLotRepositoryError::NotFound(lot.number().clone()));
        }
        state.insert(lot.number().clone(), lot.clone());
        Ok(())
    }

    async fn find_by_number(
        &self,
        number: &LotNumber,
    ) -> LaserLotRepositoryResult<Option<LaserLot>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.get(number).cloned())
    }

    async fn list_active(&self) -> LaserLotRepositoryResult<Vec<LaserLot>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut lots: Vec<_> = state
            .values()
            .filter(|lot| lot.is_active())
            .cloned()
            .collect();
        lots.sort_by_key(LaserLot::entry_date);
        Ok(lots)
    }

    async fn list_returned(&self) -> LaserLotRepositoryResult<Vec<LaserLot>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut lots: Vec<_> = state
            .values()
            .filter(|lot| !lot.is_active())
            .cloned()
            .collect();
        lots.sort_by_key(|lot| std::cmp::Reverse(lot.returned_at()));
        Ok(lots)
    }

    async fn count(&self) -> LaserLotRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.len())
    }
}
