//! In-memory repository for packet entries.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sarin::domain::{EntryId, LotNumber, PacketEntry};
use crate::sarin::ports::{
    PacketEntryRepository, PacketEntryRepositoryError, PacketEntryRepositoryResult,
};

/// Thread-safe in-memory packet entry repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPacketEntryRepository {
    state: Arc<RwLock<InMemoryEntryState>>,
}

#[derive(Debug, Default)]
struct InMemoryEntryState {
    entries: HashMap<EntryId, PacketEntry>,
    lot_index: HashMap<LotNumber, Vec<EntryId>>,
}

impl InMemoryPacketEntryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> PacketEntryRepositoryError {
    PacketEntryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PacketEntryRepository for InMemoryPacketEntryRepository {
    async fn store(&self, entry: &PacketEntry) -> PacketEntryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.entries.contains_key(&entry.id()) {
            return Err(PacketEntryRepositoryError::DuplicateEntry(entry.id()));
        }

        state
            .lot_index
            .entry(entry.lot().clone())
            .or_default()
            .push(entry.id());
        state.entries.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn find_by_lot(&self, lot: &LotNumber) -> PacketEntryRepositoryResult<Vec<PacketEntry>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let entries = state
            .lot_index
            .get(lot)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.entries.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    async fn count(&self) -> PacketEntryRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.entries.len())
    }
}
