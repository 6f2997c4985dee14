//! Thread-safe in-memory packet ledger.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sarin::domain::{LotNumber, OperatorName, PacketQuantity, TransferRequest};
use crate::sarin::ports::{CommittedTransfer, LedgerError, LedgerResult, PacketLedger};

/// Thread-safe in-memory packet ledger.
///
/// Transfers re-check and mutate balances under a single write lock, so a
/// transfer observed as affordable cannot be overtaken into a negative
/// balance by a concurrent commit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPacketLedger {
    state: Arc<RwLock<HashMap<(OperatorName, LotNumber), u64>>>,
}

impl InMemoryPacketLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-seeded with balances.
    ///
    /// Zero seed balances are dropped; the ledger never stores zeros.
    #[must_use]
    pub fn with_balances(
        balances: impl IntoIterator<Item = (OperatorName, LotNumber, u64)>,
    ) -> Self {
        let state = balances
            .into_iter()
            .filter(|(_, _, amount)| *amount > 0)
            .map(|(operator, lot, amount)| ((operator, lot), amount))
            .collect();
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> LedgerError {
    LedgerError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PacketLedger for InMemoryPacketLedger {
    async fn balance(&self, operator: &OperatorName, lot: &LotNumber) -> LedgerResult<u64> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .get(&(operator.clone(), lot.clone()))
            .copied()
            .unwrap_or(0))
    }

    async fn credit(
        &self,
        operator: &OperatorName,
        lot: &LotNumber,
        quantity: PacketQuantity,
    ) -> LedgerResult<u64> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let balance = state.entry((operator.clone(), lot.clone())).or_insert(0);
        *balance += quantity.value();
        Ok(*balance)
    }

    async fn apply_transfer(&self, request: &TransferRequest) -> LedgerResult<CommittedTransfer> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let quantity = request.quantity().value();
        let from_key = (request.from().clone(), request.lot().clone());
        let available = state.get(&from_key).copied().unwrap_or(0);
        if quantity > available {
            return Err(LedgerError::InsufficientBalance {
                operator: request.from().clone(),
                lot: request.lot().clone(),
                available,
                requested: quantity,
            });
        }

        let from_after = available - quantity;
        if from_after == 0 {
            state.remove(&from_key);
        } else {
            state.insert(from_key, from_after);
        }

        let to_balance = state
            .entry((request.to().clone(), request.lot().clone()))
            .or_insert(0);
        *to_balance += quantity;
        let to_after = *to_balance;

        Ok(CommittedTransfer { from_after, to_after })
    }

    async fn snapshot(&self) -> LedgerResult<Vec<(OperatorName, LotNumber, u64)>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut entries: Vec<_> = state
            .iter()
            .map(|((operator, lot), amount)| (operator.clone(), lot.clone(), *amount))
            .collect();
        entries.sort_by(|left, right| {
            (left.0.as_str(), left.1.as_str()).cmp(&(right.0.as_str(), right.1.as_str()))
        });
        Ok(entries)
    }
}
