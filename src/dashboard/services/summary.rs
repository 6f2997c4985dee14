//! Service layer deriving the production summary.

use crate::dashboard::domain::{ActivityRecord, ProductionSummary};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::laser::ports::{LaserLotRepository, LaserLotRepositoryError};
use crate::sarin::ports::{LedgerError, PacketLedger};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for dashboard reads.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The packet ledger failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The laser lot repository failed.
    #[error(transparent)]
    Lots(#[from] LaserLotRepositoryError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
}

/// Result type for dashboard service operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Dashboard orchestration service.
///
/// Owns no data: every figure is derived at read time from the Sarin
/// ledger, the laser lot repository, and the activity feed.
#[derive(Clone)]
pub struct DashboardService<L, R, F, C>
where
    L: PacketLedger,
    R: LaserLotRepository,
    F: ActivityFeed,
    C: Clock + Send + Sync,
{
    ledger: Arc<L>,
    lots: Arc<R>,
    activity: Arc<F>,
    clock: Arc<C>,
}

impl<L, R, F, C> DashboardService<L, R, F, C>
where
    L: PacketLedger,
    R: LaserLotRepository,
    F: ActivityFeed,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(ledger: Arc<L>, lots: Arc<R>, activity: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            ledger,
            lots,
            activity,
            clock,
        }
    }

    /// Derives the headline production summary.
    ///
    /// Total packets counts Sarin balances plus the packets of active
    /// laser lots; active operators counts holders of a non-zero Sarin
    /// balance; completed-today counts activity records stamped with
    /// today's date.
    ///
    /// # Errors
    ///
    /// Returns a [`DashboardError`] variant when any of the underlying
    /// contexts cannot be read.
    pub async fn summary(&self) -> DashboardResult<ProductionSummary> {
        let balances = self.ledger.snapshot().await?;
        let sarin_packets: u64 = balances.iter().map(|(_, _, amount)| *amount).sum();
        let operators: BTreeSet<_> = balances
            .iter()
            .map(|(operator, _, _)| operator.clone())
            .collect();

        let active_lots = self.lots.list_active().await?;
        let laser_packets: u64 = active_lots.iter().map(|lot| lot.count().value()).sum();
        let laser_lots = self.lots.count().await?;

        let today = self.clock.utc().date_naive();
        let completed_today = self.activity.count_on(today).await?;

        Ok(ProductionSummary {
            total_packets: sarin_packets + laser_packets,
            active_operators: operators.len(),
            laser_lots,
            completed_today,
        })
    }

    /// Returns up to `limit` of the most recent activity records.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Activity`] when the feed cannot be read.
    pub async fn recent_activity(&self, limit: usize) -> DashboardResult<Vec<ActivityRecord>> {
        Ok(self.activity.recent(limit).await?)
    }
}
