//! Service layer for returning laser lots.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::laser::domain::{
    LaserDomainError, LaserLot, LotNumber, LotStatus, OperatorName, ReturnReason,
};
use crate::laser::ports::{LaserLotRepository, LaserLotRepositoryError};
use crate::notification::{NotificationError, Notifier, TemplateCatalog};
use mockable::Clock;
use serde_json::{Map, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Aggregate view of returned lots, grouped by reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnAnalysis {
    /// Number of returned lots.
    pub total_returned: usize,
    /// Packets across all returned lots.
    pub total_packets: u64,
    /// Return counts per reason, highest count first.
    pub by_reason: Vec<(ReturnReason, usize)>,
}

/// Service-level errors for lot returns.
#[derive(Debug, Error)]
pub enum LotReturnError {
    /// No lot exists under the given number.
    #[error("no lot found with number {0}")]
    UnknownLot(LotNumber),
    /// The return was refused by the domain (already returned).
    #[error(transparent)]
    Rejected(#[from] LaserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] LaserLotRepositoryError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
    /// Notification rendering or delivery failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for lot return service operations.
pub type LotReturnResult<T> = Result<T, LotReturnError>;

/// Lot return orchestration service.
#[derive(Clone)]
pub struct LotReturnService<R, F, N, C>
where
    R: LaserLotRepository,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    activity: Arc<F>,
    notifier: Arc<N>,
    templates: TemplateCatalog,
    clock: Arc<C>,
}

impl<R, F, N, C> LotReturnService<R, F, N, C>
where
    R: LaserLotRepository,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new lot return service.
    #[must_use]
    pub fn new(repository: Arc<R>, activity: Arc<F>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            activity,
            notifier,
            templates: TemplateCatalog::new(),
            clock,
        }
    }

    /// Looks up a lot by number for the return form.
    ///
    /// Returns `Ok(None)` when no lot has the number.
    ///
    /// # Errors
    ///
    /// Returns [`LotReturnError::Repository`] when the lookup fails.
    pub async fn find_lot(&self, number: &LotNumber) -> LotReturnResult<Option<LaserLot>> {
        Ok(self.repository.find_by_number(number).await?)
    }

    /// Marks a lot as returned with the given reason.
    ///
    /// On success the lot's status transition is persisted, activity is
    /// recorded, and a success notification is delivered. Unknown and
    /// already-returned lots are refused with an error notification and no
    /// state change.
    ///
    /// # Errors
    ///
    /// Returns [`LotReturnError::UnknownLot`] or
    /// [`LotReturnError::Rejected`] for refusals, or another
    /// [`LotReturnError`] variant when a collaborator fails.
    pub async fn return_lot(
        &self,
        number: &LotNumber,
        reason: ReturnReason,
    ) -> LotReturnResult<LaserLot> {
        let mut lot = match self.repository.find_by_number(number).await? {
            Some(lot) => lot,
            None => {
                return Err(self.reject(LotReturnError::UnknownLot(number.clone()))?);
            }
        };

        if let Err(domain_error) = lot.mark_returned(reason, &*self.clock) {
            return Err(self.reject(LotReturnError::Rejected(domain_error))?);
        }
        self.repository.update(&lot).await?;

        let attributed_to = lot
            .operator()
            .map_or("unassigned", OperatorName::as_str);
        let description = format!("Returned lot {} ({})", lot.number(), reason.as_str());
        let record = ActivityRecord::new(
            ActivityKind::LaserLot,
            attributed_to,
            description,
            &*self.clock,
        );
        self.activity.record(&record).await?;

        let context = Map::from_iter([("lot".to_owned(), json!(lot.number().as_str()))]);
        let notification = self
            .templates
            .render(TemplateCatalog::LOT_RETURNED, &context)?;
        self.notifier.notify(notification)?;

        Ok(lot)
    }

    /// Returns up to `limit` of the most recently returned lots.
    ///
    /// # Errors
    ///
    /// Returns [`LotReturnError::Repository`] when the listing fails.
    pub async fn recent_returns(&self, limit: usize) -> LotReturnResult<Vec<LaserLot>> {
        let mut returned = self.repository.list_returned().await?;
        returned.truncate(limit);
        Ok(returned)
    }

    /// Aggregates returned lots into counts and totals by reason.
    ///
    /// # Errors
    ///
    /// Returns [`LotReturnError::Repository`] when the listing fails.
    pub async fn return_analysis(&self) -> LotReturnResult<ReturnAnalysis> {
        let returned = self.repository.list_returned().await?;
        let total_packets = returned.iter().map(|lot| lot.count().value()).sum();

        let mut counts: BTreeMap<&'static str, (ReturnReason, usize)> = BTreeMap::new();
        for lot in &returned {
            if let LotStatus::Returned { reason, .. } = lot.status() {
                let slot = counts.entry(reason.as_str()).or_insert((*reason, 0));
                slot.1 += 1;
            }
        }
        let mut by_reason: Vec<_> = counts.into_values().collect();
        by_reason.sort_by(|left, right| right.1.cmp(&left.1));

        Ok(ReturnAnalysis {
            total_returned: returned.len(),
            total_packets,
            by_reason,
        })
    }

    /// Delivers a refusal notification and passes the refusal through.
    fn reject(&self, refusal: LotReturnError) -> Result<LotReturnError, NotificationError> {
        let context = Map::from_iter([("reason".to_owned(), json!(refusal.to_string()))]);
        let notification = self
            .templates
            .render(TemplateCatalog::RETURN_REJECTED, &context)?;
        self.notifier.notify(notification)?;
        Ok(refusal)
    }
}
