//! Service layer for packet reassignment between operators.
//!
//! This is the caller of the pure admission rules in
//! [`crate::sarin::validation::transfer`]: it reads fresh balances from
//! the ledger, previews or commits the transfer, and reports the outcome
//! through the notifier. Previews are advisory; the ledger re-checks
//! availability atomically at commit time.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::notification::{NotificationError, Notifier, TemplateCatalog};
use crate::sarin::domain::{
    ApprovedTransfer, CompletedReassignment, TransferDraft, TransferRejection, TransferRequest,
};
use crate::sarin::ports::{LedgerError, PacketLedger, TransferJournal, TransferJournalError};
use crate::sarin::validation::transfer as rules;
use mockable::Clock;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for reassignment operations.
#[derive(Debug, Error)]
pub enum ReassignmentError {
    /// The request was refused by the admission rules or at commit time.
    #[error(transparent)]
    Rejected(#[from] TransferRejection),
    /// The ledger failed for a reason other than an insufficient balance.
    #[error(transparent)]
    Ledger(LedgerError),
    /// The transfer journal failed.
    #[error(transparent)]
    Journal(#[from] TransferJournalError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
    /// Notification rendering or delivery failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for reassignment service operations.
pub type ReassignmentResult<T> = Result<T, ReassignmentError>;

/// Packet reassignment orchestration service.
#[derive(Clone)]
pub struct PacketReassignmentService<L, J, F, N, C>
where
    L: PacketLedger,
    J: TransferJournal,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    ledger: Arc<L>,
    journal: Arc<J>,
    activity: Arc<F>,
    notifier: Arc<N>,
    templates: TemplateCatalog,
    clock: Arc<C>,
}

impl<L, J, F, N, C> PacketReassignmentService<L, J, F, N, C>
where
    L: PacketLedger,
    J: TransferJournal,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new reassignment service.
    #[must_use]
    pub fn new(
        ledger: Arc<L>,
        journal: Arc<J>,
        activity: Arc<F>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            ledger,
            journal,
            activity,
            notifier,
            templates: TemplateCatalog::new(),
            clock,
        }
    }

    /// Validates a draft against fresh balances without committing.
    ///
    /// No state changes and no notification is emitted; the returned
    /// approval carries the before/after balances the transfer would
    /// produce.
    ///
    /// # Errors
    ///
    /// Returns [`ReassignmentError::Rejected`] with the applicable reason,
    /// or [`ReassignmentError::Ledger`] when balances cannot be read.
    pub async fn preview(&self, draft: &TransferDraft) -> ReassignmentResult<ApprovedTransfer> {
        let request = rules::validate_draft(draft)?;
        let from_before = self
            .ledger
            .balance(request.from(), request.lot())
            .await
            .map_err(ReassignmentError::Ledger)?;
        let to_before = self
            .ledger
            .balance(request.to(), request.lot())
            .await
            .map_err(ReassignmentError::Ledger)?;
        Ok(rules::authorize(request, from_before, to_before)?)
    }

    /// Validates and commits a reassignment, reporting the outcome.
    ///
    /// On success the ledger has debited the source and credited the
    /// destination atomically, the transfer is journalled, activity is
    /// recorded, and a success notification is delivered. On rejection an
    /// error notification is delivered and no state changes; the draft
    /// remains available to the caller for correction.
    ///
    /// # Errors
    ///
    /// Returns [`ReassignmentError::Rejected`] when admission or the
    /// atomic commit-time re-check refuses the transfer, or another
    /// [`ReassignmentError`] variant when a collaborator fails.
    pub async fn reassign(
        &self,
        draft: &TransferDraft,
    ) -> ReassignmentResult<CompletedReassignment> {
        let approved = match self.preview(draft).await {
            Ok(approved) => approved,
            Err(ReassignmentError::Rejected(rejection)) => {
                return Err(self.reject(rejection)?);
            }
            Err(other) => return Err(other),
        };

        let committed = match self.ledger.apply_transfer(approved.request()).await {
            Ok(committed) => committed,
            Err(LedgerError::InsufficientBalance {
                operator,
                lot,
                available,
                ..
            }) => {
                // Lost the race between preview and commit; surface the
                // fresh availability, not the stale preview.
                return Err(self.reject(TransferRejection::InsufficientBalance {
                    operator,
                    lot,
                    available,
                })?);
            }
            Err(other) => return Err(ReassignmentError::Ledger(other)),
        };

        let request = approved.request().clone();
        let completed = CompletedReassignment::new(
            request.clone(),
            committed.from_after,
            committed.to_after,
            self.clock.utc(),
        );
        self.journal.record(&completed).await?;

        let description = format!(
            "Reassigned {} packets to {} in lot {}",
            request.quantity(),
            request.to(),
            request.lot()
        );
        let activity = ActivityRecord::new(
            ActivityKind::Reassignment,
            request.from().as_str(),
            description,
            &*self.clock,
        );
        self.activity.record(&activity).await?;

        let notification = self.templates.render(
            TemplateCatalog::REASSIGNMENT_COMPLETED,
            &success_context(&request),
        )?;
        self.notifier.notify(notification)?;

        Ok(completed)
    }

    /// Returns up to `limit` recently committed reassignments, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`ReassignmentError::Journal`] when the journal cannot be
    /// read.
    pub async fn recent(&self, limit: usize) -> ReassignmentResult<Vec<CompletedReassignment>> {
        Ok(self.journal.recent(limit).await?)
    }

    /// Delivers a rejection notification and wraps the rejection.
    fn reject(&self, rejection: TransferRejection) -> Result<ReassignmentError, NotificationError> {
        let context = Map::from_iter([("reason".to_owned(), json!(rejection.to_string()))]);
        let notification = self
            .templates
            .render(TemplateCatalog::REASSIGNMENT_REJECTED, &context)?;
        self.notifier.notify(notification)?;
        Ok(ReassignmentError::Rejected(rejection))
    }
}

fn success_context(request: &TransferRequest) -> Map<String, Value> {
    Map::from_iter([
        ("quantity".to_owned(), json!(request.quantity().value())),
        ("from".to_owned(), json!(request.from().as_str())),
        ("to".to_owned(), json!(request.to().as_str())),
    ])
}
