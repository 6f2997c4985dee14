//! Service layer for recording packet entries.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::notification::{NotificationError, Notifier, TemplateCatalog};
use crate::sarin::domain::{
    JiramNote, KapanNumber, LotNumber, MachineNumber, MainPacketNumber, OperatorName, PacketEntry,
    PacketEntryDraft, PacketEntryFields, PacketQuantity, SarinDomainError,
};
use crate::sarin::ports::{LedgerError, PacketEntryRepository, PacketEntryRepositoryError, PacketLedger};
use mockable::Clock;
use serde_json::{Map, json};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for packet entry operations.
#[derive(Debug, Error)]
pub enum PacketEntryError {
    /// Domain validation failed; nothing was recorded.
    #[error(transparent)]
    Rejected(#[from] SarinDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PacketEntryRepositoryError),
    /// Ledger crediting failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
    /// Notification rendering or delivery failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for packet entry service operations.
pub type PacketEntryResult<T> = Result<T, PacketEntryError>;

/// Packet entry orchestration service.
///
/// Recording an entry both stores it and credits the operator's ledger
/// balance for the entry's lot, so reassignment always works against
/// balances the entries funded.
#[derive(Clone)]
pub struct PacketEntryService<R, L, F, N, C>
where
    R: PacketEntryRepository,
    L: PacketLedger,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ledger: Arc<L>,
    activity: Arc<F>,
    notifier: Arc<N>,
    templates: TemplateCatalog,
    clock: Arc<C>,
}

impl<R, L, F, N, C> PacketEntryService<R, L, F, N, C>
where
    R: PacketEntryRepository,
    L: PacketLedger,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new packet entry service.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        ledger: Arc<L>,
        activity: Arc<F>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            ledger,
            activity,
            notifier,
            templates: TemplateCatalog::new(),
            clock,
        }
    }

    /// Validates and records a packet entry.
    ///
    /// On success the entry is stored, the operator's balance in the
    /// entry's lot is credited, activity is recorded, and a success
    /// notification is delivered. On rejection an error notification is
    /// delivered and nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PacketEntryError::Rejected`] when a required field is
    /// blank or the packet count is not positive, or another
    /// [`PacketEntryError`] variant when a collaborator fails.
    pub async fn record_entry(&self, draft: &PacketEntryDraft) -> PacketEntryResult<PacketEntry> {
        let fields = match validate_draft(draft) {
            Ok(fields) => fields,
            Err(rejection) => {
                let context =
                    Map::from_iter([("reason".to_owned(), json!(rejection.to_string()))]);
                let notification = self
                    .templates
                    .render(TemplateCatalog::PACKET_ENTRY_REJECTED, &context)?;
                self.notifier.notify(notification)?;
                return Err(rejection.into());
            }
        };

        let entry = PacketEntry::new(fields, &*self.clock);
        self.repository.store(&entry).await?;
        self.ledger
            .credit(entry.operator(), entry.lot(), entry.quantity())
            .await?;

        let description = format!(
            "Added {} packets to lot {}",
            entry.quantity(),
            entry.lot()
        );
        let activity = ActivityRecord::new(
            ActivityKind::PacketEntry,
            entry.operator().as_str(),
            description,
            &*self.clock,
        );
        self.activity.record(&activity).await?;

        let context = Map::from_iter([
            ("quantity".to_owned(), json!(entry.quantity().value())),
            ("lot".to_owned(), json!(entry.lot().as_str())),
        ]);
        let notification = self
            .templates
            .render(TemplateCatalog::PACKET_ENTRY_RECORDED, &context)?;
        self.notifier.notify(notification)?;

        Ok(entry)
    }
}

/// Validates the raw entry form, in the order the form checks fields.
fn validate_draft(draft: &PacketEntryDraft) -> Result<PacketEntryFields, SarinDomainError> {
    let operator = OperatorName::new(draft.operator_name())?;
    let machine = MachineNumber::new(draft.machine_number())?;
    let kapan = KapanNumber::new(draft.kapan_number())?;
    let lot = LotNumber::new(draft.lot_number())?;
    let quantity = PacketQuantity::new(draft.packet_count())?;
    let sender = OperatorName::new(draft.sender_name())
        .map_err(|_| SarinDomainError::EmptySenderName)?;
    let main_packet = draft
        .main_packet_number()
        .filter(|value| !value.trim().is_empty())
        .map(MainPacketNumber::new)
        .transpose()?;
    let jiram = draft.jiram().and_then(JiramNote::new);

    Ok(PacketEntryFields {
        sender,
        operator,
        machine,
        kapan,
        lot,
        main_packet,
        quantity,
        jiram,
    })
}
