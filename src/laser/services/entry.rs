//! Service layer for laser lot creation.
//!
//! Lot creation is where the assignment rules do their work: when the
//! form does not pin a machine, the operator's mapped machine is tried
//! first, then the tension type's. An explicit machine always wins,
//! modelling the form's last-change-wins behaviour deterministically.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::laser::domain::{
    AssignmentRules, KapanNumber, LaserDomainError, LaserLot, LaserLotFields, LotNumber,
    MachineId, OperatorName, PacketCount, SenderName, TensionTypeId,
};
use crate::laser::ports::{
    CatalogError, LaserLotRepository, LaserLotRepositoryError, ProductionCatalog,
};
use crate::notification::{NotificationError, Notifier, TemplateCatalog};
use crate::settings::{SettingKey, SettingScope, SettingsError, SettingsStore};
use mockable::Clock;
use serde_json::{Map, json};
use std::sync::Arc;
use thiserror::Error;

/// Raw laser lot form input, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaserLotDraft {
    lot_number: String,
    tension_type: String,
    machine: Option<String>,
    packet_count: i64,
    kapan_number: String,
    sender_name: Option<String>,
    operator_name: Option<String>,
    set_default_sender: bool,
}

impl LaserLotDraft {
    /// Creates a draft with the required form fields.
    #[must_use]
    pub fn new(
        lot_number: impl Into<String>,
        tension_type: impl Into<String>,
        packet_count: i64,
        kapan_number: impl Into<String>,
    ) -> Self {
        Self {
            lot_number: lot_number.into(),
            tension_type: tension_type.into(),
            machine: None,
            packet_count,
            kapan_number: kapan_number.into(),
            sender_name: None,
            operator_name: None,
            set_default_sender: false,
        }
    }

    /// Pins the machine explicitly, overriding any assignment rule.
    #[must_use]
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = Some(machine.into());
        self
    }

    /// Sets the sender name.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender_name = Some(sender.into());
        self
    }

    /// Sets the operator name.
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator_name = Some(operator.into());
        self
    }

    /// Requests that the sender be stored as the default for future
    /// entries.
    #[must_use]
    pub const fn remember_sender(mut self) -> Self {
        self.set_default_sender = true;
        self
    }

    /// Returns the raw lot number field.
    #[must_use]
    pub fn lot_number(&self) -> &str {
        &self.lot_number
    }

    /// Returns the raw tension type field.
    #[must_use]
    pub fn tension_type(&self) -> &str {
        &self.tension_type
    }

    /// Returns the raw machine field, if entered.
    #[must_use]
    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }

    /// Returns the raw packet count field.
    #[must_use]
    pub const fn packet_count(&self) -> i64 {
        self.packet_count
    }

    /// Returns the raw kapan number field.
    #[must_use]
    pub fn kapan_number(&self) -> &str {
        &self.kapan_number
    }

    /// Returns the raw sender field, if entered.
    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    /// Returns the raw operator field, if entered.
    #[must_use]
    pub fn operator_name(&self) -> Option<&str> {
        self.operator_name.as_deref()
    }

    /// Returns whether the sender should become the stored default.
    #[must_use]
    pub const fn set_default_sender(&self) -> bool {
        self.set_default_sender
    }
}

/// Service-level errors for laser lot creation.
#[derive(Debug, Error)]
pub enum LaserEntryError {
    /// Domain validation failed; nothing was created.
    #[error(transparent)]
    Rejected(#[from] LaserDomainError),
    /// The tension type is not in the catalog.
    #[error("unknown tension type: {0}")]
    UnknownTensionType(TensionTypeId),
    /// The machine is not in the catalog.
    #[error("unknown machine: {0}")]
    UnknownMachine(MachineId),
    /// The machine is not accepting new lots.
    #[error("machine {0} is under maintenance")]
    MachineUnavailable(MachineId),
    /// A lot with the same number already exists.
    #[error("lot number {0} already exists")]
    DuplicateLotNumber(LotNumber),
    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(LaserLotRepositoryError),
    /// Settings store failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
    /// Notification rendering or delivery failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for laser entry service operations.
pub type LaserEntryResult<T> = Result<T, LaserEntryError>;

/// Laser lot creation orchestration service.
#[derive(Clone)]
pub struct LaserEntryService<R, G, S, F, N, C>
where
    R: LaserLotRepository,
    G: ProductionCatalog,
    S: SettingsStore,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    catalog: Arc<G>,
    settings: Arc<S>,
    activity: Arc<F>,
    notifier: Arc<N>,
    rules: AssignmentRules,
    templates: TemplateCatalog,
    clock: Arc<C>,
}

impl<R, G, S, F, N, C> LaserEntryService<R, G, S, F, N, C>
where
    R: LaserLotRepository,
    G: ProductionCatalog,
    S: SettingsStore,
    F: ActivityFeed,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new laser entry service with the given assignment rules.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        catalog: Arc<G>,
        settings: Arc<S>,
        activity: Arc<F>,
        notifier: Arc<N>,
        rules: AssignmentRules,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            catalog,
            settings,
            activity,
            notifier,
            rules,
            templates: TemplateCatalog::new(),
            clock,
        }
    }

    /// Returns the machine the rules map to a tension type, if any.
    #[must_use]
    pub fn suggest_machine_for_tension(&self, tension: &TensionTypeId) -> Option<MachineId> {
        self.rules.machine_for_tension(tension).cloned()
    }

    /// Returns the machine the rules map to an operator, if any.
    #[must_use]
    pub fn suggest_machine_for_operator(&self, operator: &OperatorName) -> Option<MachineId> {
        self.rules.machine_for_operator(operator).cloned()
    }

    /// Validates the draft and creates the lot.
    ///
    /// On success the lot is stored under its unique number, activity is
    /// recorded, and a success notification is delivered; when the machine
    /// came from an assignment rule rather than the form, an extra
    /// assignment notification reports which rule fired. On rejection an
    /// error notification is delivered and nothing is created.
    ///
    /// # Errors
    ///
    /// Returns [`LaserEntryError::Rejected`] for blank or non-positive
    /// fields, [`LaserEntryError::UnknownTensionType`],
    /// [`LaserEntryError::UnknownMachine`],
    /// [`LaserEntryError::MachineUnavailable`], or
    /// [`LaserEntryError::DuplicateLotNumber`] for reference-data
    /// violations, or another [`LaserEntryError`] variant when a
    /// collaborator fails.
    pub async fn create_lot(&self, draft: &LaserLotDraft) -> LaserEntryResult<LaserLot> {
        match self.try_create(draft).await {
            Ok(lot) => Ok(lot),
            Err(error) if is_rejection(&error) => {
                let context = Map::from_iter([("reason".to_owned(), json!(error.to_string()))]);
                let notification = self
                    .templates
                    .render(TemplateCatalog::LOT_REJECTED, &context)?;
                self.notifier.notify(notification)?;
                Err(error)
            }
            Err(error) => Err(error),
        }
    }

    async fn try_create(&self, draft: &LaserLotDraft) -> LaserEntryResult<LaserLot> {
        let number = LotNumber::new(draft.lot_number())?;
        let tension = TensionTypeId::new(draft.tension_type())?;
        let count = PacketCount::new(draft.packet_count())?;
        let kapan = KapanNumber::new(draft.kapan_number())?;
        let operator = parse_optional(draft.operator_name(), |value| OperatorName::new(value))?;

        if self.catalog.find_tension_type(&tension).await?.is_none() {
            return Err(LaserEntryError::UnknownTensionType(tension));
        }

        let (machine, assignment) = self.resolve_machine(draft, &tension, operator.as_ref())?;
        let found = self
            .catalog
            .find_machine(&machine)
            .await?
            .ok_or_else(|| LaserEntryError::UnknownMachine(machine.clone()))?;
        if !found.is_active() {
            return Err(LaserEntryError::MachineUnavailable(machine));
        }

        let sender = self.resolve_sender(draft).await?;

        let lot = LaserLot::new(
            LaserLotFields {
                number,
                tension,
                machine,
                count,
                kapan,
                sender: sender.clone(),
                operator: operator.clone(),
            },
            &*self.clock,
        );

        match self.repository.store(&lot).await {
            Ok(()) => {}
            Err(LaserLotRepositoryError::DuplicateLotNumber(existing)) => {
                return Err(LaserEntryError::DuplicateLotNumber(existing));
            }
            Err(other) => return Err(LaserEntryError::Repository(other)),
        }

        if draft.set_default_sender()
            && let Some(sender_name) = sender.as_ref()
        {
            self.settings
                .put(
                    &SettingScope::laser(),
                    &SettingKey::default_sender(),
                    sender_name.as_str(),
                )
                .await?;
            let context =
                Map::from_iter([("sender".to_owned(), json!(sender_name.as_str()))]);
            let notification = self
                .templates
                .render(TemplateCatalog::DEFAULT_SENDER_SAVED, &context)?;
            self.notifier.notify(notification)?;
        }

        if let Some(trigger) = assignment {
            let context = Map::from_iter([
                ("machine".to_owned(), json!(lot.machine().as_str())),
                ("trigger".to_owned(), json!(trigger)),
            ]);
            let notification = self
                .templates
                .render(TemplateCatalog::MACHINE_ASSIGNED, &context)?;
            self.notifier.notify(notification)?;
        }

        let attributed_to = lot
            .operator()
            .map(OperatorName::as_str)
            .or_else(|| lot.sender().map(SenderName::as_str))
            .unwrap_or("unassigned");
        let description = format!(
            "Created laser lot {} with {} packets",
            lot.number(),
            lot.count()
        );
        let record = ActivityRecord::new(
            ActivityKind::LaserLot,
            attributed_to,
            description,
            &*self.clock,
        );
        self.activity.record(&record).await?;

        let context = Map::from_iter([
            ("lot".to_owned(), json!(lot.number().as_str())),
            ("quantity".to_owned(), json!(lot.count().value())),
        ]);
        let notification = self.templates.render(TemplateCatalog::LOT_CREATED, &context)?;
        self.notifier.notify(notification)?;

        Ok(lot)
    }

    /// Picks the lot's machine: explicit form value, then the operator
    /// rule, then the tension rule.
    ///
    /// Returns the machine plus a description of the rule that fired, or
    /// `None` when the machine came from the form.
    fn resolve_machine(
        &self,
        draft: &LaserLotDraft,
        tension: &TensionTypeId,
        operator: Option<&OperatorName>,
    ) -> LaserEntryResult<(MachineId, Option<String>)> {
        if let Some(raw) = draft.machine()
            && !raw.trim().is_empty()
        {
            return Ok((MachineId::new(raw)?, None));
        }

        if let Some(name) = operator
            && let Some(machine) = self.rules.machine_for_operator(name)
        {
            return Ok((machine.clone(), Some(format!("operator {name}"))));
        }

        if let Some(machine) = self.rules.machine_for_tension(tension) {
            return Ok((machine.clone(), Some(format!("tension type {tension}"))));
        }

        Err(LaserDomainError::EmptyMachineId.into())
    }

    /// Resolves the sender: form value first, then the stored default.
    async fn resolve_sender(
        &self,
        draft: &LaserLotDraft,
    ) -> LaserEntryResult<Option<SenderName>> {
        if let Some(sender) = parse_optional(draft.sender_name(), |value| SenderName::new(value))? {
            return Ok(Some(sender));
        }
        let stored = self
            .settings
            .get(&SettingScope::laser(), &SettingKey::default_sender())
            .await?;
        Ok(stored.and_then(|value| SenderName::new(value).ok()))
    }
}

/// Parses an optional form field, treating blank input as absent.
fn parse_optional<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T, LaserDomainError>,
) -> Result<Option<T>, LaserDomainError> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(parse)
        .transpose()
}

/// Returns whether an error is a user-correctable rejection.
const fn is_rejection(error: &LaserEntryError) -> bool {
    matches!(
        error,
        LaserEntryError::Rejected(_)
            | LaserEntryError::UnknownTensionType(_)
            | LaserEntryError::UnknownMachine(_)
            | LaserEntryError::MachineUnavailable(_)
            | LaserEntryError::DuplicateLotNumber(_)
    )
}
