//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use lapidary::dashboard::adapters::memory::InMemoryActivityFeed;
use lapidary::laser::adapters::memory::{InMemoryLaserLotRepository, InMemoryProductionCatalog};
use lapidary::laser::domain::{
    AssignmentRules, LaserOperator, Machine, MachineId, MachineStatus, TensionType, TensionTypeId,
};
use lapidary::laser::ports::ProductionCatalog;
use lapidary::notification::RecordingNotifier;
use lapidary::sarin::adapters::memory::{
    InMemoryPacketEntryRepository, InMemoryPacketLedger, InMemoryTransferJournal,
};
use lapidary::sarin::domain::{LotNumber, OperatorName};
use lapidary::sarin::services::{PacketEntryService, PacketReassignmentService};
use lapidary::settings::InMemorySettingsStore;
use mockable::DefaultClock;
use rstest::fixture;

/// Everything a cross-context test needs, wired over in-memory adapters.
pub struct Factory {
    /// Sarin packet ledger.
    pub ledger: Arc<InMemoryPacketLedger>,
    /// Sarin packet entry repository.
    pub entries: Arc<InMemoryPacketEntryRepository>,
    /// Reassignment journal.
    pub journal: Arc<InMemoryTransferJournal>,
    /// Laser lot repository.
    pub lots: Arc<InMemoryLaserLotRepository>,
    /// Laser reference-data catalog.
    pub catalog: Arc<InMemoryProductionCatalog>,
    /// Preference store.
    pub settings: Arc<InMemorySettingsStore>,
    /// Shared activity feed.
    pub activity: Arc<InMemoryActivityFeed>,
    /// Recording notifier.
    pub notifier: Arc<RecordingNotifier>,
    /// Shared clock.
    pub clock: Arc<DefaultClock>,
}

impl Factory {
    /// Builds the packet entry service over this factory's adapters.
    #[must_use]
    pub fn entry_service(
        &self,
    ) -> PacketEntryService<
        InMemoryPacketEntryRepository,
        InMemoryPacketLedger,
        InMemoryActivityFeed,
        RecordingNotifier,
        DefaultClock,
    > {
        PacketEntryService::new(
            Arc::clone(&self.entries),
            Arc::clone(&self.ledger),
            Arc::clone(&self.activity),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
        )
    }

    /// Builds the reassignment service over this factory's adapters.
    #[must_use]
    pub fn reassignment_service(
        &self,
    ) -> PacketReassignmentService<
        InMemoryPacketLedger,
        InMemoryTransferJournal,
        InMemoryActivityFeed,
        RecordingNotifier,
        DefaultClock,
    > {
        PacketReassignmentService::new(
            Arc::clone(&self.ledger),
            Arc::clone(&self.journal),
            Arc::clone(&self.activity),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
        )
    }
}

/// Provides a freshly wired factory for each test.
#[fixture]
pub fn factory() -> Factory {
    Factory {
        ledger: Arc::new(InMemoryPacketLedger::new()),
        entries: Arc::new(InMemoryPacketEntryRepository::new()),
        journal: Arc::new(InMemoryTransferJournal::new()),
        lots: Arc::new(InMemoryLaserLotRepository::new()),
        catalog: Arc::new(InMemoryProductionCatalog::new()),
        settings: Arc::new(InMemorySettingsStore::new()),
        activity: Arc::new(InMemoryActivityFeed::new()),
        notifier: Arc::new(RecordingNotifier::new()),
        clock: Arc::new(DefaultClock),
    }
}

/// Builds a validated Sarin operator name.
pub fn operator(name: &str) -> OperatorName {
    OperatorName::new(name).expect("valid operator name")
}

/// Builds a validated Sarin lot number.
pub fn lot(number: &str) -> LotNumber {
    LotNumber::new(number).expect("valid lot number")
}

/// Seeds the laser catalog with the floor's machines, tension types, and
/// operators, and returns the matching assignment rules.
pub async fn seed_laser_catalog(catalog: &InMemoryProductionCatalog) -> AssignmentRules {
    let machine = |id: &str| MachineId::new(id).expect("valid machine id");
    let tension = |id: &str| TensionTypeId::new(id).expect("valid tension id");

    for (id, name, status) in [
        ("M1", "Machine M1", MachineStatus::Active),
        ("M2", "Machine M2", MachineStatus::Active),
        ("M3", "Machine M3", MachineStatus::Active),
        ("M5", "Machine M5", MachineStatus::Maintenance),
    ] {
        let entry = Machine::new(machine(id), name, status).expect("valid machine");
        catalog.add_machine(&entry).await.expect("machine added");
    }

    for (id, name) in [("T001", "Normal"), ("T002", "Pressure"), ("T003", "None")] {
        let entry = TensionType::new(tension(id), name).expect("valid tension type");
        catalog
            .add_tension_type(&entry)
            .await
            .expect("tension type added");
    }

    let operators = [
        ("John Laser Operator", "M1"),
        ("Jane Laser Operator", "M2"),
        ("Mike Laser Operator", "M3"),
    ];
    for (name, default_machine) in operators {
        let entry = LaserOperator::new(
            lapidary::laser::domain::OperatorName::new(name).expect("valid operator"),
        )
        .with_default_machine(machine(default_machine));
        catalog.add_operator(&entry).await.expect("operator added");
    }

    AssignmentRules::from_tables(
        [
            (tension("T001"), machine("M1")),
            (tension("T002"), machine("M2")),
            (tension("T003"), machine("M3")),
        ],
        operators.map(|(name, default_machine)| {
            (
                lapidary::laser::domain::OperatorName::new(name).expect("valid operator"),
                machine(default_machine),
            )
        }),
    )
}
