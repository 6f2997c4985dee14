//! Shared world state for packet reassignment BDD scenarios.

use std::sync::Arc;

use lapidary::dashboard::adapters::memory::InMemoryActivityFeed;
use lapidary::notification::RecordingNotifier;
use lapidary::sarin::adapters::memory::{InMemoryPacketLedger, InMemoryTransferJournal};
use lapidary::sarin::domain::{CompletedReassignment, LotNumber, OperatorName};
use lapidary::sarin::services::{PacketReassignmentService, ReassignmentError};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestReassignmentService = PacketReassignmentService<
    InMemoryPacketLedger,
    InMemoryTransferJournal,
    InMemoryActivityFeed,
    RecordingNotifier,
    DefaultClock,
>;

/// Scenario world for packet reassignment behaviour tests.
pub struct ReassignmentWorld {
    /// The ledger backing the scenario.
    pub ledger: Arc<InMemoryPacketLedger>,
    /// The notifier recording scenario outcomes.
    pub notifier: Arc<RecordingNotifier>,
    /// The reassignment service under test.
    pub service: TestReassignmentService,
    /// Result of the last reassignment attempt.
    pub last_result: Option<Result<CompletedReassignment, ReassignmentError>>,
}

impl ReassignmentWorld {
    /// Creates a world with an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        let ledger = Arc::new(InMemoryPacketLedger::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let service = PacketReassignmentService::new(
            Arc::clone(&ledger),
            Arc::new(InMemoryTransferJournal::new()),
            Arc::new(InMemoryActivityFeed::new()),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        );
        Self {
            ledger,
            notifier,
            service,
            last_result: None,
        }
    }
}

impl Default for ReassignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReassignmentWorld {
    ReassignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a validated operator name for step arguments.
pub fn operator(name: &str) -> Result<OperatorName, eyre::Report> {
    OperatorName::new(name).map_err(|err| eyre::eyre!("invalid operator in scenario: {err}"))
}

/// Builds a validated lot number for step arguments.
pub fn lot(number: &str) -> Result<LotNumber, eyre::Report> {
    LotNumber::new(number).map_err(|err| eyre::eyre!("invalid lot in scenario: {err}"))
}
