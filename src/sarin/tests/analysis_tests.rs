//! Unit tests for lot analysis.

use std::sync::Arc;

use crate::dashboard::adapters::memory::InMemoryActivityFeed;
use crate::dashboard::domain::ActivityKind;
use crate::dashboard::ports::ActivityFeed;
use crate::sarin::adapters::memory::InMemoryPacketEntryRepository;
use crate::sarin::domain::{
    JiramNote, KapanNumber, LotNumber, MachineNumber, MainPacketNumber, OperatorName, PacketEntry,
    PacketEntryFields, PacketQuantity,
};
use crate::sarin::ports::PacketEntryRepository;
use crate::sarin::services::{LotAnalysisError, LotAnalysisService};
use mockable::DefaultClock;
use rstest::rstest;

fn entry(operator: &str, quantity: u64, main_packet: Option<&str>, jiram: Option<&str>) -> PacketEntry {
    let clock = DefaultClock;
    let count = i64::try_from(quantity).expect("test quantity fits");
    PacketEntry::new(
        PacketEntryFields {
            sender: OperatorName::new("Default Sender").expect("valid sender"),
            operator: OperatorName::new(operator).expect("valid operator"),
            machine: MachineNumber::new("M001").expect("valid machine"),
            kapan: KapanNumber::new("K12345").expect("valid kapan"),
            lot: LotNumber::new("L001").expect("valid lot"),
            main_packet: main_packet.map(|value| {
                MainPacketNumber::new(value).expect("valid main packet number")
            }),
            quantity: PacketQuantity::new(count).expect("valid quantity"),
            jiram: jiram.and_then(JiramNote::new),
        },
        &clock,
    )
}

async fn seeded_repository() -> Arc<InMemoryPacketEntryRepository> {
    let repository = Arc::new(InMemoryPacketEntryRepository::new());
    for stored in [
        entry("John Doe", 50, Some("MP001"), Some("Special handling")),
        entry("Jane Smith", 35, Some("MP002"), None),
        entry("Mike Wilson", 60, Some("MP003"), Some("Priority processing")),
        entry("John Doe", 10, Some("MP001"), None),
    ] {
        repository.store(&stored).await.expect("entry stored");
    }
    repository
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analysis_aggregates_totals_operators_and_jiram_counts() {
    let repository = seeded_repository().await;
    let activity = Arc::new(InMemoryActivityFeed::new());
    let service = LotAnalysisService::new(
        Arc::clone(&repository),
        Arc::clone(&activity),
        Arc::new(DefaultClock),
    );

    let report = service
        .analyze(
            &LotNumber::new("L001").expect("valid lot"),
            &OperatorName::new("Sarah Johnson").expect("valid operator"),
        )
        .await
        .expect("analysis should succeed");

    assert_eq!(report.total_entries(), 4);
    assert_eq!(report.total_packets(), 155);
    assert_eq!(
        report
            .operators()
            .iter()
            .map(OperatorName::as_str)
            .collect::<Vec<_>>(),
        vec!["Jane Smith", "John Doe", "Mike Wilson"]
    );
    assert_eq!(report.main_packets().len(), 3);
    assert_eq!(report.jiram_entries(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analysis_records_who_asked_in_the_activity_feed() {
    let repository = seeded_repository().await;
    let activity = Arc::new(InMemoryActivityFeed::new());
    let service = LotAnalysisService::new(
        Arc::clone(&repository),
        Arc::clone(&activity),
        Arc::new(DefaultClock),
    );

    service
        .analyze(
            &LotNumber::new("L001").expect("valid lot"),
            &OperatorName::new("Sarah Johnson").expect("valid operator"),
        )
        .await
        .expect("analysis should succeed");

    let recent = activity
        .recent_of_kind(ActivityKind::Analysis, 5)
        .await
        .expect("feed read");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent.first().map(|r| r.operator()), Some("Sarah Johnson"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analysing_an_unknown_lot_is_an_error() {
    let repository = Arc::new(InMemoryPacketEntryRepository::new());
    let service = LotAnalysisService::new(
        repository,
        Arc::new(InMemoryActivityFeed::new()),
        Arc::new(DefaultClock),
    );

    let result = service
        .analyze(
            &LotNumber::new("L999").expect("valid lot"),
            &OperatorName::new("Sarah Johnson").expect("valid operator"),
        )
        .await;

    assert!(matches!(
        result,
        Err(LotAnalysisError::NoEntriesFound(lot)) if lot.as_str() == "L999"
    ));
}
