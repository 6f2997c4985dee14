//! End-to-end flow: the dashboard summarises both workflows.

use std::sync::Arc;

use super::helpers::{Factory, factory, seed_laser_catalog};
use lapidary::dashboard::services::DashboardService;
use lapidary::laser::services::{LaserEntryService, LaserLotDraft};
use lapidary::sarin::domain::{PacketEntryDraft, TransferDraft};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_summary_tracks_both_workflows_live(factory: Factory) {
    let entry_service = factory.entry_service();
    let reassignment_service = factory.reassignment_service();
    let rules = seed_laser_catalog(&factory.catalog).await;
    let laser_service = LaserEntryService::new(
        Arc::clone(&factory.lots),
        Arc::clone(&factory.catalog),
        Arc::clone(&factory.settings),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.notifier),
        rules,
        Arc::clone(&factory.clock),
    );
    let dashboard = DashboardService::new(
        Arc::clone(&factory.ledger),
        Arc::clone(&factory.lots),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.clock),
    );

    entry_service
        .record_entry(&PacketEntryDraft::new(
            "Default Sender",
            "John Doe",
            "M001",
            "K12345",
            "L001",
            50,
        ))
        .await
        .expect("entry recorded");
    laser_service
        .create_lot(&LaserLotDraft::new("LL001", "T001", 100, "K12345"))
        .await
        .expect("lot created");
    reassignment_service
        .reassign(&TransferDraft::new("L001", "John Doe", "Jane Smith", 15))
        .await
        .expect("transfer commits");

    let summary = dashboard.summary().await.expect("summary");
    assert_eq!(summary.total_packets, 150);
    assert_eq!(summary.active_operators, 2);
    assert_eq!(summary.laser_lots, 1);
    assert_eq!(summary.completed_today, 3, "each operation left activity");

    let recent = dashboard.recent_activity(10).await.expect("activity");
    assert_eq!(recent.len(), 3);
    assert_eq!(
        recent.first().map(|record| record.operator()),
        Some("John Doe"),
        "the reassignment is the newest record"
    );
}
