//! End-to-end flow: laser lot creation, assignment, and returns.

use std::sync::Arc;

use super::helpers::{Factory, factory, seed_laser_catalog};
use lapidary::laser::domain::{LotNumber, ReturnReason};
use lapidary::laser::services::{LaserEntryService, LaserLotDraft, LotReturnService};
use lapidary::notification::NotificationKind;
use rstest::rstest;

fn lot_number(raw: &str) -> LotNumber {
    LotNumber::new(raw).expect("valid lot number")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_lot_flows_from_creation_to_return(factory: Factory) {
    let rules = seed_laser_catalog(&factory.catalog).await;
    let entry_service = LaserEntryService::new(
        Arc::clone(&factory.lots),
        Arc::clone(&factory.catalog),
        Arc::clone(&factory.settings),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.notifier),
        rules,
        Arc::clone(&factory.clock),
    );
    let return_service = LotReturnService::new(
        Arc::clone(&factory.lots),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.notifier),
        Arc::clone(&factory.clock),
    );

    let draft = LaserLotDraft::new("LL001", "T002", 150, "K12345")
        .with_operator("Jane Laser Operator")
        .with_sender("Ramesh Patel")
        .remember_sender();
    let lot = entry_service
        .create_lot(&draft)
        .await
        .expect("lot created");
    assert_eq!(lot.machine().as_str(), "M2", "operator rule picked M2");

    let returned = return_service
        .return_lot(&lot_number("LL001"), ReturnReason::WrongTensionSetting)
        .await
        .expect("lot returned");
    assert!(!returned.is_active());

    let analysis = return_service
        .return_analysis()
        .await
        .expect("return analysis");
    assert_eq!(analysis.total_returned, 1);
    assert_eq!(analysis.total_packets, 150);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_stored_default_sender_fills_later_lots(factory: Factory) {
    let rules = seed_laser_catalog(&factory.catalog).await;
    let entry_service = LaserEntryService::new(
        Arc::clone(&factory.lots),
        Arc::clone(&factory.catalog),
        Arc::clone(&factory.settings),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.notifier),
        rules,
        Arc::clone(&factory.clock),
    );

    entry_service
        .create_lot(
            &LaserLotDraft::new("LL001", "T001", 100, "K12345")
                .with_sender("Ramesh Patel")
                .remember_sender(),
        )
        .await
        .expect("first lot created");

    let second = entry_service
        .create_lot(&LaserLotDraft::new("LL002", "T001", 60, "K12346"))
        .await
        .expect("second lot created");
    assert_eq!(second.sender().map(|s| s.as_str()), Some("Ramesh Patel"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_lot_numbers_are_refused_across_the_flow(factory: Factory) {
    let rules = seed_laser_catalog(&factory.catalog).await;
    let entry_service = LaserEntryService::new(
        Arc::clone(&factory.lots),
        Arc::clone(&factory.catalog),
        Arc::clone(&factory.settings),
        Arc::clone(&factory.activity),
        Arc::clone(&factory.notifier),
        rules,
        Arc::clone(&factory.clock),
    );

    entry_service
        .create_lot(&LaserLotDraft::new("LL001", "T001", 100, "K12345"))
        .await
        .expect("first lot created");
    let result = entry_service
        .create_lot(&LaserLotDraft::new("ll001", "T001", 40, "K12399"))
        .await;

    assert!(result.is_err(), "normalized lot numbers collide");
    assert_eq!(
        factory.notifier.last().map(|n| n.kind()),
        Some(NotificationKind::Error)
    );
}
