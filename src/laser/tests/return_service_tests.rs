//! Service orchestration tests for lot returns.

use std::sync::Arc;

use crate::dashboard::adapters::memory::InMemoryActivityFeed;
use crate::laser::adapters::memory::InMemoryLaserLotRepository;
use crate::laser::domain::{
    KapanNumber, LaserDomainError, LaserLot, LaserLotFields, LotNumber, MachineId, PacketCount,
    ReturnReason, TensionTypeId,
};
use crate::laser::ports::LaserLotRepository;
use crate::laser::services::{LotReturnError, LotReturnService};
use crate::notification::{NotificationKind, RecordingNotifier};
use mockable::DefaultClock;
use rstest::rstest;

type TestReturnService = LotReturnService<
    InMemoryLaserLotRepository,
    InMemoryActivityFeed,
    RecordingNotifier,
    DefaultClock,
>;

struct Harness {
    repository: Arc<InMemoryLaserLotRepository>,
    notifier: Arc<RecordingNotifier>,
    service: TestReturnService,
}

fn lot_number(raw: &str) -> LotNumber {
    LotNumber::new(raw).expect("valid lot number")
}

fn active_lot(number: &str, count: u64) -> LaserLot {
    let clock = DefaultClock;
    let packets = i64::try_from(count).expect("test count fits");
    LaserLot::new(
        LaserLotFields {
            number: lot_number(number),
            tension: TensionTypeId::new("T001").expect("valid tension"),
            machine: MachineId::new("M1").expect("valid machine"),
            count: PacketCount::new(packets).expect("valid count"),
            kapan: KapanNumber::new("K12345").expect("valid kapan"),
            sender: None,
            operator: None,
        },
        &clock,
    )
}

async fn harness_with_lots(lots: &[LaserLot]) -> Harness {
    let repository = Arc::new(InMemoryLaserLotRepository::new());
    for lot in lots {
        repository.store(lot).await.expect("lot stored");
    }
    let notifier = Arc::new(RecordingNotifier::new());
    let service = LotReturnService::new(
        Arc::clone(&repository),
        Arc::new(InMemoryActivityFeed::new()),
        Arc::clone(&notifier),
        Arc::new(DefaultClock),
    );
    Harness {
        repository,
        notifier,
        service,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returning_an_active_lot_persists_the_transition() {
    let harness = harness_with_lots(&[active_lot("LL001", 120)]).await;

    let returned = harness
        .service
        .return_lot(&lot_number("LL001"), ReturnReason::QualityIssues)
        .await
        .expect("return should succeed");
    assert!(!returned.is_active());

    let stored = harness
        .repository
        .find_by_number(&lot_number("LL001"))
        .await
        .expect("lookup")
        .expect("lot exists");
    assert!(!stored.is_active());

    let last = harness.notifier.last().expect("success notification");
    assert_eq!(last.kind(), NotificationKind::Success);
    assert_eq!(last.message(), "Lot LL001 has been marked as returned");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returning_an_unknown_lot_is_refused() {
    let harness = harness_with_lots(&[]).await;

    let result = harness
        .service
        .return_lot(&lot_number("LL404"), ReturnReason::Other)
        .await;

    assert!(matches!(
        result,
        Err(LotReturnError::UnknownLot(number)) if number.as_str() == "LL404"
    ));
    assert_eq!(
        harness.notifier.last().map(|n| n.kind()),
        Some(NotificationKind::Error)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returning_a_lot_twice_is_refused() {
    let harness = harness_with_lots(&[active_lot("LL001", 120)]).await;
    harness
        .service
        .return_lot(&lot_number("LL001"), ReturnReason::Other)
        .await
        .expect("first return should succeed");

    let result = harness
        .service
        .return_lot(&lot_number("LL001"), ReturnReason::Other)
        .await;

    assert!(matches!(
        result,
        Err(LotReturnError::Rejected(LaserDomainError::AlreadyReturned(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn return_analysis_groups_by_reason() {
    let harness = harness_with_lots(&[
        active_lot("LL001", 100),
        active_lot("LL002", 50),
        active_lot("LL003", 25),
    ])
    .await;
    for (number, reason) in [
        ("LL001", ReturnReason::QualityIssues),
        ("LL002", ReturnReason::QualityIssues),
        ("LL003", ReturnReason::MachineMalfunction),
    ] {
        harness
            .service
            .return_lot(&lot_number(number), reason)
            .await
            .expect("return should succeed");
    }

    let analysis = harness
        .service
        .return_analysis()
        .await
        .expect("analysis should succeed");

    assert_eq!(analysis.total_returned, 3);
    assert_eq!(analysis.total_packets, 175);
    assert_eq!(
        analysis.by_reason.first(),
        Some(&(ReturnReason::QualityIssues, 2))
    );

    let recent = harness
        .service
        .recent_returns(2)
        .await
        .expect("recent returns");
    assert_eq!(recent.len(), 2);
}
