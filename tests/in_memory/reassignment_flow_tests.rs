//! End-to-end flow: packet entries fund balances, transfers move them.

use super::helpers::{Factory, factory, lot, operator};
use lapidary::sarin::domain::{PacketEntryDraft, TransferDraft, TransferRejection};
use lapidary::sarin::ports::PacketLedger;
use lapidary::sarin::services::ReassignmentError;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn entries_fund_the_balances_transfers_move(factory: Factory) {
    let entry_service = factory.entry_service();
    let reassignment_service = factory.reassignment_service();

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
    entry_service
        .record_entry(&PacketEntryDraft::new(
            "Default Sender",
            "Jane Smith",
            "M002",
            "K12345",
            "L001",
            35,
        ))
        .await
        .expect("entry recorded");

    let completed = reassignment_service
        .reassign(&TransferDraft::new("L001", "John Doe", "Jane Smith", 15))
        .await
        .expect("transfer commits");

    assert_eq!(completed.source_after(), 35);
    assert_eq!(completed.destination_after(), 50);

    let total: u64 = factory
        .ledger
        .snapshot()
        .await
        .expect("snapshot")
        .iter()
        .map(|(_, _, amount)| amount)
        .sum();
    assert_eq!(total, 85, "the lot total is conserved");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_unfunded_operator_cannot_transfer(factory: Factory) {
    let reassignment_service = factory.reassignment_service();

    let result = reassignment_service
        .reassign(&TransferDraft::new("L001", "Nobody", "Jane Smith", 1))
        .await;

    assert!(matches!(
        result,
        Err(ReassignmentError::Rejected(
            TransferRejection::InsufficientBalance { available: 0, .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successive_transfers_drain_a_balance_to_exactly_zero(factory: Factory) {
    let entry_service = factory.entry_service();
    let reassignment_service = factory.reassignment_service();

    entry_service
        .record_entry(&PacketEntryDraft::new(
            "Default Sender",
            "John Doe",
            "M001",
            "K12345",
            "L001",
            30,
        ))
        .await
        .expect("entry recorded");

    reassignment_service
        .reassign(&TransferDraft::new("L001", "John Doe", "Jane Smith", 20))
        .await
        .expect("first transfer commits");
    reassignment_service
        .reassign(&TransferDraft::new("L001", "John Doe", "Jane Smith", 10))
        .await
        .expect("second transfer commits");

    let drained = factory
        .ledger
        .balance(&operator("John Doe"), &lot("L001"))
        .await
        .expect("balance read");
    assert_eq!(drained, 0);

    // The third transfer has nothing left to move.
    let result = reassignment_service
        .reassign(&TransferDraft::new("L001", "John Doe", "Jane Smith", 1))
        .await;
    assert!(matches!(
        result,
        Err(ReassignmentError::Rejected(
            TransferRejection::InsufficientBalance { available: 0, .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_transfers_never_overdraw_the_source(factory: Factory) {
    let entry_service = factory.entry_service();

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

    // Both transfers would individually fit the starting balance of 50,
    // but only one can win; the other must see the drained balance.
    let service_a = factory.reassignment_service();
    let service_b = factory.reassignment_service();
    let draft_a = TransferDraft::new("L001", "John Doe", "Jane Smith", 40);
    let draft_b = TransferDraft::new("L001", "John Doe", "Mike Wilson", 40);
    let (first, second) = tokio::join!(
        service_a.reassign(&draft_a),
        service_b.reassign(&draft_b),
    );

    let committed = usize::from(first.is_ok()) + usize::from(second.is_ok());
    assert_eq!(committed, 1, "exactly one racing transfer may commit");

    let remaining = factory
        .ledger
        .balance(&operator("John Doe"), &lot("L001"))
        .await
        .expect("balance read");
    assert_eq!(remaining, 10);

    let total: u64 = factory
        .ledger
        .snapshot()
        .await
        .expect("snapshot")
        .iter()
        .map(|(_, _, amount)| amount)
        .sum();
    assert_eq!(total, 50, "no packets were created or destroyed");
}
