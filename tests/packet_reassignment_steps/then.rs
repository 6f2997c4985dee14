//! Then steps for packet reassignment BDD scenarios.

use super::world::{ReassignmentWorld, lot, operator, run_async};
use lapidary::notification::NotificationKind;
use lapidary::sarin::domain::TransferRejection;
use lapidary::sarin::ports::PacketLedger;
use lapidary::sarin::services::ReassignmentError;
use rstest_bdd_macros::then;

#[then("the transfer succeeds")]
fn transfer_succeeds(world: &ReassignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transfer result in scenario world"))?;
    if result.is_err() {
        return Err(eyre::eyre!("expected success, got {result:?}"));
    }
    if world.notifier.last().map(|n| n.kind()) != Some(NotificationKind::Success) {
        return Err(eyre::eyre!("expected a success notification"));
    }
    Ok(())
}

#[then(r#""{name}" holds {count:u64} packets in lot "{lot_number}""#)]
fn balance_is(
    world: &mut ReassignmentWorld,
    name: String,
    count: u64,
    lot_number: String,
) -> Result<(), eyre::Report> {
    let holder = operator(&name)?;
    let lot_id = lot(&lot_number)?;
    let balance = run_async(world.ledger.balance(&holder, &lot_id))
        .map_err(|err| eyre::eyre!("balance read failed: {err}"))?;
    if balance != count {
        return Err(eyre::eyre!(
            "expected {name} to hold {count} packets, found {balance}"
        ));
    }
    Ok(())
}

#[then("the transfer is rejected for insufficient balance with {available:u64} available")]
fn rejected_for_insufficient_balance(
    world: &ReassignmentWorld,
    available: u64,
) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transfer result in scenario world"))?;
    match result {
        Err(ReassignmentError::Rejected(TransferRejection::InsufficientBalance {
            available: reported,
            ..
        })) if *reported == available => Ok(()),
        other => Err(eyre::eyre!(
            "expected InsufficientBalance with {available} available, got {other:?}"
        )),
    }
}

#[then("the transfer is rejected as a self transfer")]
fn rejected_as_self_transfer(world: &ReassignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transfer result in scenario world"))?;
    if !matches!(
        result,
        Err(ReassignmentError::Rejected(TransferRejection::SameOperator))
    ) {
        return Err(eyre::eyre!("expected SameOperator rejection, got {result:?}"));
    }
    if world.notifier.last().map(|n| n.kind()) != Some(NotificationKind::Error) {
        return Err(eyre::eyre!("expected an error notification"));
    }
    Ok(())
}
