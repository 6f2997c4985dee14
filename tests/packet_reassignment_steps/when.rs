//! When steps for packet reassignment BDD scenarios.

use super::world::{ReassignmentWorld, run_async};
use lapidary::sarin::domain::TransferDraft;
use rstest_bdd_macros::when;

#[when(r#"{count:i64} packets are reassigned from "{from}" to "{to}" in lot "{lot_number}""#)]
fn packets_are_reassigned(
    world: &mut ReassignmentWorld,
    count: i64,
    from: String,
    to: String,
    lot_number: String,
) {
    let draft = TransferDraft::new(lot_number, from, to, count);
    world.last_result = Some(run_async(world.service.reassign(&draft)));
}
