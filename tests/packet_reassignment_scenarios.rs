//! Behaviour tests for packet reassignment between operators.

mod packet_reassignment_steps;

use packet_reassignment_steps::world::{ReassignmentWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/packet_reassignment.feature",
    name = "Transfer packets within the available balance"
)]
#[tokio::test(flavor = "multi_thread")]
async fn transfer_within_balance(world: ReassignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/packet_reassignment.feature",
    name = "Reject a transfer exceeding the available balance"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_over_balance(world: ReassignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/packet_reassignment.feature",
    name = "Reject a transfer back to the same operator"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_self_transfer(world: ReassignmentWorld) {
    let _ = world;
}
