//! Given steps for packet reassignment BDD scenarios.

use super::world::{ReassignmentWorld, lot, operator, run_async};
use lapidary::sarin::domain::PacketQuantity;
use lapidary::sarin::ports::PacketLedger;
use rstest_bdd_macros::given;

#[given(r#"operator "{name}" holds {count:i64} packets in lot "{lot_number}""#)]
fn operator_holds_packets(
    world: &mut ReassignmentWorld,
    name: String,
    count: i64,
    lot_number: String,
) -> Result<(), eyre::Report> {
    let holder = operator(&name)?;
    let lot_id = lot(&lot_number)?;
    let quantity = PacketQuantity::new(count)
        .map_err(|err| eyre::eyre!("invalid seed quantity in scenario: {err}"))?;
    run_async(world.ledger.credit(&holder, &lot_id, quantity))
        .map_err(|err| eyre::eyre!("seeding the ledger failed: {err}"))?;
    Ok(())
}
