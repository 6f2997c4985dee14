//! Domain model for laser lot tracking.
//!
//! The laser domain models lots cut on the laser machines, the catalog of
//! machines, tension types, and operators those lots reference, and the
//! assignment rules that pick a machine from a tension type or an
//! operator, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod assignment;
mod error;
mod ids;
mod lot;
mod machine;
mod operator;
mod tension;

pub use assignment::AssignmentRules;
pub use error::{LaserDomainError, ParseMachineStatusError, ParseReturnReasonError};
pub use ids::{KapanNumber, LotNumber, MachineId, OperatorName, PacketCount, SenderName, TensionTypeId};
pub use lot::{LaserLot, LaserLotFields, LotStatus, ReturnReason};
pub use machine::{Machine, MachineStatus};
pub use operator::LaserOperator;
pub use tension::TensionType;
