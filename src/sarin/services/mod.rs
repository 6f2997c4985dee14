//! Orchestration services for the Sarin context.

mod analysis;
mod entry;
mod reassignment;

pub use analysis::{LotAnalysisError, LotAnalysisReport, LotAnalysisService};
pub use entry::{PacketEntryError, PacketEntryService};
pub use reassignment::{PacketReassignmentService, ReassignmentError};
