//! Derived production summary figures.

use serde::{Deserialize, Serialize};

/// Headline figures shown on the dashboard.
///
/// Every figure is derived from the owning context at read time; nothing
/// here is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSummary {
    /// Total packets currently tracked across both workflows.
    pub total_packets: u64,
    /// Operators currently holding a non-zero Sarin balance.
    pub active_operators: usize,
    /// Laser lots on record, active and returned.
    pub laser_lots: usize,
    /// Activity-feed entries recorded today.
    pub completed_today: usize,
}
