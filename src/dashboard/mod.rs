//! Production summary and recent activity for Lapidary.
//!
//! The dashboard context aggregates what the Sarin and laser workflows
//! already know: it derives summary figures from the packet ledger and the
//! laser lot repository, and keeps a bounded feed of recent activity that
//! both workflows append to. It owns no production data of its own. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
