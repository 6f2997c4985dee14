//! Laser lot tracking for Lapidary.
//!
//! This module covers the laser side of the factory floor: creating laser
//! lots with rule-driven machine assignment, returning lots that cannot be
//! completed, and managing the catalog of machines, tension types, and
//! laser operators. The module follows hexagonal architecture:
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
