//! Sarin packet tracking for Lapidary.
//!
//! This module covers the Sarin side of the factory floor: recording packet
//! entries against operators, maintaining per-(operator, lot) packet
//! balances, reassigning packets between operators, and analysing a lot's
//! entry history. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
