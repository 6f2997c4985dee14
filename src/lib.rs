//! Lapidary: production tracking for a diamond-processing factory.
//!
//! This crate provides the domain core behind the factory's production
//! dashboard: Sarin packet tracking with operator-to-operator reassignment,
//! laser lot tracking with rule-driven machine assignment, and a summary
//! view derived from both workflows.
//!
//! # Architecture
//!
//! Lapidary follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory only; the
//!   crate deliberately carries no persistence layer)
//!
//! # Modules
//!
//! - [`sarin`]: Packet entry, per-lot operator balances, and reassignment
//! - [`laser`]: Laser lot lifecycle, machine assignment, and catalog data
//! - [`dashboard`]: Production summary and recent-activity feed
//! - [`settings`]: Scoped key-value storage for operator preferences
//! - [`notification`]: User-facing success/error notifications

pub mod dashboard;
pub mod laser;
pub mod notification;
pub mod sarin;
pub mod settings;
