//! Step definitions for packet reassignment BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
