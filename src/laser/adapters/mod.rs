//! Adapter implementations for the laser context.

pub mod memory;
