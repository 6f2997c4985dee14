//! Adapter implementations for the Sarin context.

pub mod memory;
