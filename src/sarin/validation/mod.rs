//! Pure validation rules for the Sarin context.
//!
//! Validation is side-effect free: rules read their inputs, decide, and
//! return either a validated value or a typed rejection. Committing an
//! admitted operation is the caller's responsibility.

pub mod transfer;
