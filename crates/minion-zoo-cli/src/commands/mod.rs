//! CLI command implementations.

pub mod roster;
pub mod simulate;
