//! Configuration types
//!
//! Device defaults and the drain time ladder offered by the settings mode.

pub mod ladder;
pub mod types;

pub use ladder::{DrainLadder, DrainUnit, DRAIN_LADDER_S};
pub use types::*;
