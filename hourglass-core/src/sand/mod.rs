//! Falling sand
//!
//! Each chamber is an 8x8 cellular automaton stepped every animation
//! frame; the neck moves grains between the chambers at the configured
//! drain rate.

pub mod direction;
pub mod field;
pub mod hourglass;
pub mod neck;
pub mod pulse;
pub mod scan;

pub use direction::fall_direction;
pub use field::SandField;
pub use hourglass::{FrameOutcome, Hourglass};
pub use neck::{NeckFlow, NeckOutcome, NECK_CELLS};
pub use pulse::{
    PulseCounter, PulseRamp, PulseStep, HOURGLASS_PULSE_CYCLES, RESTART_PULSE_CYCLES,
};
pub use scan::ScanOrder;
