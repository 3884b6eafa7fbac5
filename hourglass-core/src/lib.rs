//! Board-agnostic core logic for the LED matrix hourglass firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Task identities, task table, supervision and fault taxonomy
//! - Broadcast and drop-oldest queue primitives
//! - Motion classification with hysteresis
//! - Gesture recognition and owner-based routing
//! - Display ownership arbitration and dirty-tracked pixel planes
//! - Sand cellular automaton and neck flow control
//! - Wall clock keeping and rendering
//! - Drain time settings screen
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod display;
pub mod gesture;
pub mod motion;
pub mod sand;
pub mod settings;
pub mod sync;
pub mod task;
pub mod traits;
