//! Drain time settings screen
//!
//! Shows the drain time as a number on the first matrix and its unit on
//! the second. Changing the value slides the new one in diagonally.

pub mod screen;

pub use screen::{DrainScreen, Slide, SLIDE_FRAMES};
