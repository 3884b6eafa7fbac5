//! Wall clock
//!
//! Local time is kept as a shift against the monotonic millisecond
//! counter; a wall-clock correction only updates the shift. The clock face
//! shows hours on the first matrix and minutes on the second.

pub mod face;
pub mod wall;

pub use face::{brightness_for, ClockFace};
pub use wall::{TimeOfDay, WallClock, WallTime, DAY_MS};
