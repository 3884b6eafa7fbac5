//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the accelerometer / LED matrix drivers.

pub mod display;
pub mod motion;

pub use display::{DisplaySink, SinkError, MAX_INTENSITY};
pub use motion::{MotionSource, SensorError};
