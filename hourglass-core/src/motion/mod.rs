//! Motion classification
//!
//! Turns corrected gravity samples into a hysteretic orientation and the
//! 45° rotated tilt that drives the sand.

pub mod classifier;
pub mod mounting;
pub mod orientation;

pub use classifier::{Classified, MotionClassifier};
pub use mounting::Mounting;
pub use orientation::{Category, GravityVector, MotionSample, Orientation, Sign, Tilt};
