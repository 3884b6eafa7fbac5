//! Error taxonomy
//!
//! Contract violations and driver failures are both fatal: they travel up
//! to the task supervisor as a [`Fault`] and end in a device reset. Timing
//! misses never become errors.

use super::TaskId;
use crate::traits::{SensorError, SinkError};

/// Task framework contract errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskError {
    /// No task was ever registered under this identity
    NotFound,
    /// A broadcast has no listener slot left
    TooManyListeners,
}

/// Fatal condition reported by a task body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Task framework contract violated
    Contract(TaskError),
    /// Ownership handed to a task that is not in the task table
    UnknownOwner(TaskId),
    /// Accelerometer read failed
    Sensor(SensorError),
    /// Display write failed
    Display(SinkError),
}

impl From<TaskError> for Fault {
    fn from(e: TaskError) -> Self {
        Fault::Contract(e)
    }
}

impl From<SensorError> for Fault {
    fn from(e: SensorError) -> Self {
        Fault::Sensor(e)
    }
}

impl From<SinkError> for Fault {
    fn from(e: SinkError) -> Self {
        Fault::Display(e)
    }
}
