//! Task identities and the task table
//!
//! The set of cooperating tasks is closed: every role is a [`TaskId`]
//! variant. Tasks are recorded in a [`Registry`] once at construction and
//! stay there for the process lifetime.

pub mod fault;
pub mod registry;
pub mod supervisor;

pub use fault::{Fault, TaskError};
pub use registry::Registry;
pub use supervisor::{Supervisor, TaskState};

/// Identity of a cooperating task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    /// Accelerometer sampling and orientation classification
    Accel,
    /// Gesture recognition
    Gestures,
    /// Display manager (idle timer, screen saver)
    Display,
    /// Sand animation
    Hourglass,
    /// Wall clock
    Clock,
    /// Drain time settings
    Settings,
}

impl TaskId {
    /// Number of task identities
    pub const COUNT: usize = 6;

    /// All task identities in registration order
    pub const ALL: [TaskId; Self::COUNT] = [
        TaskId::Accel,
        TaskId::Gestures,
        TaskId::Display,
        TaskId::Hourglass,
        TaskId::Clock,
        TaskId::Settings,
    ];

    /// Dense index usable for per-task tables
    pub const fn index(self) -> usize {
        match self {
            TaskId::Accel => 0,
            TaskId::Gestures => 1,
            TaskId::Display => 2,
            TaskId::Hourglass => 3,
            TaskId::Clock => 4,
            TaskId::Settings => 5,
        }
    }

    /// Stable task name
    pub const fn name(self) -> &'static str {
        match self {
            TaskId::Accel => "accel",
            TaskId::Gestures => "gestures",
            TaskId::Display => "dispman",
            TaskId::Hourglass => "hourglass",
            TaskId::Clock => "clock",
            TaskId::Settings => "setup",
        }
    }

    /// Resolve a task name
    pub fn from_name(name: &str) -> Option<TaskId> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}
