//! Task supervision
//!
//! Every task identity enters the table before any body runs. A body only
//! ever returns with a [`Fault`]; the supervisor marks the task faulted and
//! hands the fault to the reset hook. There is no per-task restart.

use core::cell::RefCell;
use core::convert::Infallible;
use core::future::Future;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::{Fault, Registry, TaskId};

/// Lifecycle of a registered task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskState {
    /// In the task table, body not entered yet
    Spawned,
    /// Body running
    Running,
    /// Body returned a fault, reset pending
    Faulted,
}

/// Task table with lifecycle tracking
pub struct Supervisor<M: RawMutex> {
    tasks: Mutex<M, RefCell<Registry<TaskState>>>,
}

impl<M: RawMutex> Default for Supervisor<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Supervisor<M> {
    pub const fn new() -> Self {
        Self {
            tasks: Mutex::new(RefCell::new(Registry::new())),
        }
    }

    /// Enter a task into the table
    pub fn register(&self, id: TaskId) {
        self.tasks.lock(|tasks| {
            tasks.borrow_mut().register(id, TaskState::Spawned);
        });
    }

    /// Lifecycle state of a task, `None` if it was never registered
    pub fn state(&self, id: TaskId) -> Option<TaskState> {
        self.tasks
            .lock(|tasks| tasks.borrow().lookup(id).ok().copied())
    }

    /// Check that `id` may become the display owner
    pub fn resolve(&self, id: TaskId) -> Result<TaskId, Fault> {
        self.tasks.lock(|tasks| match tasks.borrow().lookup(id) {
            Ok(_) => Ok(id),
            Err(_) => Err(Fault::UnknownOwner(id)),
        })
    }

    fn mark(&self, id: TaskId, state: TaskState) {
        self.tasks.lock(|tasks| {
            if let Ok(slot) = tasks.borrow_mut().lookup_mut(id) {
                *slot = state;
            }
        });
    }

    /// Run a task body until it faults, then call `reset`
    ///
    /// The task is marked running while `body` is polled and faulted
    /// before `reset` sees the fault.
    pub async fn run<F, R, T>(&self, id: TaskId, body: F, reset: R) -> T
    where
        F: Future<Output = Result<Infallible, Fault>>,
        R: FnOnce(TaskId, Fault) -> T,
    {
        self.mark(id, TaskState::Running);
        let fault = match body.await {
            Ok(never) => match never {},
            Err(fault) => fault,
        };
        self.mark(id, TaskState::Faulted);
        reset(id, fault)
    }
}
