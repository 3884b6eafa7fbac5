//! Gesture routing
//!
//! Each task owns one bounded queue. Gestures go to the current display
//! owner only, and only if it subscribed to them; orientation changes go
//! to every task subscribed to them.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::{Gesture, GestureSet};
use crate::sync::DropOldestQueue;
use crate::task::TaskId;

/// Retained gestures per task
pub const GESTURE_QUEUE_CAPACITY: usize = 3;

/// Per-task gesture queue
pub type GestureQueue<M> = DropOldestQueue<M, Gesture, GESTURE_QUEUE_CAPACITY>;

/// Subscription table and per-task queues
pub struct GestureRouter<M: RawMutex> {
    queues: [GestureQueue<M>; TaskId::COUNT],
    subscriptions: Mutex<M, Cell<[GestureSet; TaskId::COUNT]>>,
}

impl<M: RawMutex> Default for GestureRouter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> GestureRouter<M> {
    pub const fn new() -> Self {
        Self {
            queues: [const { DropOldestQueue::new() }; TaskId::COUNT],
            subscriptions: Mutex::new(Cell::new([GestureSet::EMPTY; TaskId::COUNT])),
        }
    }

    /// Subscribe a task to a set of gestures
    ///
    /// Subscriptions are additive and never revoked. Returns the task's
    /// queue.
    pub fn register(&self, owner: TaskId, gestures: GestureSet) -> &GestureQueue<M> {
        self.subscriptions.lock(|subs| {
            let mut table = subs.get();
            table[owner.index()] = table[owner.index()].union(gestures);
            subs.set(table);
        });
        &self.queues[owner.index()]
    }

    /// Gestures a task subscribed to
    pub fn subscription(&self, task: TaskId) -> GestureSet {
        self.subscriptions.lock(|subs| subs.get()[task.index()])
    }

    /// Deliver a gesture
    ///
    /// Returns the number of queues it was delivered to.
    pub fn route(&self, gesture: Gesture, owner: Option<TaskId>) -> usize {
        let table = self.subscriptions.lock(|subs| subs.get());
        let mut delivered = 0;
        for task in TaskId::ALL {
            let addressed = gesture == Gesture::OrientationChanged || owner == Some(task);
            if addressed && table[task.index()].contains(gesture) {
                self.queues[task.index()].send(gesture);
                delivered += 1;
            }
        }
        delivered
    }
}
