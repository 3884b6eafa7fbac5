//! Latest-value broadcast
//!
//! A producer publishes values; every listener is marked ready. A listener
//! that wakes up receives the value current at that moment. Values
//! published while a listener was busy are skipped, never queued.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::watch::{Receiver, Watch};

use crate::task::TaskError;

/// Broadcast with up to `N` listeners
pub struct Broadcast<M: RawMutex, T: Clone, const N: usize> {
    watch: Watch<M, T, N>,
}

impl<M: RawMutex, T: Clone, const N: usize> Default for Broadcast<M, T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, T: Clone, const N: usize> Broadcast<M, T, N> {
    /// Create a broadcast with no value yet
    pub const fn new() -> Self {
        Self {
            watch: Watch::new(),
        }
    }

    /// Publish a value and mark every listener ready
    pub fn publish(&self, value: T) {
        self.watch.sender().send(value);
    }

    /// Register a new listener
    ///
    /// Fails once all `N` listener slots are taken.
    pub fn listen(&self) -> Result<Listener<'_, M, T, N>, TaskError> {
        self.watch
            .receiver()
            .map(|rx| Listener { rx })
            .ok_or(TaskError::TooManyListeners)
    }
}

/// Listener handle of a [`Broadcast`]
pub struct Listener<'a, M: RawMutex, T: Clone, const N: usize> {
    rx: Receiver<'a, M, T, N>,
}

impl<'a, M: RawMutex, T: Clone, const N: usize> Listener<'a, M, T, N> {
    /// Wait until a value newer than the last one seen is published
    pub async fn next(&mut self) -> T {
        self.rx.changed().await
    }

    /// Newer value if one was published since the last call
    pub fn try_next(&mut self) -> Option<T> {
        self.rx.try_changed()
    }

    /// Current value, marking it as seen
    pub fn latest(&mut self) -> Option<T> {
        self.rx.try_get()
    }
}
