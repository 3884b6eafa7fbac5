//! Bounded drop-oldest queue
//!
//! `send` never waits: when the queue is full the oldest entry is evicted.
//! `receive` suspends until an entry is available and returns the oldest.
//! One consumer per queue.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use heapless::Deque;

/// FIFO of capacity `N` that drops its oldest entry on overflow
pub struct DropOldestQueue<M: RawMutex, T, const N: usize> {
    entries: Mutex<M, RefCell<Deque<T, N>>>,
    ready: Signal<M, ()>,
}

impl<M: RawMutex, T, const N: usize> Default for DropOldestQueue<M, T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, T, const N: usize> DropOldestQueue<M, T, N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(RefCell::new(Deque::new())),
            ready: Signal::new(),
        }
    }

    /// Append a value, evicting the oldest one if the queue is full
    ///
    /// Returns the evicted value, if any.
    pub fn send(&self, value: T) -> Option<T> {
        let evicted = self.entries.lock(|entries| {
            let mut entries = entries.borrow_mut();
            let evicted = if entries.is_full() {
                entries.pop_front()
            } else {
                None
            };
            // Cannot fail: a slot was freed above if the deque was full
            let _ = entries.push_back(value);
            evicted
        });
        self.ready.signal(());
        evicted
    }

    /// Take the oldest value without waiting
    pub fn try_receive(&self) -> Option<T> {
        self.entries.lock(|entries| entries.borrow_mut().pop_front())
    }

    /// Wait for a value and take the oldest one
    pub async fn receive(&self) -> T {
        loop {
            if let Some(value) = self.try_receive() {
                return value;
            }
            self.ready.wait().await;
        }
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.lock(|entries| entries.borrow().len())
    }

    /// Check if no entry is retained
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
