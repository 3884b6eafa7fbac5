//! Cooperative synchronization primitives
//!
//! Both primitives never block the producer:
//!
//! - [`Broadcast`]: latest-value delivery to many listeners, no queueing
//! - [`DropOldestQueue`]: bounded FIFO that evicts the oldest entry when full

pub mod broadcast;
pub mod queue;

pub use broadcast::{Broadcast, Listener};
pub use queue::DropOldestQueue;
