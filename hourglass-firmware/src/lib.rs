//! Embassy task layer of the LED matrix hourglass
//!
//! Wires the board-agnostic logic of `hourglass-core` into six cooperating
//! embassy tasks sharing one [`AppContext`]. The board binary owns the
//! drivers: it builds the context around its display sink, hands the
//! accelerometer to [`spawn_all`] and feeds network time into
//! [`channels::TIME_SYNC`].

#![no_std]

pub mod channels;
pub mod context;
pub mod reset;
pub mod supervisor;
pub mod tasks;

pub use context::{AppContext, SharedSink};
pub use tasks::spawn_all;
