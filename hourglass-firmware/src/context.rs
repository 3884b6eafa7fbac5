//! Shared application context
//!
//! Everything the tasks share lives here: the configuration, the display
//! arbiter, the gravity broadcast, the gesture router, the live drain time
//! and the task table. The board binary creates one context and hands a
//! `&'static` to every task.

use core::cell::RefCell;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use hourglass_core::config::HourglassConfig;
use hourglass_core::display::DisplayArbiter;
use hourglass_core::gesture::GestureRouter;
use hourglass_core::motion::MotionSample;
use hourglass_core::sync::Broadcast;
use hourglass_core::task::{Fault, Supervisor, TaskId};
use hourglass_core::traits::DisplaySink;
use portable_atomic::{AtomicU32, Ordering};

/// Gesture recognizer and hourglass animation
pub const GRAVITY_LISTENERS: usize = 2;

/// Display driver as handed over by the board
pub type SharedSink = &'static mut (dyn DisplaySink + Send);

/// Arbiter over the board's display
pub type Arbiter = DisplayArbiter<SharedSink>;

/// State shared by all tasks
pub struct AppContext {
    /// Boot configuration
    pub config: HourglassConfig,
    /// Oriented gravity samples, latest value wins
    pub gravity: Broadcast<CriticalSectionRawMutex, MotionSample, GRAVITY_LISTENERS>,
    /// Per-task gesture queues
    pub gestures: GestureRouter<CriticalSectionRawMutex>,
    /// Task table
    pub tasks: Supervisor<CriticalSectionRawMutex>,
    /// Device reset used by the supervisor
    pub reset: fn() -> !,
    display: Mutex<CriticalSectionRawMutex, RefCell<Arbiter>>,
    drain_time_s: AtomicU32,
}

impl AppContext {
    /// Build the context around the board's display
    ///
    /// The hourglass owns the display from the start.
    pub fn new(config: HourglassConfig, sink: SharedSink, reset: fn() -> !) -> Self {
        Self {
            config,
            gravity: Broadcast::new(),
            gestures: GestureRouter::new(),
            tasks: Supervisor::new(),
            reset,
            display: Mutex::new(RefCell::new(DisplayArbiter::new(
                sink,
                TaskId::Hourglass,
                config.idle,
            ))),
            drain_time_s: AtomicU32::new(config.drain_time_s),
        }
    }

    /// Run `f` with exclusive access to the display arbiter
    ///
    /// Must not be called from within `f`.
    pub fn with_display<R>(&self, f: impl FnOnce(&mut Arbiter) -> R) -> R {
        self.display.lock(|display| f(&mut display.borrow_mut()))
    }

    /// Current display owner
    pub fn owner(&self) -> TaskId {
        self.with_display(|display| display.owner())
    }

    /// Hand the display to another task
    pub fn hand_over(&self, target: TaskId) -> Result<(), Fault> {
        let target = self.tasks.resolve(target)?;
        info!("display owner: {}", target.name());
        self.with_display(|display| display.set_owner(target))?;
        Ok(())
    }

    /// Reset the idle timer on behalf of `requester`
    pub fn keep_alive(&self, requester: Option<TaskId>) -> Result<(), Fault> {
        self.with_display(|display| display.keep_alive(requester))?;
        Ok(())
    }

    /// Set the brightness `requester` wants while it owns the display
    pub fn set_brightness(&self, requester: TaskId, level: u8) -> Result<(), Fault> {
        self.with_display(|display| display.set_brightness(requester, level))?;
        Ok(())
    }

    /// Live drain time in seconds
    pub fn drain_time_s(&self) -> u32 {
        self.drain_time_s.load(Ordering::Relaxed)
    }

    /// Change the live drain time
    pub fn set_drain_time_s(&self, seconds: u32) {
        self.drain_time_s.store(seconds, Ordering::Relaxed);
    }
}
