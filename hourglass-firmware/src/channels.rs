//! Inter-task communication channels
//!
//! Signals shared between tasks and with the board binary.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use hourglass_core::clock::WallTime;

/// Wall time fetched by the board's time source (clock task listens)
pub static TIME_SYNC: Signal<CriticalSectionRawMutex, WallTime> = Signal::new();

/// Clock asks the board's time source for a fresh wall time
pub static SYNC_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Clock face must repaint everything on its next tick
pub static CLOCK_REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Hourglass handed the display to the settings screen
pub static SETTINGS_OPEN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Hourglass ran out, flash the brightness
pub static PULSE_START: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Settings asks the hourglass to put the sand back
pub static SAND_RESTART: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Hourglass did put the sand back, settings confirms with a pulse
pub static RESTART_PULSE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
