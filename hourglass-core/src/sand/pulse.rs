//! Brightness pulse when the sand settles
//!
//! Once the watched chamber becomes empty or full the display pulses a
//! few times. Pulses triggered while one is running are queued, at most
//! two in total.

use crate::traits::MAX_INTENSITY;

/// Pulse cycles the hourglass plays when it runs out
pub const HOURGLASS_PULSE_CYCLES: u8 = 4;

/// Pulse cycles confirming a restart from the settings screen
pub const RESTART_PULSE_CYCLES: u8 = 2;

/// Hold at full brightness between ramp up and ramp down, in milliseconds
const PEAK_HOLD_MS: u64 = 100;

/// Longest per-level hold of a ramp, in milliseconds
const RAMP_HOLD_MS: u64 = 20;

const STEPS_PER_CYCLE: u16 = 2 * (MAX_INTENSITY as u16 + 1) + 1;

/// Pending pulse bookkeeping
#[derive(Debug, Clone, Default)]
pub struct PulseCounter {
    pending: u8,
    last_len: u32,
}

impl PulseCounter {
    pub const fn new() -> Self {
        Self {
            pending: 0,
            last_len: 0,
        }
    }

    /// Number of pulses queued, the running one included
    pub fn pending(&self) -> u8 {
        self.pending
    }

    /// Record the grain count of the watched chamber
    ///
    /// Returns `true` when a pulse has to be started now; a pulse requested
    /// while another runs is only queued.
    pub fn observe(&mut self, len: u32, capacity: u32) -> bool {
        if len == self.last_len {
            return false;
        }
        self.last_len = len;
        if len != 0 && len != capacity {
            return false;
        }
        let start = self.pending == 0;
        self.pending = (self.pending + 1).min(2);
        start
    }

    /// Mark the running pulse as done
    ///
    /// Returns `true` if another pulse is queued and should start now.
    pub fn finish(&mut self) -> bool {
        self.pending = self.pending.saturating_sub(1);
        self.pending > 0
    }
}

/// One brightness step of a pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseStep {
    pub level: u8,
    pub hold_ms: u64,
}

/// Brightness ramp: `cycles` times up and down, then back to `rest`
#[derive(Debug, Clone)]
pub struct PulseRamp {
    cycles: u8,
    rest: u8,
    index: u16,
}

impl PulseRamp {
    pub fn new(cycles: u8, rest: u8) -> Self {
        Self {
            cycles,
            rest: rest.min(MAX_INTENSITY),
            index: 0,
        }
    }

    fn ramp(level: u8) -> PulseStep {
        PulseStep {
            level,
            hold_ms: RAMP_HOLD_MS - level as u64,
        }
    }
}

impl Iterator for PulseRamp {
    type Item = PulseStep;

    fn next(&mut self) -> Option<PulseStep> {
        let cycle_steps = self.cycles as u16 * STEPS_PER_CYCLE;
        let index = self.index;
        let step = if index < cycle_steps {
            let k = (index % STEPS_PER_CYCLE) as u8;
            let top = MAX_INTENSITY + 1;
            if k < top {
                Self::ramp(k)
            } else if k == top {
                PulseStep {
                    level: MAX_INTENSITY,
                    hold_ms: PEAK_HOLD_MS,
                }
            } else {
                Self::ramp(2 * top - k)
            }
        } else if index - cycle_steps <= self.rest as u16 {
            Self::ramp((index - cycle_steps) as u8)
        } else {
            return None;
        };
        self.index += 1;
        Some(step)
    }
}
