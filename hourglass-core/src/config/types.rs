//! Configuration type definitions
//!
//! These types carry the tunable constants of the device. Storage of the
//! configuration is left to the board crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motion sampling period in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 100;

/// Sand animation period in milliseconds
pub const ANIMATION_PERIOD_MS: u64 = 10;

/// Clock and idle tick period in milliseconds
pub const SECOND_TICK_MS: u64 = 1000;

/// Interval between time-sync requests in milliseconds
pub const TIME_SYNC_INTERVAL_MS: u64 = 86_400_000;

/// Accelerometer mounting and classifier tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionConfig {
    /// Offset added to each raw sensor axis
    pub offsets: [i16; 3],
    /// Axis mapping: |value| is the 1-based sensor axis, sign flips it
    pub transform: [i8; 3],
    /// Share of gravity (per mille) an axis needs to become dominant
    pub enter_permille: u16,
    /// Share of gravity (per mille) below which the dominant axis is released
    pub leave_permille: u16,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            offsets: [-10, 29, 69],
            transform: [2, -1, -3],
            enter_permille: 550,
            leave_permille: 450,
        }
    }
}

impl MotionConfig {
    /// Check that the transform is a signed permutation and the
    /// hysteresis band is ordered
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; 3];
        for t in self.transform {
            let axis = t.unsigned_abs() as usize;
            if !(1..=3).contains(&axis) || seen[axis - 1] {
                return false;
            }
            seen[axis - 1] = true;
        }
        self.leave_permille < self.enter_permille && self.enter_permille <= 1000
    }
}

/// Display idle policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdlePolicy {
    /// Seconds without activity after which the display is dimmed
    pub dim_after_s: u16,
    /// Seconds without activity after which the screen saver starts
    pub saver_after_s: u16,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            dim_after_s: 30,
            saver_after_s: 120,
        }
    }
}

/// Clock mode settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Local time zone offset against UTC in hours
    pub tz_hours: i8,
    /// Hours (start inclusive, end exclusive) during which the clock is lit
    pub bright_hours: (u8, u8),
    /// Seconds the hourglass must lie on its back before the clock shows
    pub show_after_s: u16,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tz_hours: 2,
            bright_hours: (7, 20),
            show_after_s: 8,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourglassConfig {
    /// Resting brightness (0-15)
    pub brightness: u8,
    /// Brightness of the settings mode (0-15)
    pub settings_brightness: u8,
    /// Time for all 64 grains to pass the neck, in seconds
    pub drain_time_s: u32,
    /// Motion tuning
    pub motion: MotionConfig,
    /// Display idle policy
    pub idle: IdlePolicy,
    /// Clock settings
    pub clock: ClockConfig,
}

impl Default for HourglassConfig {
    fn default() -> Self {
        Self {
            brightness: 1,
            settings_brightness: 2,
            drain_time_s: 30,
            motion: MotionConfig::default(),
            idle: IdlePolicy::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl HourglassConfig {
    /// Clock hand-over delay in milliseconds
    pub fn clock_delay_ms(&self) -> u32 {
        self.clock.show_after_s as u32 * 1000
    }

    /// Drain time in milliseconds
    pub fn drain_time_ms(&self) -> u32 {
        self.drain_time_s.saturating_mul(1000)
    }
}
