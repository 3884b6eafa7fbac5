//! Time keeping against the monotonic counter

/// Milliseconds in a day
pub const DAY_MS: i64 = 86_400_000;

const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;

/// UTC time of day delivered by a time source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millis: u16,
}

impl WallTime {
    pub fn ms_of_day(&self) -> i64 {
        self.hour as i64 * HOUR_MS
            + self.minute as i64 * MINUTE_MS
            + self.second as i64 * 1000
            + self.millis as i64
    }
}

/// Local hour and minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

/// Local time derived from the monotonic counter
#[derive(Debug, Clone, Default)]
pub struct WallClock {
    shift_ms: i64,
    synchronized: bool,
}

impl WallClock {
    /// Clock counting from midnight at boot
    pub const fn new() -> Self {
        Self {
            shift_ms: 0,
            synchronized: false,
        }
    }

    /// Check if a correction has been applied since boot
    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    /// Apply a wall-clock correction taken at `now_ms`
    pub fn synchronize(&mut self, now_ms: u64, wall: WallTime, tz_hours: i8) {
        let local = wall.ms_of_day() + tz_hours as i64 * HOUR_MS;
        self.shift_ms = (now_ms as i64 - local).rem_euclid(DAY_MS);
        self.synchronized = true;
    }

    /// Local milliseconds since midnight
    pub fn ms_of_day(&self, now_ms: u64) -> u32 {
        (now_ms as i64 - self.shift_ms).rem_euclid(DAY_MS) as u32
    }

    /// Local hour and minute
    pub fn time_of_day(&self, now_ms: u64) -> TimeOfDay {
        let ms = self.ms_of_day(now_ms) as i64;
        TimeOfDay {
            hour: (ms / HOUR_MS) as u8,
            minute: (ms % HOUR_MS / MINUTE_MS) as u8,
        }
    }
}
