//! Drain time ladder
//!
//! The settings mode steps the hourglass drain time along a fixed list of
//! values instead of free entry.

/// Selectable drain times in seconds
pub const DRAIN_LADDER_S: [u32; 25] = [
    10, 20, 30, 40, 50, 60, 120, 180, 240, 300, 360, 420, 480, 540, 600, 900, 1200, 1500, 1800,
    2100, 2400, 2700, 3000, 3300, 3600,
];

/// Unit shown next to a drain time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrainUnit {
    Seconds,
    Minutes,
}

/// Stepping over [`DRAIN_LADDER_S`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainLadder;

impl DrainLadder {
    /// Index of the ladder entry closest to `seconds`
    pub fn position(seconds: u32) -> usize {
        DRAIN_LADDER_S
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.abs_diff(seconds))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Next longer drain time, saturating at the top
    pub fn step_up(seconds: u32) -> u32 {
        let i = Self::position(seconds);
        DRAIN_LADDER_S[(i + 1).min(DRAIN_LADDER_S.len() - 1)]
    }

    /// Next shorter drain time, saturating at the bottom
    pub fn step_down(seconds: u32) -> u32 {
        let i = Self::position(seconds);
        DRAIN_LADDER_S[i.saturating_sub(1)]
    }

    /// Split a drain time into displayed value and unit
    pub fn display(seconds: u32) -> (u32, DrainUnit) {
        if seconds < 60 {
            (seconds, DrainUnit::Seconds)
        } else {
            (seconds / 60, DrainUnit::Minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_up_and_down() {
        assert_eq!(DrainLadder::step_up(30), 40);
        assert_eq!(DrainLadder::step_down(30), 20);
        assert_eq!(DrainLadder::step_up(60), 120);
        assert_eq!(DrainLadder::step_down(900), 600);
    }

    #[test]
    fn test_saturates_at_ends() {
        assert_eq!(DrainLadder::step_down(10), 10);
        assert_eq!(DrainLadder::step_up(3600), 3600);
    }

    #[test]
    fn test_off_ladder_snaps_to_nearest() {
        assert_eq!(DrainLadder::position(33), 2);
        assert_eq!(DrainLadder::step_up(33), 40);
        assert_eq!(DrainLadder::step_up(100_000), 3600);
    }

    #[test]
    fn test_display_units() {
        assert_eq!(DrainLadder::display(50), (50, DrainUnit::Seconds));
        assert_eq!(DrainLadder::display(60), (1, DrainUnit::Minutes));
        assert_eq!(DrainLadder::display(3600), (60, DrainUnit::Minutes));
    }
}
