//! Neck flow control
//!
//! Grains pass the neck one at a time while the hourglass stands on an
//! edge, at a fixed rate so that a full chamber drains in the configured
//! time. Lying on the negative side for a while asks for the clock.

use super::SandField;
use crate::motion::{Category, Orientation, Sign};

/// Neck cell of each chamber
pub const NECK_CELLS: [(usize, usize); 2] = [(7, 0), (0, 7)];

/// Grains in a full chamber
pub const GRAINS: u64 = 64;

/// Result of one neck step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NeckOutcome {
    /// A grain passed the neck
    pub transferred: bool,
    /// The hourglass lay on its back long enough to show the clock
    pub show_clock: bool,
}

/// Neck gate schedule
#[derive(Debug, Clone)]
pub struct NeckFlow {
    per_grain_us: u64,
    clock_delay_us: u64,
    next_due_us: u64,
    clock_due_us: u64,
}

impl NeckFlow {
    /// Start the schedule at `now_ms`
    pub fn new(now_ms: u64, drain_time_ms: u32, clock_delay_ms: u32) -> Self {
        let per_grain_us = drain_time_ms as u64 * 1000 / GRAINS;
        let clock_delay_us = clock_delay_ms as u64 * 1000;
        let now_us = now_ms * 1000;
        Self {
            per_grain_us,
            clock_delay_us,
            next_due_us: now_us + per_grain_us,
            clock_due_us: now_us + clock_delay_us,
        }
    }

    /// Change the time a full chamber takes to drain
    pub fn set_drain_time(&mut self, drain_time_ms: u32) {
        self.per_grain_us = drain_time_ms as u64 * 1000 / GRAINS;
    }

    /// Time a full chamber takes to drain, in milliseconds
    pub fn drain_time_ms(&self) -> u32 {
        (self.per_grain_us * GRAINS / 1000) as u32
    }

    /// Delay between two grains, in microseconds
    pub fn per_grain_us(&self) -> u64 {
        self.per_grain_us
    }

    /// Run the gate for one animation frame
    pub fn advance(
        &mut self,
        now_ms: u64,
        orientation: Orientation,
        chambers: &mut [SandField; 2],
        clock_shown: bool,
    ) -> NeckOutcome {
        let now_us = now_ms * 1000;
        let mut outcome = NeckOutcome::default();

        if orientation.is(Category::Edge) {
            self.clock_due_us = now_us + self.clock_delay_us;
            if now_us >= self.next_due_us {
                self.next_due_us += self.per_grain_us;
                let (upper, lower) = match orientation.sign {
                    Sign::Positive => (1, 0),
                    Sign::Negative => (0, 1),
                };
                let (ux, uy) = NECK_CELLS[upper];
                let (lx, ly) = NECK_CELLS[lower];
                if chambers[upper].get(ux, uy) && !chambers[lower].get(lx, ly) {
                    chambers[upper].set(ux, uy, false);
                    chambers[lower].set(lx, ly, true);
                    outcome.transferred = true;
                }
            }
        } else {
            // Sand is not flowing: restart the grain schedule from now
            self.next_due_us = now_us + self.per_grain_us;
            let on_back = orientation == Orientation::new(Category::Side, Sign::Negative);
            if on_back && !clock_shown {
                outcome.show_clock = now_us > self.clock_due_us;
            } else {
                self.clock_due_us = now_us + self.clock_delay_us;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGE_NEG: Orientation = Orientation::new(Category::Edge, Sign::Negative);
    const EDGE_POS: Orientation = Orientation::new(Category::Edge, Sign::Positive);
    const SIDE_NEG: Orientation = Orientation::new(Category::Side, Sign::Negative);
    const SIDE_POS: Orientation = Orientation::new(Category::Side, Sign::Positive);

    fn chambers() -> [SandField; 2] {
        let mut chambers = [SandField::new(), SandField::new()];
        chambers[0].reset(true);
        chambers
    }

    #[test]
    fn test_grain_per_delay() {
        let mut neck = NeckFlow::new(0, 6400, 8000);
        let mut ch = chambers();

        assert!(!neck.advance(99, EDGE_NEG, &mut ch, false).transferred);
        assert!(neck.advance(100, EDGE_NEG, &mut ch, false).transferred);
        assert!(!ch[0].get(7, 0));
        assert!(ch[1].get(0, 7));

        // Lower neck cell still occupied
        ch[0].set(7, 0, true);
        assert!(!neck.advance(200, EDGE_NEG, &mut ch, false).transferred);
    }

    #[test]
    fn test_edge_sign_picks_upper_chamber() {
        let mut neck = NeckFlow::new(0, 6400, 8000);
        let mut ch = chambers();
        // Chamber 1 is on top but empty
        assert!(!neck.advance(100, EDGE_POS, &mut ch, false).transferred);

        ch[1].set(0, 7, true);
        ch[0].set(7, 0, false);
        assert!(neck.advance(200, EDGE_POS, &mut ch, false).transferred);
        assert!(ch[0].get(7, 0));
    }

    #[test]
    fn test_leaving_edge_defers_schedule() {
        let mut neck = NeckFlow::new(0, 6400, 8000);
        let mut ch = chambers();

        neck.advance(5000, SIDE_POS, &mut ch, false);
        assert!(!neck.advance(5050, EDGE_NEG, &mut ch, false).transferred);
        assert!(neck.advance(5100, EDGE_NEG, &mut ch, false).transferred);
    }

    #[test]
    fn test_fractional_delay_keeps_rate() {
        // 30 s / 64 = 468.75 ms per grain
        let mut neck = NeckFlow::new(0, 30_000, 8000);
        let mut ch = chambers();
        let mut transferred = 0;
        for t in (0..=30_000).step_by(10) {
            if neck.advance(t, EDGE_NEG, &mut ch, false).transferred {
                // Clear the lower neck so every due slot can be used
                ch[1].set(0, 7, false);
                ch[0].set(7, 0, true);
                transferred += 1;
            }
        }
        assert_eq!(transferred, 64);
    }

    #[test]
    fn test_clock_after_delay_on_back() {
        let mut neck = NeckFlow::new(0, 6400, 8000);
        let mut ch = chambers();

        neck.advance(1000, EDGE_NEG, &mut ch, false);
        assert!(!neck.advance(5000, SIDE_NEG, &mut ch, false).show_clock);
        assert!(!neck.advance(9000, SIDE_NEG, &mut ch, false).show_clock);
        assert!(neck.advance(9001, SIDE_NEG, &mut ch, false).show_clock);

        // Already shown: the timer restarts
        assert!(!neck.advance(9100, SIDE_NEG, &mut ch, true).show_clock);
        assert!(!neck.advance(9200, SIDE_NEG, &mut ch, false).show_clock);
    }

    #[test]
    fn test_no_flow_while_on_side() {
        let mut neck = NeckFlow::new(0, 6400, 8000);
        let mut ch = chambers();
        for t in (0..10_000).step_by(10) {
            assert!(!neck.advance(t, SIDE_POS, &mut ch, false).transferred);
        }
        assert_eq!(ch[0].len(), 64);
    }

    #[test]
    fn test_drain_time_roundtrip() {
        let mut neck = NeckFlow::new(0, 30_000, 8000);
        assert_eq!(neck.drain_time_ms(), 30_000);
        neck.set_drain_time(600_000);
        assert_eq!(neck.per_grain_us(), 9_375_000);
    }
}
