//! Hourglass: two sand chambers joined by the neck

use rand::Rng;

use super::neck::{NeckFlow, GRAINS};
use super::pulse::PulseCounter;
use super::SandField;
use crate::config::HourglassConfig;
use crate::display::PixelPlane;
use crate::motion::MotionSample;

/// Result of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameOutcome {
    /// Some grain moved inside a chamber
    pub animated: bool,
    /// A grain passed the neck
    pub transferred: bool,
    /// Display should be handed to the clock
    pub show_clock: bool,
    /// A brightness pulse should start
    pub start_pulse: bool,
}

/// Sand state of the whole hourglass
#[derive(Debug, Clone)]
pub struct Hourglass {
    chambers: [SandField; 2],
    neck: NeckFlow,
    pulses: PulseCounter,
}

impl Hourglass {
    /// Hourglass with all sand in chamber 0
    pub fn new(now_ms: u64, config: &HourglassConfig) -> Self {
        let mut hourglass = Self {
            chambers: [SandField::new(), SandField::new()],
            neck: NeckFlow::new(now_ms, config.drain_time_ms(), config.clock_delay_ms()),
            pulses: PulseCounter::new(),
        };
        hourglass.reset();
        hourglass
    }

    /// Put all sand back into chamber 0
    pub fn reset(&mut self) {
        self.chambers[0].reset(true);
        self.chambers[1].reset(false);
    }

    /// Start over while sand is still running
    ///
    /// Does nothing once chamber 0 is completely full or empty. Returns
    /// whether the sand was put back.
    pub fn restart(&mut self) -> bool {
        let upper = &self.chambers[0];
        if upper.is_empty() || upper.is_full() {
            return false;
        }
        self.reset();
        true
    }

    pub fn chambers(&self) -> &[SandField; 2] {
        &self.chambers
    }

    /// Chambers as display planes
    pub fn planes_mut(&mut self) -> [&mut PixelPlane; 2] {
        let [a, b] = &mut self.chambers;
        [&mut **a, &mut **b]
    }

    pub fn set_drain_time(&mut self, drain_time_ms: u32) {
        self.neck.set_drain_time(drain_time_ms);
    }

    pub fn drain_time_ms(&self) -> u32 {
        self.neck.drain_time_ms()
    }

    /// Mark the running pulse as done; `true` if another one is queued
    pub fn finish_pulse(&mut self) -> bool {
        self.pulses.finish()
    }

    /// Run one animation frame
    pub fn frame<R: Rng>(
        &mut self,
        now_ms: u64,
        sample: &MotionSample,
        clock_shown: bool,
        rng: &mut R,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        for chamber in self.chambers.iter_mut() {
            outcome.animated |= chamber.iterate(sample.tilt, rng);
        }

        // Chamber 1 settling empty or full means the time ran out
        outcome.start_pulse = self.pulses.observe(self.chambers[1].len(), GRAINS as u32);

        let neck = self
            .neck
            .advance(now_ms, sample.orientation, &mut self.chambers, clock_shown);
        outcome.transferred = neck.transferred;
        outcome.show_clock = neck.show_clock;
        outcome
    }
}
