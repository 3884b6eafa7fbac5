//! Display ownership arbitration
//!
//! Exactly one task owns the matrices at a time. Only the owner's frames
//! reach the sink, the owner's remembered brightness is the one applied,
//! and a once-per-second idle counter dims the display and finally hands
//! it to the screen saver.

use super::PixelPlane;
use crate::config::IdlePolicy;
use crate::task::TaskId;
use crate::traits::{DisplaySink, SinkError, MAX_INTENSITY};

/// What the idle counter reached on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleTick {
    /// Nothing happened
    Counting,
    /// Dim threshold reached, intensity forced to 0
    Dimmed,
    /// Screen saver threshold reached
    SaverStarted,
}

/// Display ownership and idle state
pub struct DisplayArbiter<D: DisplaySink> {
    sink: D,
    owner: TaskId,
    brightness: [Option<u8>; TaskId::COUNT],
    idle_s: u16,
    policy: IdlePolicy,
    force_redraw: bool,
    intensity: Option<u8>,
}

impl<D: DisplaySink> DisplayArbiter<D> {
    /// Create an arbiter with an initial owner
    pub fn new(sink: D, owner: TaskId, policy: IdlePolicy) -> Self {
        Self {
            sink,
            owner,
            brightness: [None; TaskId::COUNT],
            idle_s: 0,
            policy,
            force_redraw: true,
            intensity: None,
        }
    }

    /// Current owner
    pub fn owner(&self) -> TaskId {
        self.owner
    }

    /// Seconds since the last keep-alive
    pub fn idle_seconds(&self) -> u16 {
        self.idle_s
    }

    /// Check if the dim threshold has been reached
    pub fn is_dimmed(&self) -> bool {
        self.idle_s >= self.policy.dim_after_s
    }

    /// Check if the screen saver is running
    pub fn saver_active(&self) -> bool {
        self.idle_s >= self.policy.saver_after_s
    }

    /// Brightness remembered for a task (0 until it asks for one)
    pub fn brightness_of(&self, task: TaskId) -> u8 {
        self.brightness[task.index()].unwrap_or(0)
    }

    /// Intensity last written to the sink
    pub fn intensity(&self) -> Option<u8> {
        self.intensity
    }

    /// Underlying sink
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Transmit a task's planes
    ///
    /// Does nothing unless `requester` owns the display and the screen
    /// saver is not running. The first draw after an ownership change is
    /// a full redraw. Returns whether the sink was written.
    pub fn draw(
        &mut self,
        requester: TaskId,
        planes: [&mut PixelPlane; 2],
    ) -> Result<bool, SinkError> {
        if requester != self.owner || self.saver_active() {
            return Ok(false);
        }

        let [first, second] = planes;
        if self.force_redraw {
            first.force_all();
            second.force_all();
            self.force_redraw = false;
        }
        if !first.has_changes() && !second.has_changes() {
            return Ok(false);
        }

        self.sink.show([&*first, &*second])?;
        first.mark_clean();
        second.mark_clean();
        Ok(true)
    }

    /// Remember a task's brightness (0-15)
    ///
    /// Applied at once if the task owns the display; while dimmed the
    /// hardware stays at 0.
    pub fn set_brightness(&mut self, requester: TaskId, level: u8) -> Result<(), SinkError> {
        let level = level.min(MAX_INTENSITY);
        self.brightness[requester.index()] = Some(level);
        if requester == self.owner {
            self.apply(self.effective(level))?;
        }
        Ok(())
    }

    /// Reset the idle counter on behalf of `requester` (the owner if `None`)
    ///
    /// Ignored for non-owners. Restores the owner's brightness and, if the
    /// screen saver was running, schedules a full redraw.
    pub fn keep_alive(&mut self, requester: Option<TaskId>) -> Result<(), SinkError> {
        let requester = requester.unwrap_or(self.owner);
        if requester != self.owner {
            return Ok(());
        }
        if self.saver_active() {
            self.force_redraw = true;
        }
        self.idle_s = 0;
        self.apply(self.brightness_of(requester))
    }

    /// Hand the display to another task
    pub fn set_owner(&mut self, owner: TaskId) -> Result<(), SinkError> {
        self.owner = owner;
        self.force_redraw = true;
        self.apply(self.effective(self.brightness_of(owner)))
    }

    /// Advance the idle counter by one second
    pub fn tick(&mut self) -> Result<IdleTick, SinkError> {
        self.idle_s = self.idle_s.saturating_add(1);
        let dimmed = self.idle_s == self.policy.dim_after_s;
        if dimmed {
            self.apply(0)?;
        }
        Ok(if self.idle_s == self.policy.saver_after_s {
            IdleTick::SaverStarted
        } else if dimmed {
            IdleTick::Dimmed
        } else {
            IdleTick::Counting
        })
    }

    /// Transmit screen saver planes while the saver is running
    pub fn show_saver(&mut self, planes: [&mut PixelPlane; 2]) -> Result<bool, SinkError> {
        if !self.saver_active() {
            return Ok(false);
        }
        let [first, second] = planes;
        self.sink.show([&*first, &*second])?;
        first.mark_clean();
        second.mark_clean();
        Ok(true)
    }

    fn effective(&self, level: u8) -> u8 {
        if self.is_dimmed() {
            0
        } else {
            level
        }
    }

    fn apply(&mut self, level: u8) -> Result<(), SinkError> {
        if self.intensity != Some(level) {
            self.sink.set_intensity(level)?;
            self.intensity = Some(level);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: heapless::Vec<[[u8; 8]; 2], 16>,
        dirty: heapless::Vec<[[u8; 8]; 2], 16>,
        intensity: heapless::Vec<u8, 64>,
        fail: bool,
    }

    impl DisplaySink for Recorder {
        fn show(&mut self, planes: [&PixelPlane; 2]) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Bus);
            }
            self.frames
                .push([*planes[0].rows(), *planes[1].rows()])
                .unwrap();
            self.dirty
                .push([*planes[0].dirty_rows(), *planes[1].dirty_rows()])
                .unwrap();
            Ok(())
        }

        fn set_intensity(&mut self, level: u8) -> Result<(), SinkError> {
            self.intensity.push(level).unwrap();
            Ok(())
        }
    }

    fn arbiter() -> DisplayArbiter<Recorder> {
        DisplayArbiter::new(Recorder::default(), TaskId::Hourglass, IdlePolicy::default())
    }

    fn planes() -> [PixelPlane; 2] {
        let mut planes = [PixelPlane::new(), PixelPlane::new()];
        for p in planes.iter_mut() {
            p.mark_clean();
        }
        planes
    }

    #[test]
    fn test_non_owner_draw_is_noop() {
        let mut arb = arbiter();
        let [mut a, mut b] = planes();
        a.set(1, 1, true);

        assert_eq!(arb.draw(TaskId::Clock, [&mut a, &mut b]), Ok(false));
        assert!(arb.sink().frames.is_empty());
        assert!(a.is_dirty(1, 1));
    }

    #[test]
    fn test_owner_draw_clears_dirty() {
        let mut arb = arbiter();
        let [mut a, mut b] = planes();
        a.set(1, 1, true);

        assert_eq!(arb.draw(TaskId::Hourglass, [&mut a, &mut b]), Ok(true));
        assert_eq!(arb.sink().frames.len(), 1);
        assert!(!a.has_changes());

        // Nothing new to send
        assert_eq!(arb.draw(TaskId::Hourglass, [&mut a, &mut b]), Ok(false));
    }

    #[test]
    fn test_new_owner_first_draw_is_forced() {
        let mut arb = arbiter();
        let [mut a, mut b] = planes();
        arb.draw(TaskId::Hourglass, [&mut a, &mut b]).unwrap();

        arb.set_owner(TaskId::Clock).unwrap();
        let [mut c, mut d] = planes();
        assert_eq!(arb.draw(TaskId::Clock, [&mut c, &mut d]), Ok(true));
        let dirty = arb.sink().dirty.last().unwrap();
        assert_eq!(*dirty, [[0xFF; 8]; 2]);

        // Old owner is locked out
        a.set(0, 0, true);
        assert_eq!(arb.draw(TaskId::Hourglass, [&mut a, &mut b]), Ok(false));
    }

    #[test]
    fn test_brightness_applied_for_owner_only() {
        let mut arb = arbiter();
        arb.set_brightness(TaskId::Clock, 9).unwrap();
        assert_eq!(arb.intensity(), None);

        arb.set_brightness(TaskId::Hourglass, 20).unwrap();
        assert_eq!(arb.intensity(), Some(MAX_INTENSITY));

        arb.set_owner(TaskId::Clock).unwrap();
        assert_eq!(arb.intensity(), Some(9));
    }

    #[test]
    fn test_intensity_written_on_change_only() {
        let mut arb = arbiter();
        arb.set_brightness(TaskId::Hourglass, 3).unwrap();
        arb.set_brightness(TaskId::Hourglass, 3).unwrap();
        arb.keep_alive(None).unwrap();
        assert_eq!(arb.sink().intensity, [3]);
    }

    #[test]
    fn test_dim_and_keep_alive() {
        let mut arb = arbiter();
        arb.set_brightness(TaskId::Hourglass, 5).unwrap();

        for _ in 0..29 {
            assert_eq!(arb.tick(), Ok(IdleTick::Counting));
        }
        assert_eq!(arb.tick(), Ok(IdleTick::Dimmed));
        assert_eq!(arb.intensity(), Some(0));

        // Owner asking for more light while dimmed stays dark
        arb.set_brightness(TaskId::Hourglass, 7).unwrap();
        assert_eq!(arb.intensity(), Some(0));

        // Non-owner keep-alive is ignored
        arb.keep_alive(Some(TaskId::Clock)).unwrap();
        assert!(arb.is_dimmed());

        arb.keep_alive(Some(TaskId::Hourglass)).unwrap();
        assert_eq!(arb.idle_seconds(), 0);
        assert_eq!(arb.intensity(), Some(7));
    }

    #[test]
    fn test_saver_blocks_owner_and_forces_redraw_after() {
        let mut arb = arbiter();
        let [mut a, mut b] = planes();
        arb.draw(TaskId::Hourglass, [&mut a, &mut b]).unwrap();

        let mut last = IdleTick::Counting;
        for _ in 0..120 {
            last = arb.tick().unwrap();
        }
        assert_eq!(last, IdleTick::SaverStarted);
        assert!(arb.saver_active());

        a.set(2, 2, true);
        assert_eq!(arb.draw(TaskId::Hourglass, [&mut a, &mut b]), Ok(false));

        let [mut s0, mut s1] = planes();
        s0.set(3, 3, true);
        assert_eq!(arb.show_saver([&mut s0, &mut s1]), Ok(true));

        arb.keep_alive(None).unwrap();
        assert!(!arb.saver_active());
        assert_eq!(arb.show_saver([&mut s0, &mut s1]), Ok(false));

        assert_eq!(arb.draw(TaskId::Hourglass, [&mut a, &mut b]), Ok(true));
        assert_eq!(*arb.sink().dirty.last().unwrap(), [[0xFF; 8]; 2]);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut arb = DisplayArbiter::new(
            Recorder {
                fail: true,
                ..Recorder::default()
            },
            TaskId::Hourglass,
            IdlePolicy::default(),
        );
        let [mut a, mut b] = planes();
        a.set(0, 0, true);
        assert_eq!(
            arb.draw(TaskId::Hourglass, [&mut a, &mut b]),
            Err(SinkError::Bus)
        );
        assert!(a.has_changes());
    }
}
