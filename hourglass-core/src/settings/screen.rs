//! Settings screen and value transitions

use crate::config::{DrainLadder, DrainUnit};
use crate::display::glyph::{self, Bitmap, MINUTES, SECONDS};
use crate::display::PixelPlane;

/// Frames of a slide transition
pub const SLIDE_FRAMES: u8 = 8;

fn bitmaps(drain_time_s: u32) -> [Bitmap; 2] {
    let (value, unit) = DrainLadder::display(drain_time_s);
    let unit = match unit {
        DrainUnit::Seconds => &SECONDS,
        DrainUnit::Minutes => &MINUTES,
    };
    [glyph::number(value, false), glyph::centered(unit)]
}

/// Settings planes and the value shown
#[derive(Debug, Clone, Default)]
pub struct DrainScreen {
    planes: [PixelPlane; 2],
    shown: Option<[Bitmap; 2]>,
}

impl DrainScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing a drain time
    ///
    /// `upward` picks the slide direction. Planes whose content does not
    /// change are drawn in place.
    pub fn show(&mut self, drain_time_s: u32, upward: bool) -> Slide {
        let new = bitmaps(drain_time_s);
        let old = self.shown.replace(new).unwrap_or(new);
        Slide {
            old,
            new,
            upward,
            frame: 0,
        }
    }

    pub fn planes(&self) -> &[PixelPlane; 2] {
        &self.planes
    }

    pub fn planes_mut(&mut self) -> [&mut PixelPlane; 2] {
        let [a, b] = &mut self.planes;
        [a, b]
    }

    /// Render the next frame of a transition into the screen planes
    ///
    /// Returns `false` once the transition is complete.
    pub fn render(&mut self, slide: &mut Slide) -> bool {
        slide.render(self.planes_mut())
    }
}

/// Transition between two shown values
#[derive(Debug, Clone)]
pub struct Slide {
    old: [Bitmap; 2],
    new: [Bitmap; 2],
    upward: bool,
    frame: u8,
}

impl Slide {
    /// Check if any plane changes during the transition
    pub fn is_animated(&self) -> bool {
        self.old != self.new
    }

    fn render(&mut self, planes: [&mut PixelPlane; 2]) -> bool {
        let frames = if self.is_animated() { SLIDE_FRAMES } else { 1 };
        if self.frame >= frames {
            return false;
        }

        // Leading bitmap sits at (i, -i), trailing one at (i - 7, 7 - i);
        // the new value always ends at the origin and is painted last
        let i = if self.upward {
            (SLIDE_FRAMES - 1 - self.frame) as i8
        } else {
            self.frame as i8
        };
        for (p, plane) in planes.into_iter().enumerate() {
            if self.old[p] == self.new[p] {
                plane.blit(&self.new[p], 0, 0);
                continue;
            }
            let leading = (i, -i);
            let trailing = (i - 7, 7 - i);
            let (old_at, new_at) = if self.upward {
                (trailing, leading)
            } else {
                (leading, trailing)
            };
            plane.blit(&self.old[p], old_at.0, old_at.1);
            plane.blit(&self.new[p], new_at.0, new_at.1);
        }

        self.frame += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(screen: &mut DrainScreen, drain_time_s: u32, upward: bool) -> u8 {
        let mut slide = screen.show(drain_time_s, upward);
        let mut frames = 0;
        while screen.render(&mut slide) {
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_first_show_is_static() {
        let mut screen = DrainScreen::new();
        assert_eq!(run(&mut screen, 30, true), 1);
        assert_eq!(screen.planes()[0].rows(), &glyph::number(30, false));
        assert_eq!(screen.planes()[1].rows(), &glyph::centered(&SECONDS));
    }

    #[test]
    fn test_change_slides_and_lands() {
        for upward in [true, false] {
            let mut screen = DrainScreen::new();
            run(&mut screen, 50, true);
            assert_eq!(run(&mut screen, 120, upward), SLIDE_FRAMES);
            assert_eq!(screen.planes()[0].rows(), &glyph::number(2, false));
            assert_eq!(screen.planes()[1].rows(), &glyph::centered(&MINUTES));
        }
    }

    #[test]
    fn test_unchanged_plane_stays_put() {
        let mut screen = DrainScreen::new();
        run(&mut screen, 120, true);
        for p in screen.planes_mut() {
            p.mark_clean();
        }

        assert_eq!(run(&mut screen, 180, true), SLIDE_FRAMES);
        // Unit plane did not change
        assert!(!screen.planes()[1].has_changes());
        assert!(screen.planes()[0].has_changes());
    }
}
