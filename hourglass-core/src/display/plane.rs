//! Dirty-tracked, double-buffered 8x8 pixel plane
//!
//! Rows are stored one byte each, bit 7 being column 0. The dirty plane
//! marks pixels that differ from what was last transmitted: writing a new
//! value toggles the pixel's dirty bit, writing the same value leaves it
//! alone. After [`PixelPlane::force_all`] every pixel stays dirty until
//! the next transmission.

use super::glyph::Bitmap;

/// Matrix width in pixels
pub const WIDTH: usize = 8;

/// Matrix height in pixels
pub const HEIGHT: usize = 8;

#[inline]
const fn mask(x: usize) -> u8 {
    0x80 >> x
}

/// One 8x8 matrix worth of pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPlane {
    bufs: [[u8; HEIGHT]; 2],
    active: usize,
    dirty: [u8; HEIGHT],
    forced: bool,
}

impl Default for PixelPlane {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelPlane {
    /// Blank plane, fully dirty
    pub const fn new() -> Self {
        Self {
            bufs: [[0; HEIGHT]; 2],
            active: 0,
            dirty: [0xFF; HEIGHT],
            forced: true,
        }
    }

    /// Pixel value; out of range coordinates read as dark
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.bufs[self.active][y] & mask(x) != 0
    }

    /// Set a pixel; out of range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT || self.get(x, y) == on {
            return;
        }
        self.bufs[self.active][y] ^= mask(x);
        if !self.forced {
            self.dirty[y] ^= mask(x);
        }
    }

    /// Check whether a pixel needs to be transmitted
    pub fn is_dirty(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.dirty[y] & mask(x) != 0
    }

    /// Check whether any pixel needs to be transmitted
    pub fn has_changes(&self) -> bool {
        self.dirty.iter().any(|row| *row != 0)
    }

    /// Check whether the whole plane is due for retransmission
    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// Mark every pixel dirty until the next transmission
    pub fn force_all(&mut self) {
        self.dirty = [0xFF; HEIGHT];
        self.forced = true;
    }

    /// Clear the dirty plane after a transmission
    pub fn mark_clean(&mut self) {
        self.dirty = [0; HEIGHT];
        self.forced = false;
    }

    /// Light or clear every pixel and force a full redraw
    pub fn fill(&mut self, on: bool) {
        self.bufs[self.active] = [if on { 0xFF } else { 0 }; HEIGHT];
        self.force_all();
    }

    /// Pixel rows of the active buffer
    pub fn rows(&self) -> &[u8; HEIGHT] {
        &self.bufs[self.active]
    }

    /// Dirty rows
    pub fn dirty_rows(&self) -> &[u8; HEIGHT] {
        &self.dirty
    }

    /// Number of lit pixels
    pub fn count(&self) -> u32 {
        self.rows().iter().map(|row| row.count_ones()).sum()
    }

    /// Paint a bitmap with its origin at (dx, dy)
    ///
    /// Pixels covered by the shifted bitmap take its value, lit or dark;
    /// the rest of the plane is left untouched.
    pub fn blit(&mut self, bitmap: &Bitmap, dx: i8, dy: i8) {
        for y in 0..HEIGHT {
            let sy = y as i16 - dy as i16;
            if !(0..HEIGHT as i16).contains(&sy) {
                continue;
            }
            for x in 0..WIDTH {
                let sx = x as i16 - dx as i16;
                if !(0..WIDTH as i16).contains(&sx) {
                    continue;
                }
                let on = bitmap[sy as usize] & mask(sx as usize) != 0;
                self.set(x, y, on);
            }
        }
    }

    /// Start composing the next frame in the inactive buffer
    ///
    /// The draft starts as a copy of the current frame. Nothing changes on
    /// the plane until [`Draft::use_copy`] is called.
    pub fn make_copy(&mut self) -> Draft<'_> {
        let next = self.active ^ 1;
        self.bufs[next] = self.bufs[self.active];
        Draft { plane: self }
    }
}

/// Frame under composition, see [`PixelPlane::make_copy`]
#[must_use = "a draft has no effect until `use_copy` is called"]
pub struct Draft<'a> {
    plane: &'a mut PixelPlane,
}

impl Draft<'_> {
    fn next(&self) -> usize {
        self.plane.active ^ 1
    }

    /// Pixel value of the current (published) frame
    pub fn original(&self, x: usize, y: usize) -> bool {
        self.plane.get(x, y)
    }

    /// Pixel value of the draft
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.plane.bufs[self.next()][y] & mask(x) != 0
    }

    /// Set a pixel of the draft
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let next = self.next();
        if on {
            self.plane.bufs[next][y] |= mask(x);
        } else {
            self.plane.bufs[next][y] &= !mask(x);
        }
    }

    /// Publish the draft as the current frame
    pub fn use_copy(self) {
        let plane = self.plane;
        let (old, new) = (plane.active, plane.active ^ 1);
        if !plane.forced {
            for y in 0..HEIGHT {
                plane.dirty[y] ^= plane.bufs[old][y] ^ plane.bufs[new][y];
            }
        }
        plane.active = new;
    }
}
