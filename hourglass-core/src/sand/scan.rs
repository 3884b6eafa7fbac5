//! Randomised scan order over the 8x8 grid
//!
//! Grains are visited line by line. The line axis and the order of lines
//! are drawn once per scan; the direction within a line is drawn again for
//! every line. This keeps the animation free of a directional bias.

use rand::Rng;

use crate::display::{HEIGHT, WIDTH};

/// Lazy scan over all cells, drawing its randomness as it goes
pub struct ScanOrder<'a, R: Rng> {
    rng: &'a mut R,
    columns_outer: bool,
    outer_reversed: bool,
    inner_reversed: bool,
    outer: usize,
    inner: usize,
}

impl<'a, R: Rng> ScanOrder<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        let columns_outer = rng.gen();
        let outer_reversed = rng.gen();
        let inner_reversed = rng.gen();
        Self {
            rng,
            columns_outer,
            outer_reversed,
            inner_reversed,
            outer: 0,
            inner: 0,
        }
    }

    /// Random source shared with the scan
    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }

    fn lengths(&self) -> (usize, usize) {
        if self.columns_outer {
            (WIDTH, HEIGHT)
        } else {
            (HEIGHT, WIDTH)
        }
    }
}

impl<R: Rng> Iterator for ScanOrder<'_, R> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (outer_len, inner_len) = self.lengths();
        if self.outer >= outer_len {
            return None;
        }

        let o = if self.outer_reversed {
            outer_len - 1 - self.outer
        } else {
            self.outer
        };
        let i = if self.inner_reversed {
            inner_len - 1 - self.inner
        } else {
            self.inner
        };

        self.inner += 1;
        if self.inner == inner_len {
            self.inner = 0;
            self.outer += 1;
            if self.outer < outer_len {
                self.inner_reversed = self.rng.gen();
            }
        }

        Some(if self.columns_outer { (o, i) } else { (i, o) })
    }
}
