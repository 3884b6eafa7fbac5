//! Screen saver: a single random pixel flickering across both matrices

use rand::Rng;

use super::plane::{PixelPlane, HEIGHT, WIDTH};

/// Shortest time a pixel stays lit, in milliseconds
pub const SAVER_MIN_HOLD_MS: u64 = 200;

/// Random extra hold time range, in milliseconds
pub const SAVER_JITTER_MS: u64 = 128;

/// Screen saver planes and the currently lit pixel
#[derive(Debug, Clone, Default)]
pub struct ScreenSaver {
    planes: [PixelPlane; 2],
    lit: Option<(usize, usize, usize)>,
}

impl ScreenSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank both planes
    pub fn reset(&mut self) {
        for plane in self.planes.iter_mut() {
            plane.fill(false);
        }
        self.lit = None;
    }

    /// Light one random pixel and return how long to hold it
    pub fn light<R: Rng>(&mut self, rng: &mut R) -> u64 {
        let plane = rng.gen_range(0..2);
        let x = rng.gen_range(0..WIDTH);
        let y = rng.gen_range(0..HEIGHT);
        self.planes[plane].set(x, y, true);
        self.lit = Some((plane, x, y));
        SAVER_MIN_HOLD_MS + rng.gen_range(0..SAVER_JITTER_MS)
    }

    /// Clear the pixel lit by the last [`ScreenSaver::light`]
    pub fn clear_lit(&mut self) {
        if let Some((plane, x, y)) = self.lit.take() {
            self.planes[plane].set(x, y, false);
        }
    }

    pub fn planes(&self) -> &[PixelPlane; 2] {
        &self.planes
    }

    pub fn planes_mut(&mut self) -> [&mut PixelPlane; 2] {
        let [a, b] = &mut self.planes;
        [a, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_pixel_cycle() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut saver = ScreenSaver::new();
        saver.reset();

        for _ in 0..50 {
            let hold = saver.light(&mut rng);
            assert!((SAVER_MIN_HOLD_MS..SAVER_MIN_HOLD_MS + SAVER_JITTER_MS).contains(&hold));
            let lit: u32 = saver.planes().iter().map(|p| p.count()).sum();
            assert_eq!(lit, 1);

            saver.clear_lit();
            let lit: u32 = saver.planes().iter().map(|p| p.count()).sum();
            assert_eq!(lit, 0);
        }
    }

    #[test]
    fn test_reset_forces_redraw() {
        let mut saver = ScreenSaver::new();
        for p in saver.planes_mut() {
            p.mark_clean();
        }
        saver.reset();
        assert!(saver.planes().iter().all(|p| p.is_forced()));
    }
}
