//! Sand field: a pixel plane whose lit pixels are grains

use core::ops::{Deref, DerefMut};

use rand::Rng;

use super::direction::fall_direction;
use super::scan::ScanOrder;
use crate::display::{PixelPlane, HEIGHT, WIDTH};
use crate::motion::Tilt;

/// One chamber of the hourglass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandField {
    plane: PixelPlane,
}

impl Deref for SandField {
    type Target = PixelPlane;

    fn deref(&self) -> &PixelPlane {
        &self.plane
    }
}

impl DerefMut for SandField {
    fn deref_mut(&mut self) -> &mut PixelPlane {
        &mut self.plane
    }
}

impl SandField {
    /// Empty chamber
    pub const fn new() -> Self {
        Self {
            plane: PixelPlane::new(),
        }
    }

    /// Number of grains
    pub fn len(&self) -> u32 {
        self.plane.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if every cell holds a grain
    pub fn is_full(&self) -> bool {
        self.len() as usize == WIDTH * HEIGHT
    }

    /// Fill or empty the chamber
    pub fn reset(&mut self, fill: bool) {
        self.plane.fill(fill);
    }

    /// Move every grain one step under gravity
    ///
    /// The next frame is composed in a draft and published at once.
    /// Returns whether any grain moved.
    pub fn iterate<R: Rng>(&mut self, tilt: Tilt, rng: &mut R) -> bool {
        let (ix, iy) = fall_direction(tilt);
        let mut draft = self.plane.make_copy();
        let mut scan = ScanOrder::new(rng);
        let mut animated = false;

        while let Some((x, y)) = scan.next() {
            if !draft.original(x, y) {
                continue;
            }

            let mut nx = (x as i32 + ix).clamp(0, WIDTH as i32 - 1) as usize;
            let mut ny = (y as i32 + iy).clamp(0, HEIGHT as i32 - 1) as usize;
            if (nx, ny) == (x, y) {
                continue;
            }

            if draft.get(nx, ny) {
                let y_free = !draft.get(x, ny);
                let x_free = !draft.get(nx, y);
                match (x_free, y_free) {
                    (true, true) => {
                        if scan.rng().gen() {
                            ny = y;
                        } else {
                            nx = x;
                        }
                    }
                    (false, true) => nx = x,
                    (true, false) => ny = y,
                    (false, false) => continue,
                }
            }

            draft.set(x, y, false);
            draft.set(nx, ny, true);
            animated = true;
        }

        draft.use_copy();
        animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn field_from_bits(bits: u64) -> SandField {
        let mut field = SandField::new();
        for i in 0..64 {
            field.set(i % 8, i / 8, bits & (1 << i) != 0);
        }
        field.mark_clean();
        field
    }

    #[test]
    fn test_single_grain_falls() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut field = SandField::new();
        field.set(3, 3, true);

        assert!(field.iterate(Tilt { x: 0, y: 100 }, &mut rng));
        assert!(field.get(3, 4));
        assert!(!field.get(3, 3));
    }

    #[test]
    fn test_resting_grain_does_not_move() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut field = SandField::new();
        field.set(3, 7, true);
        field.mark_clean();

        assert!(!field.iterate(Tilt { x: 0, y: 100 }, &mut rng));
        assert!(field.get(3, 7));
        assert!(!field.has_changes());
    }

    #[test]
    fn test_blocked_grain_slides_sideways() {
        let mut rng = SmallRng::seed_from_u64(1);
        // Grain at (3, 6) pushed diagonally toward (4, 7); the bottom row is
        // taken from x = 3 on, so it can only move along x
        let mut field = SandField::new();
        field.set(3, 6, true);
        for x in 3..8 {
            field.set(x, 7, true);
        }

        assert!(field.iterate(Tilt { x: 100, y: 100 }, &mut rng));
        assert!(field.get(4, 6));
        assert!(!field.get(3, 6));
        assert_eq!(field.len(), 6);
    }

    #[test]
    fn test_full_field_is_static() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut field = SandField::new();
        field.reset(true);
        assert!(field.is_full());
        assert!(!field.iterate(Tilt { x: 30, y: -90 }, &mut rng));
    }

    #[test]
    fn test_settles_into_corner() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut field = field_from_bits(0x0000_0000_00FF_0000);
        for _ in 0..64 {
            field.iterate(Tilt { x: 256, y: -256 }, &mut rng);
        }
        assert!(!field.iterate(Tilt { x: 256, y: -256 }, &mut rng));
        // Eight grains packed against the (7, 0) corner
        assert!(field.get(7, 0));
        assert_eq!(field.len(), 8);
    }

    proptest! {
        #[test]
        fn test_grains_are_conserved(
            bits in any::<u64>(),
            x in -512i32..512,
            y in -512i32..512,
            seed in any::<u64>(),
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut field = field_from_bits(bits);
            let before = field.len();
            for _ in 0..4 {
                field.iterate(Tilt { x, y }, &mut rng);
                prop_assert_eq!(field.len(), before);
            }
        }
    }
}
