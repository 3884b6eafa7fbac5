//! 3x5 font for the clock and settings screens
//!
//! Glyph rows hold three bits, bit 2 being the leftmost column. Bitmaps are
//! full 8x8 frames in row-major order, bit 7 being column 0.

/// Full 8x8 frame, one byte per row
pub type Bitmap = [u8; 8];

/// Top row of rendered text
const TEXT_ROW: usize = 1;

/// A 3 columns by 5 rows glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub [u8; 5]);

impl Glyph {
    /// Paint the glyph into a bitmap with its top-left corner at (x, y)
    ///
    /// Only lit pixels are painted; parts outside the frame are clipped.
    pub fn stamp(&self, bitmap: &mut Bitmap, x: usize, y: usize) {
        if x >= 8 {
            return;
        }
        for (dy, row) in self.0.iter().enumerate() {
            let Some(target) = bitmap.get_mut(y + dy) else {
                break;
            };
            // Glyph row is 3 bits wide: align bit 2 with column x
            let shifted = ((*row as u16) << 5) >> x;
            *target |= shifted as u8;
        }
    }
}

pub const DIGITS: [Glyph; 10] = [
    Glyph([0b111, 0b101, 0b101, 0b101, 0b111]),
    Glyph([0b010, 0b110, 0b010, 0b010, 0b111]),
    Glyph([0b111, 0b001, 0b111, 0b100, 0b111]),
    Glyph([0b111, 0b001, 0b111, 0b001, 0b111]),
    Glyph([0b101, 0b101, 0b111, 0b001, 0b001]),
    Glyph([0b111, 0b100, 0b111, 0b001, 0b111]),
    Glyph([0b111, 0b100, 0b111, 0b101, 0b111]),
    Glyph([0b111, 0b001, 0b001, 0b010, 0b010]),
    Glyph([0b111, 0b101, 0b111, 0b101, 0b111]),
    Glyph([0b111, 0b101, 0b111, 0b001, 0b111]),
];

/// Seconds unit
pub const SECONDS: Glyph = Glyph([0b011, 0b100, 0b010, 0b001, 0b110]);

/// Minutes unit
pub const MINUTES: Glyph = Glyph([0b000, 0b110, 0b111, 0b101, 0b101]);

/// Render a two-digit number
///
/// Values above 99 are taken modulo 100. Without `leading_zero` a single
/// digit is rendered in the right-hand position only.
pub fn number(value: u32, leading_zero: bool) -> Bitmap {
    let value = (value % 100) as usize;
    let mut bitmap = [0; 8];
    if value >= 10 || leading_zero {
        DIGITS[value / 10].stamp(&mut bitmap, 0, TEXT_ROW);
    }
    DIGITS[value % 10].stamp(&mut bitmap, 4, TEXT_ROW);
    bitmap
}

/// Render a single centered glyph
pub fn centered(glyph: &Glyph) -> Bitmap {
    let mut bitmap = [0; 8];
    glyph.stamp(&mut bitmap, 2, TEXT_ROW);
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_position() {
        let mut bitmap = [0; 8];
        DIGITS[1].stamp(&mut bitmap, 0, 0);
        assert_eq!(bitmap[0], 0b0100_0000);
        assert_eq!(bitmap[1], 0b1100_0000);
        assert_eq!(bitmap[4], 0b1110_0000);

        let mut bitmap = [0; 8];
        DIGITS[0].stamp(&mut bitmap, 5, 3);
        assert_eq!(bitmap[3], 0b0000_0111);
        assert_eq!(bitmap[4], 0b0000_0101);
        assert_eq!(bitmap[7], 0b0000_0111);
    }

    #[test]
    fn test_stamp_clips() {
        let mut bitmap = [0; 8];
        DIGITS[8].stamp(&mut bitmap, 6, 5);
        assert_eq!(bitmap[5], 0b0000_0011);
        assert_eq!(bitmap[7], 0b0000_0011);
        assert_eq!(bitmap[0..5], [0; 5]);
    }

    #[test]
    fn test_number_without_leading_zero() {
        let bitmap = number(7, false);
        // Left digit columns stay dark
        assert!(bitmap.iter().all(|row| row & 0b1110_0000 == 0));
        assert_eq!(
            bitmap,
            [
                0,
                0b0000_1110,
                0b0000_0010,
                0b0000_0010,
                0b0000_0100,
                0b0000_0100,
                0,
                0
            ]
        );
        assert_eq!(number(7, true)[TEXT_ROW], 0b1110_1110);
    }

    #[test]
    fn test_number_two_digits() {
        let bitmap = number(42, false);
        assert_eq!(bitmap[TEXT_ROW], 0b1010_1110);
        assert_eq!(bitmap[0], 0);
    }
}
