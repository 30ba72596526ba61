// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 3×5 numeral font: `0`–`9`, `A`–`F` and a dash.
//!
//! Each row is three bits wide, most significant bit on the left.

/// Rows per glyph.
pub const ROWS: usize = 5;
/// Columns per glyph.
pub const COLS: usize = 3;

/// Symbol code of the dash glyph (minus sign).
pub const DASH: u8 = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; ROWS],
}

impl Glyph {
    const fn new(rows: [u8; ROWS]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at `row`, `col` (0 = leftmost) is lit.
    #[inline]
    pub const fn pixel(&self, row: usize, col: usize) -> bool {
        (self.rows[row] >> (COLS - 1 - col)) & 0x01 == 1
    }
}

pub const GLYPHS: [Glyph; 17] = [
    Glyph::new([0b111, 0b101, 0b101, 0b101, 0b111]), // 0
    Glyph::new([0b010, 0b110, 0b010, 0b010, 0b111]), // 1
    Glyph::new([0b111, 0b001, 0b111, 0b100, 0b111]), // 2
    Glyph::new([0b111, 0b001, 0b111, 0b001, 0b111]), // 3
    Glyph::new([0b101, 0b101, 0b111, 0b001, 0b001]), // 4
    Glyph::new([0b111, 0b100, 0b111, 0b001, 0b111]), // 5
    Glyph::new([0b111, 0b100, 0b111, 0b101, 0b111]), // 6
    Glyph::new([0b111, 0b001, 0b001, 0b001, 0b001]), // 7
    Glyph::new([0b111, 0b101, 0b111, 0b101, 0b111]), // 8
    Glyph::new([0b111, 0b101, 0b111, 0b001, 0b111]), // 9
    Glyph::new([0b010, 0b101, 0b111, 0b101, 0b101]), // A
    Glyph::new([0b110, 0b101, 0b110, 0b101, 0b110]), // B
    Glyph::new([0b111, 0b100, 0b100, 0b100, 0b111]), // C
    Glyph::new([0b110, 0b001, 0b001, 0b001, 0b110]), // D
    Glyph::new([0b111, 0b100, 0b111, 0b100, 0b111]), // E
    Glyph::new([0b111, 0b100, 0b111, 0b100, 0b100]), // F
    Glyph::new([0b000, 0b000, 0b111, 0b000, 0b000]), // -
];

/// Glyph for a symbol code; codes past the table map to the dash.
#[inline]
pub fn glyph(code: u8) -> &'static Glyph {
    &GLYPHS[code.min(DASH) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_middle_row_only() {
        let dash = glyph(DASH);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(dash.pixel(row, col), row == 2);
            }
        }
    }

    #[test]
    fn out_of_table_codes_clamp_to_dash() {
        assert_eq!(glyph(200), glyph(DASH));
    }

    #[test]
    fn pixel_reads_left_to_right() {
        // "1": .#. / ##. / .#. / .#. / ###
        let one = glyph(1);
        assert!(!one.pixel(0, 0));
        assert!(one.pixel(0, 1));
        assert!(one.pixel(1, 0));
        assert!(!one.pixel(1, 2));
    }
}
