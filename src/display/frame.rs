// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 96-bit frame buffer for the 12×8 dot matrix.
//!
//! The matrix driver expects three 32-bit words. Cells are numbered row-major
//! (`index = row * 12 + column`) and fill each word from its most significant bit down:
//!
//! ```text
//!  index  0..=31  -> word 0, bit 31..=0
//!  index 32..=63  -> word 1, bit 31..=0
//!  index 64..=95  -> word 2, bit 31..=0
//! ```
//!
//! Any other order shows up on the panel as a mirrored or shifted image.

use core::fmt;

/// Columns on the panel.
pub const WIDTH: usize = 12;
/// Rows on the panel.
pub const HEIGHT: usize = 8;
/// Total number of cells.
pub const CELLS: usize = WIDTH * HEIGHT;
/// Number of 32-bit words in a packed frame.
pub const WORDS: usize = 3;

/// Map a cell index to `(word, bit)`, where `bit` is the shift from the LSB.
///
/// Returns `None` for indices past the last cell.
#[inline]
pub const fn locate(index: usize) -> Option<(usize, u32)> {
    if index >= CELLS {
        return None;
    }
    Some((index / 32, 31 - (index % 32) as u32))
}

/// Row-major cell index for a grid coordinate, if it lies on the panel.
#[inline]
pub const fn index_of(x: usize, y: usize) -> Option<usize> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }
    Some(y * WIDTH + x)
}

/// Packed on/off state of every cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    words: [u32; WORDS],
}

impl Frame {
    /// Every cell off.
    pub const FULL_OFF: Frame = Frame { words: [0; WORDS] };
    /// Every cell on.
    pub const FULL_ON: Frame = Frame {
        words: [u32::MAX; WORDS],
    };

    #[inline]
    pub const fn new() -> Self {
        Self::FULL_OFF
    }

    #[inline]
    pub const fn from_words(words: [u32; WORDS]) -> Self {
        Self { words }
    }

    /// Packed words in transmit order.
    #[inline]
    pub const fn words(&self) -> &[u32; WORDS] {
        &self.words
    }

    /// Write one cell. Returns `false` (and writes nothing) if `index` is off the panel.
    pub fn set(&mut self, index: usize, on: bool) -> bool {
        match locate(index) {
            Some((word, bit)) => {
                if on {
                    self.words[word] |= 1 << bit;
                } else {
                    self.words[word] &= !(1 << bit);
                }
                true
            }
            None => false,
        }
    }

    /// Read one cell. Off-panel indices read as off.
    pub fn get(&self, index: usize) -> bool {
        match locate(index) {
            Some((word, bit)) => (self.words[word] >> bit) & 1 == 1,
            None => false,
        }
    }

    /// Read the cell at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> bool {
        index_of(x, y).map_or(false, |i| self.get(i))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.words = [0; WORDS];
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of lit cells.
    pub fn count_lit(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}

/// One line per row, `#` for lit cells and `.` for dark ones.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                f.write_str(if self.cell(x, y) { "#" } else { "." })?;
            }
            if y + 1 < HEIGHT {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries() {
        assert_eq!(locate(0), Some((0, 31)));
        assert_eq!(locate(31), Some((0, 0)));
        assert_eq!(locate(32), Some((1, 31)));
        assert_eq!(locate(63), Some((1, 0)));
        assert_eq!(locate(64), Some((2, 31)));
        assert_eq!(locate(95), Some((2, 0)));
        assert_eq!(locate(96), None);
    }

    #[test]
    fn set_then_clear_single_cell() {
        let mut frame = Frame::new();
        assert!(frame.set(40, true));
        assert_eq!(frame.words(), &[0, 1 << 23, 0]);
        assert!(frame.get(40));

        assert!(frame.set(40, false));
        assert!(frame.is_blank());
    }

    #[test]
    fn off_panel_is_rejected() {
        let mut frame = Frame::new();
        assert!(!frame.set(CELLS, true));
        assert!(!frame.set(usize::MAX, true));
        assert!(frame.is_blank());
        assert_eq!(index_of(WIDTH, 0), None);
        assert_eq!(index_of(0, HEIGHT), None);
    }

    #[test]
    fn renders_rows() {
        let mut frame = Frame::new();
        frame.set(0, true);
        frame.set(CELLS - 1, true);
        let text = frame.to_string();
        assert!(text.starts_with("#..........."));
        assert!(text.ends_with("...........#"));
        assert_eq!(text.lines().count(), HEIGHT);
    }
}
