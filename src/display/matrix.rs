// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dot-matrix front-end: owns the frame buffer and the driver it is sent to.
//!
//! Drawing calls (`set_bit`, `draw_point`, `generate_frame`, `clean`) only touch the buffer.
//! `show`, `fill`, `clear` and `flash` talk to the driver.
//!
//! ```ignore
//! matrix.print(-42, 10); // "-042"
//!
//! matrix.clean();
//! matrix.draw_point(3.0, 7.0);
//! matrix.show();
//! ```

use embedded_hal::delay::DelayNs;
use log::{trace, warn};
use micromath::F32Ext;

use super::font::{self, COLS, ROWS};
use super::frame::{self, Frame, HEIGHT, WIDTH};
use super::numeral;
use crate::io::MatrixDriver;

/// Left column of each of the four symbol positions.
pub const DIGIT_COLUMNS: [usize; numeral::DIGITS] = [0, 3, 6, 9];

pub struct LedMatrix<D: MatrixDriver> {
    frame: Frame,
    driver: D,
}

impl<D: MatrixDriver> LedMatrix<D> {
    /// Wrap a driver, starting from a blank buffer.
    pub fn new(driver: D) -> Self {
        Self {
            frame: Frame::new(),
            driver,
        }
    }

    /// Run the driver's start-up hook.
    pub fn begin(&mut self) {
        self.driver.begin();
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Write one cell of the buffer. Indices past 95 are ignored and reported as `false`.
    pub fn set_bit(&mut self, index: usize, on: bool) -> bool {
        let written = self.frame.set(index, on);
        if !written {
            warn!("matrix: cell index {} off panel", index);
        }
        written
    }

    /// Light the cell nearest to column `x`, row `y`.
    ///
    /// Coordinates that round to a cell off the panel (or are not finite) are dropped and reported
    /// as `false`.
    pub fn draw_point(&mut self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            warn!("matrix: non-finite point ({}, {})", x, y);
            return false;
        }

        let (cx, cy) = (x.round(), y.round());
        if cx < 0.0 || cy < 0.0 || cx >= WIDTH as f32 || cy >= HEIGHT as f32 {
            trace!("matrix: point ({}, {}) off panel", x, y);
            return false;
        }

        match frame::index_of(cx as usize, cy as usize) {
            Some(index) => self.frame.set(index, true),
            None => false,
        }
    }

    /// Render four symbol codes (0–15 hex digits, 16 dash) into rows 0–4.
    ///
    /// Codes above 16 are clamped to the dash. Only the glyph cells are written; rows 5–7 keep
    /// whatever the buffer held.
    pub fn generate_frame(&mut self, a: u8, b: u8, c: u8, d: u8) {
        for (&code, &left) in [a, b, c, d].iter().zip(DIGIT_COLUMNS.iter()) {
            let glyph = font::glyph(code);
            for row in 0..ROWS {
                for col in 0..COLS {
                    self.frame
                        .set(row * WIDTH + left + col, glyph.pixel(row, col));
                }
            }
        }
    }

    /// Clear the buffer, render four symbol codes and show them.
    pub fn print_digits(&mut self, d0: u8, d1: u8, d2: u8, d3: u8) {
        self.clean();
        self.generate_frame(d0, d1, d2, d3);
        self.show();
    }

    /// Show a signed integer in `base`.
    ///
    /// See [`numeral::encode`] for the clamping rules.
    pub fn print(&mut self, value: i32, base: i32) {
        let [d0, d1, d2, d3] = numeral::encode(value, base);
        self.print_digits(d0, d1, d2, d3);
    }

    /// Send the buffer to the driver.
    pub fn show(&mut self) {
        self.driver.load_frame(self.frame.words());
    }

    /// Blank the buffer without touching the driver.
    pub fn clean(&mut self) {
        self.frame.clear();
    }

    /// Switch every cell off. The buffer is left as is.
    pub fn clear(&mut self) {
        self.driver.load_frame(Frame::FULL_OFF.words());
    }

    /// Switch every cell on. The buffer is left as is.
    pub fn fill(&mut self) {
        self.driver.load_frame(Frame::FULL_ON.words());
    }

    /// Blink the whole panel `times` times; each on/off half lasts `period_ms / 2`.
    ///
    /// Blocks for `times * period_ms`. Only meant for the boot indicator.
    pub fn flash<DELAY: DelayNs>(&mut self, delay: &mut DELAY, times: u8, period_ms: u32) {
        let half = period_ms >> 1;
        for _ in 0..times {
            self.fill();
            delay.delay_ms(half);
            self.clear();
            delay.delay_ms(half);
        }
    }
}
