// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interfaces to the hardware around the core.
//!
//! The board layer implements these on real peripherals; tests implement them on plain structs.
//! Implementations absorb their own bus errors, so every method here is infallible.

use crate::motion::Vec2;
use crate::units::Time;

/// Monotonic time source.
pub trait Clock {
    fn now(&mut self) -> Time;
}

/// Sink for packed 12×8 frames.
pub trait MatrixDriver {
    /// One-time start-up hook.
    fn begin(&mut self) {}

    /// Transmit a frame. Words are in the order documented in [`crate::display::frame`].
    fn load_frame(&mut self, words: &[u32; 3]);
}

/// Two-axis accelerometer, polled once per tick.
pub trait Accelerometer {
    /// Latest `(x, y)` acceleration in g.
    fn sample(&mut self) -> Vec2;
}

/// The three front-panel buttons.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    A,
    B,
    C,
}

pub trait Buttons {
    /// Latch the current button state. Called once per tick before any `is_pressed`.
    fn update(&mut self) {}

    fn is_pressed(&self, button: Button) -> bool;
}

/// Rotary encoder with a push switch.
pub trait Knob {
    fn get(&mut self) -> i32;
    fn set(&mut self, value: i32);
    fn is_pressed(&mut self) -> bool;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ring of individually addressable indicator lights.
///
/// `set` and `clear` only stage changes; nothing is visible until `show`.
pub trait Pixels {
    /// `brightness` is a percentage, 0..=100.
    fn set(&mut self, index: usize, color: Color, brightness: u8);
    fn clear(&mut self);
    fn show(&mut self);
}
