// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Dot-Matrix Display
//!
//! Everything needed to turn numbers and points into frames for the 12×8 panel.
//!
//! ## Modules
//!
//! - [`frame`] - Bit-exact 96-bit frame packing.
//! - [`font`] - 3×5 glyphs for hex digits and the minus sign.
//! - [`numeral`] - Signed integer to four-symbol conversion in bases 2–16.
//! - [`matrix`] - [`LedMatrix`], the buffer plus the driver it is sent to.

pub mod font;
pub mod frame;
pub mod matrix;
pub mod numeral;

pub use frame::Frame;
pub use matrix::LedMatrix;
