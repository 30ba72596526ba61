// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # TiltMatrix Firmware
//!
//! This crate contains the hardware-independent core of the TiltMatrix gadget: a 12×8 dot matrix
//! that shows a knob reading, an accelerometer-driven bar or a pixel-ring animation, plus a
//! reusable PID controller.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`units`] | Compile-time checked physical quantities |
//! | [`control`] | Control algorithms (PID) |
//! | [`display`] | Frame packing, font and numeral rendering for the dot matrix |
//! | [`motion`] | Accelerometer filter producing an on-screen position |
//! | [`app`] | Mode state machine tying the above together |
//! | [`io`] | Traits implemented by the board layer |
//! | [`config`] | Tunables and their validation |
//!
//! The board bring-up (STM32F767ZI Nucleo) lives in `src/main.rs` and is only built with the
//! `board` feature.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod control;
pub mod display;
pub mod io;
pub mod motion;
pub mod units;
