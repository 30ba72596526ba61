// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Reusable building blocks for closed-loop control.
//!
//! ## Modules
//!
//! - [`pid`] - General-purpose PID controller driven by timestamped measurements.

pub mod pid;

pub use pid::Pid;
