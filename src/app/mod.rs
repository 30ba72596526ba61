// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Application Modes
//!
//! ## Modules
//!
//! - [`mode`] - The [`Mode`] enum, including the animation sub-state.
//! - [`animation`] - Pixel-ring chase and its colour wave.
//! - [`machine`] - [`ModeMachine`], the per-tick dispatcher.

pub mod animation;
pub mod machine;
pub mod mode;

pub use animation::{Animation, AnimationStep};
pub use machine::{Devices, ModeMachine};
pub use mode::Mode;
