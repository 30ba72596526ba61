// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Tracking
//!
//! Turns raw two-axis accelerometer samples into a damped, clamped on-screen position.
//!
//! ## Modules
//!
//! - [`filter`] - Offset removal, smoothing, deadzone and damped double integration.

pub mod filter;

pub use filter::{AxisFilter, MotionFilter};

/// Planar vector used for samples, velocities and positions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
