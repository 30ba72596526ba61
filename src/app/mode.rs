// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use super::animation::Animation;
use crate::units::Time;

/// What drives the display each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mode {
    /// Nothing is drawn.
    Idle,

    /// Knob value as a four-digit numeral.
    KnobDisplay,

    /// Accelerometer-driven bar.
    MotionDisplay {
        /// When telemetry was last logged
        last_log: Time,
    },

    /// Pixel-ring chase.
    Animation(Animation),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::KnobDisplay => "knob",
            Mode::MotionDisplay { .. } => "motion",
            Mode::Animation(_) => "animation",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Idle
    }
}
