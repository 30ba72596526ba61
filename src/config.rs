// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Runtime tunables for the motion filter and the mode state machine.
//!
//! Both structs come with defaults matching the shipped firmware and `with_*` builders for tuning.
//! [`MotionConfig::validate`] and [`AppConfig::validate`] reject combinations that would make the
//! filter unstable or the display unreadable.

use thiserror::Error;

use crate::display::numeral;
use crate::units::Time;

/// Errors from tunable validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor `{0}` must lie in [0, 1]")]
    InvalidAlpha(&'static str),
    #[error("dt window must satisfy 0 < min <= default <= max")]
    InvalidDtWindow,
    #[error("`{0}` must be positive")]
    NonPositive(&'static str),
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),
    #[error("numeral base {0} outside [2, 16]")]
    InvalidBase(i32),
}

/// Motion filter parameters. Raw samples are in g.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionConfig {
    /// Low-pass factor for the sensor offset estimate (close to 1)
    pub lpf_alpha: f32,
    /// Smoothing factor for the dynamic component
    pub smoothing_alpha: f32,
    /// Dynamic acceleration below this magnitude (g) counts as zero
    pub deadzone: f32,
    /// Speeds below this (m/s) decay with `rest_decay`
    pub velocity_threshold: f32,
    pub rest_decay: f32,
    pub motion_decay: f32,
    /// m/s² per g
    pub gravity: f32,
    /// Display units per metre of travel
    pub position_scale: f32,
    /// Display positions are clamped to ±`display_limit`
    pub display_limit: f32,

    /// Accepted time step window (s)
    pub dt_min: f32,
    pub dt_max: f32,
    /// Time step used when the measured one is implausible (s)
    pub dt_default: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            lpf_alpha: 0.98,
            smoothing_alpha: 0.3,
            deadzone: 0.01,
            velocity_threshold: 0.001,
            rest_decay: 0.9,
            motion_decay: 0.99,
            gravity: 9.81,
            position_scale: 5.0,
            display_limit: 50.0,

            dt_min: 0.001,
            dt_max: 0.1,
            dt_default: 0.02,
        }
    }
}

impl MotionConfig {
    pub fn with_filter_alphas(mut self, lpf_alpha: f32, smoothing_alpha: f32) -> Self {
        self.lpf_alpha = lpf_alpha;
        self.smoothing_alpha = smoothing_alpha;
        self
    }

    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// Set the velocity threshold and the decay factors applied below / above it.
    pub fn with_damping(mut self, threshold: f32, rest_decay: f32, motion_decay: f32) -> Self {
        self.velocity_threshold = threshold;
        self.rest_decay = rest_decay;
        self.motion_decay = motion_decay;
        self
    }

    pub fn with_position_scale(mut self, scale: f32) -> Self {
        self.position_scale = scale;
        self
    }

    pub fn with_display_limit(mut self, limit: f32) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn with_dt_window(mut self, min: f32, max: f32, default: f32) -> Self {
        self.dt_min = min;
        self.dt_max = max;
        self.dt_default = default;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        for (name, alpha) in [
            ("lpf_alpha", self.lpf_alpha),
            ("smoothing_alpha", self.smoothing_alpha),
            ("rest_decay", self.rest_decay),
            ("motion_decay", self.motion_decay),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::InvalidAlpha(name));
            }
        }

        if !(self.dt_min > 0.0 && self.dt_min <= self.dt_default && self.dt_default <= self.dt_max)
        {
            return Err(ConfigError::InvalidDtWindow);
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("position_scale", self.position_scale),
            ("display_limit", self.display_limit),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }

        if self.deadzone < 0.0 || self.velocity_threshold < 0.0 {
            return Err(ConfigError::InvalidRange("thresholds must not be negative"));
        }

        Ok(self)
    }
}

/// Mode state machine parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Knob values are clamped into `[knob_min, knob_max]` before display
    pub knob_min: i32,
    pub knob_max: i32,
    /// Numeral base for the knob readout
    pub base: i32,

    /// Time between animation steps
    pub animation_period: Time,
    /// Upper bound for the knob-controlled pixel brightness
    pub brightness_max: u8,

    /// Minimum spacing of motion telemetry log lines
    pub motion_log_period: Time,

    /// Boot indicator
    pub flash_times: u8,
    pub flash_period_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knob_min: -999,
            knob_max: 9999,
            base: 10,

            animation_period: Time::from_millis(200),
            brightness_max: 100,

            motion_log_period: Time::from_millis(200),

            flash_times: 3,
            flash_period_ms: 100,
        }
    }
}

impl AppConfig {
    /// Set the knob range and the base it is printed in.
    pub fn with_knob_range(mut self, min: i32, max: i32, base: i32) -> Self {
        self.knob_min = min;
        self.knob_max = max;
        self.base = base;
        self
    }

    pub fn with_animation_period(mut self, period: Time) -> Self {
        self.animation_period = period;
        self
    }

    pub fn with_brightness_max(mut self, max: u8) -> Self {
        self.brightness_max = max;
        self
    }

    pub fn with_flash(mut self, times: u8, period_ms: u32) -> Self {
        self.flash_times = times;
        self.flash_period_ms = period_ms;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(numeral::MIN_BASE..=numeral::MAX_BASE).contains(&self.base) {
            return Err(ConfigError::InvalidBase(self.base));
        }
        if self.knob_min > self.knob_max {
            return Err(ConfigError::InvalidRange("knob_min > knob_max"));
        }
        let (lo, hi) = numeral::range(self.base);
        if self.knob_min < lo || self.knob_max > hi {
            return Err(ConfigError::InvalidRange(
                "knob range does not fit on four digits",
            ));
        }
        if self.animation_period.value() <= 0.0 {
            return Err(ConfigError::NonPositive("animation_period"));
        }
        if self.motion_log_period.value() <= 0.0 {
            return Err(ConfigError::NonPositive("motion_log_period"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MotionConfig::default().validate().is_ok());
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unstable_filter() {
        let cfg = MotionConfig::default().with_filter_alphas(1.2, 0.3);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidAlpha("lpf_alpha")));

        let cfg = MotionConfig::default().with_dt_window(0.1, 0.001, 0.02);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidDtWindow));

        let cfg = MotionConfig::default().with_display_limit(0.0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive("display_limit"))
        );
    }

    #[test]
    fn knob_range_must_fit_display() {
        let cfg = AppConfig::default().with_knob_range(-999, 9999, 17);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBase(17)));

        let cfg = AppConfig::default().with_knob_range(-1000, 9999, 10);
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidRange(_))));

        let cfg = AppConfig::default().with_knob_range(-4095, 65535, 16);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let motion = MotionConfig::default()
            .with_deadzone(0.05)
            .with_damping(0.01, 0.8, 0.95)
            .with_position_scale(2.0)
            .validate()
            .unwrap();
        assert_eq!(motion.deadzone, 0.05);
        assert_eq!(
            (motion.velocity_threshold, motion.rest_decay, motion.motion_decay),
            (0.01, 0.8, 0.95)
        );
        assert_eq!(motion.position_scale, 2.0);

        let cfg = MotionConfig::default().with_damping(0.001, 1.5, 0.99);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidAlpha("rest_decay")));

        let app = AppConfig::default()
            .with_animation_period(Time::from_millis(50))
            .with_brightness_max(40)
            .with_flash(5, 60)
            .validate()
            .unwrap();
        assert_eq!(app.animation_period, Time::from_millis(50));
        assert_eq!(app.brightness_max, 40);
        assert_eq!((app.flash_times, app.flash_period_ms), (5, 60));

        let cfg = AppConfig::default().with_animation_period(Time::new(0.0));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive("animation_period"))
        );
    }
}
