// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Accelerometer dead-reckoning with drift suppression.
//!
//! Per axis, every sample goes through:
//!
//! 1. low-pass offset estimate (`lpf`) and high-pass residue `raw - lpf`
//! 2. exponential smoothing of the residue
//! 3. deadzone
//! 4. g to m/s², integrate to velocity
//! 5. velocity-dependent decay (strong near rest, light while moving)
//! 6. integrate to position, scale and clamp for display
//!
//! A tilted but motionless board only moves `lpf`; the bias never reaches the integrators.

use log::warn;
use micromath::F32Ext;

use super::Vec2;
use crate::config::MotionConfig;
use crate::units::Time;

/// State of one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisFilter {
    /// Slowly varying offset estimate (g)
    pub lpf: f32,
    /// Smoothed dynamic component (g)
    pub smooth: f32,
    /// m/s
    pub velocity: f32,
    /// m
    pub position: f32,
}

impl AxisFilter {
    /// Advance by one sample and return the dynamic acceleration (g) after the deadzone.
    pub fn step(&mut self, raw: f32, dt: f32, cfg: &MotionConfig) -> f32 {
        self.lpf = cfg.lpf_alpha * self.lpf + (1.0 - cfg.lpf_alpha) * raw;
        let hpf = raw - self.lpf;

        self.smooth = cfg.smoothing_alpha * self.smooth + (1.0 - cfg.smoothing_alpha) * hpf;

        let acc = if self.smooth.abs() > cfg.deadzone {
            self.smooth
        } else {
            0.0
        };

        self.velocity += acc * cfg.gravity * dt;

        if self.velocity.abs() < cfg.velocity_threshold {
            self.velocity *= cfg.rest_decay;
        } else {
            self.velocity *= cfg.motion_decay;
        }

        self.position += self.velocity * dt;

        acc
    }

    /// Scaled position, clamped to the display window.
    pub fn display(&self, cfg: &MotionConfig) -> f32 {
        (self.position * cfg.position_scale).clamp(-cfg.display_limit, cfg.display_limit)
    }
}

/// Two-axis motion filter.
#[derive(Clone, Debug)]
pub struct MotionFilter {
    cfg: MotionConfig,
    x: AxisFilter,
    y: AxisFilter,
    /// Last dynamic acceleration after the deadzone (g)
    acc: Vec2,
}

impl MotionFilter {
    pub fn new(cfg: MotionConfig) -> Self {
        Self {
            cfg,
            x: AxisFilter::default(),
            y: AxisFilter::default(),
            acc: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    /// Zero every integrator and estimate.
    pub fn reset(&mut self) {
        self.x = AxisFilter::default();
        self.y = AxisFilter::default();
        self.acc = Vec2::ZERO;
    }

    /// Reset and start the offset estimate at `sample`, so the first update sees no step.
    pub fn seed(&mut self, sample: Vec2) {
        self.reset();
        self.x.lpf = sample.x;
        self.y.lpf = sample.y;
    }

    /// Replace an implausible time step with the configured default.
    pub fn sanitize_dt(&self, dt: f32) -> f32 {
        if dt < self.cfg.dt_min || dt > self.cfg.dt_max || !dt.is_finite() {
            warn!(
                "motion: dt out of range, dt = {}, use default {}",
                dt, self.cfg.dt_default
            );
            return self.cfg.dt_default;
        }
        dt
    }

    /// Feed one raw sample (g) taken `dt` after the previous one.
    ///
    /// Returns the display position, clamped to ±`display_limit` on both axes.
    pub fn update(&mut self, sample: Vec2, dt: Time) -> Vec2 {
        let dt = self.sanitize_dt(dt.value() as f32);

        self.acc = Vec2::new(
            self.x.step(sample.x, dt, &self.cfg),
            self.y.step(sample.y, dt, &self.cfg),
        );

        self.display_position()
    }

    /// Scaled and clamped position.
    pub fn display_position(&self) -> Vec2 {
        Vec2::new(self.x.display(&self.cfg), self.y.display(&self.cfg))
    }

    /// Unscaled position (m).
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }

    /// m/s
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity, self.y.velocity)
    }

    /// Dynamic acceleration of the last update (g), after the deadzone.
    pub fn acceleration(&self) -> Vec2 {
        self.acc
    }

    /// Offset estimate (g).
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.lpf, self.y.lpf)
    }
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Time = Time::new(0.02);

    #[test]
    fn implausible_dt_uses_default() {
        let filter = MotionFilter::default();
        assert_eq!(filter.sanitize_dt(0.5), 0.02);
        assert_eq!(filter.sanitize_dt(0.0), 0.02);
        assert_eq!(filter.sanitize_dt(f32::NAN), 0.02);
        assert_eq!(filter.sanitize_dt(0.05), 0.05);
        // Both bounds are inclusive.
        assert_eq!(filter.sanitize_dt(0.001), 0.001);
        assert_eq!(filter.sanitize_dt(0.1), 0.1);
        assert_eq!(filter.sanitize_dt(0.000_9), 0.02);
        assert_eq!(filter.sanitize_dt(0.100_1), 0.02);
    }

    #[test]
    fn seeded_tilt_does_not_move() {
        let mut filter = MotionFilter::default();
        let tilt = Vec2::new(0.4, -0.7);
        filter.seed(tilt);
        for _ in 0..500 {
            filter.update(tilt, TICK);
        }
        assert_eq!(filter.velocity(), Vec2::ZERO);
        assert_eq!(filter.display_position(), Vec2::ZERO);
    }

    #[test]
    fn small_jitter_stays_in_deadzone() {
        let mut filter = MotionFilter::default();
        for i in 0..200 {
            let n = if i % 2 == 0 { 0.004 } else { -0.004 };
            filter.update(Vec2::new(n, n), TICK);
        }
        assert_eq!(filter.acceleration(), Vec2::ZERO);
        assert_eq!(filter.position(), Vec2::ZERO);
    }

    #[test]
    fn push_moves_in_its_direction() {
        let mut filter = MotionFilter::default();
        for _ in 0..10 {
            filter.update(Vec2::new(0.0, 0.5), TICK);
        }
        let pos = filter.display_position();
        assert_eq!(pos.x, 0.0);
        assert!(pos.y > 0.0);
        assert!(filter.velocity().y > 0.0);
    }

    #[test]
    fn display_is_clamped() {
        let cfg = MotionConfig::default().with_display_limit(1.0);
        let mut filter = MotionFilter::new(cfg);
        for _ in 0..200 {
            filter.update(Vec2::new(-3.0, 3.0), Time::new(0.1));
        }
        assert_eq!(filter.display_position(), Vec2::new(-1.0, 1.0));
    }
}
