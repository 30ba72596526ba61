// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Generic PID controller for closed-loop control.
//!
//! Works in `no_std` and does not allocate memory. Timestamps are absolute [`Time`] values; the
//! controller derives `dt` from consecutive calls itself, so callers only feed it
//! `(measurement, timestamp)` pairs.
//!
//! No clamping or anti-windup is applied. Actuator-side limits are the caller's job.

use log::warn;

use crate::units::Time;

/// PID controller with tunable gains and a stored setpoint.
#[derive(Clone, Debug)]
pub struct Pid {
    /// Setpoint
    target: f64,

    /// Proportional gain
    kp: f64,
    /// Integral gain
    ki: f64,
    /// Derivative gain
    kd: f64,

    /// Integrator state (error · seconds)
    integral: f64,
    /// Last error (for derivative term)
    prev_error: f64,
    /// Timestamp of the last update
    prev_time: Time,

    first_update: bool,
}

impl Default for Pid {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Pid {
    /// Create a new PID controller with a zero setpoint.
    ///
    /// `kp`, `ki`, `kd` are the gain constants.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            target: 0.0,

            kp,
            ki,
            kd,

            integral: 0.0,
            prev_error: 0.0,
            prev_time: Time::new(0.0),

            first_update: true,
        }
    }

    /// Set the initial setpoint.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Reset integrator + derivative history.
    ///
    /// The next [`update`](Self::update) behaves like the very first one. Setpoint and gains are
    /// kept.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
        self.first_update = true;
    }

    /// Update the controller.
    ///
    /// `measurement`: current value
    /// `now`: timestamp of the measurement
    ///
    /// Returns the unclamped command `P + I + D`.
    pub fn update(&mut self, measurement: f64, now: Time) -> f64 {
        let error = self.target - measurement;

        let dt = if self.first_update {
            0.0
        } else {
            (now - self.prev_time).value()
        };

        // ----- P term -----
        let p = error * self.kp;

        // ----- I term -----
        // Only a positive dt advances the integral; a stalled or backwards clock leaves it as is.
        if dt > 0.0 {
            self.integral += error * dt;
        }
        let i = self.integral * self.ki;

        // ----- D term (on error) -----
        let d = if self.first_update {
            0.0
        } else if dt <= 0.0 {
            warn!("pid: non-increasing timestamp (dt = {} s), derivative skipped", dt);
            0.0
        } else {
            -(error - self.prev_error) / dt * self.kd
        };

        self.prev_error = error;
        self.prev_time = now;
        self.first_update = false;

        p + i + d
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    #[inline]
    pub fn kp(&self) -> f64 {
        self.kp
    }

    #[inline]
    pub fn set_kp(&mut self, kp: f64) {
        self.kp = kp;
    }

    #[inline]
    pub fn ki(&self) -> f64 {
        self.ki
    }

    #[inline]
    pub fn set_ki(&mut self, ki: f64) {
        self.ki = ki;
    }

    #[inline]
    pub fn kd(&self) -> f64 {
        self.kd
    }

    #[inline]
    pub fn set_kd(&mut self, kd: f64) {
        self.kd = kd;
    }
}
