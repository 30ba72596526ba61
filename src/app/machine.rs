// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic mode dispatcher.
//!
//! One call to [`ModeMachine::tick`] samples the buttons, takes at most one mode transition and
//! runs the active mode once. The caller owns the loop:
//!
//! ```ignore
//! machine.boot(&mut devices, &mut delay);
//!
//! loop {
//!     machine.poll(&mut clock, &mut devices);
//! }
//! ```
//!
//! | Input         | Effect                                                   |
//! | ------------- | -------------------------------------------------------- |
//! | A + B + C     | Idle                                                     |
//! | A             | Knob display                                             |
//! | B             | Motion display (filter reset, offset seeded from a sample) |
//! | C             | Pixel animation                                          |

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use super::animation::Animation;
use super::mode::Mode;
use crate::config::{AppConfig, MotionConfig};
use crate::display::frame::{HEIGHT, WIDTH};
use crate::display::LedMatrix;
use crate::io::{Accelerometer, Button, Buttons, Clock, Knob, MatrixDriver, Pixels};
use crate::motion::MotionFilter;
use crate::units::Time;

/// Input and indicator hardware the modes read from or write to.
pub struct Devices<B, K, A, P> {
    pub buttons: B,
    pub knob: K,
    pub imu: A,
    pub pixels: P,
}

pub struct ModeMachine<D: MatrixDriver> {
    cfg: AppConfig,
    matrix: LedMatrix<D>,
    filter: MotionFilter,
    mode: Mode,
    last_tick: Option<Time>,
}

impl<D: MatrixDriver> ModeMachine<D> {
    /// Start in [`Mode::Idle`].
    pub fn new(matrix: LedMatrix<D>, cfg: AppConfig, motion: MotionConfig) -> Self {
        Self {
            cfg,
            matrix,
            filter: MotionFilter::new(motion),
            mode: Mode::Idle,
            last_tick: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.cfg
    }

    #[inline]
    pub fn matrix(&self) -> &LedMatrix<D> {
        &self.matrix
    }

    #[inline]
    pub fn filter(&self) -> &MotionFilter {
        &self.filter
    }

    /// Bring the devices to a known state and blink the panel.
    ///
    /// Blocks for the duration of the flash sequence.
    pub fn boot<B, K, A, P, DELAY>(&mut self, devices: &mut Devices<B, K, A, P>, delay: &mut DELAY)
    where
        B: Buttons,
        K: Knob,
        A: Accelerometer,
        P: Pixels,
        DELAY: DelayNs,
    {
        info!("Knob begin");
        devices.knob.set(0);

        info!("Pixels begin");
        devices.pixels.clear();
        devices.pixels.show();

        info!("Button begin");
        devices.buttons.update();

        info!("IMU begin");
        let _ = devices.imu.sample();

        info!("LED Matrix begin");
        self.matrix.begin();
        self.matrix
            .flash(delay, self.cfg.flash_times, self.cfg.flash_period_ms);
    }

    /// Read the clock and run one tick.
    pub fn poll<C, B, K, A, P>(&mut self, clock: &mut C, devices: &mut Devices<B, K, A, P>)
    where
        C: Clock,
        B: Buttons,
        K: Knob,
        A: Accelerometer,
        P: Pixels,
    {
        let now = clock.now();
        self.tick(now, devices);
    }

    /// Run one tick at time `now`.
    pub fn tick<B, K, A, P>(&mut self, now: Time, devices: &mut Devices<B, K, A, P>)
    where
        B: Buttons,
        K: Knob,
        A: Accelerometer,
        P: Pixels,
    {
        let dt = match self.last_tick {
            Some(prev) => now - prev,
            None => Time::new(self.filter.config().dt_default as f64),
        };
        self.last_tick = Some(now);

        devices.buttons.update();
        self.transition(now, devices);

        match &mut self.mode {
            Mode::Idle => {}
            Mode::KnobDisplay => show_knob(&self.cfg, &mut self.matrix, &mut devices.knob),
            Mode::MotionDisplay { last_log } => {
                show_motion(&mut self.filter, &mut self.matrix, &mut devices.imu, dt);

                if now - *last_log > self.cfg.motion_log_period {
                    *last_log = now;
                    let (p, v, a) = (
                        self.filter.position(),
                        self.filter.velocity(),
                        self.filter.acceleration(),
                    );
                    info!(
                        "Pos: {}, {}; Vel: {}, {}, Acc: {}, {}",
                        p.x, p.y, v.x, v.y, a.x, a.y
                    );
                }
            }
            Mode::Animation(animation) => {
                let brightness = knob_brightness(&self.cfg, &mut devices.knob);
                animation.poll(
                    now,
                    self.cfg.animation_period,
                    brightness,
                    &mut devices.pixels,
                );
            }
        }
    }

    fn transition<B, K, A, P>(&mut self, now: Time, devices: &mut Devices<B, K, A, P>)
    where
        B: Buttons,
        A: Accelerometer,
    {
        let pressed = |b| devices.buttons.is_pressed(b);
        let (a, b, c) = (pressed(Button::A), pressed(Button::B), pressed(Button::C));

        let next = if a && b && c {
            Mode::Idle
        } else if a && !matches!(self.mode, Mode::KnobDisplay) {
            Mode::KnobDisplay
        } else if b && !matches!(self.mode, Mode::MotionDisplay { .. }) {
            Mode::MotionDisplay { last_log: now }
        } else if c && !matches!(self.mode, Mode::Animation(_)) {
            Mode::Animation(Animation::new(now))
        } else {
            return;
        };

        if next == self.mode {
            return;
        }

        info!("mode: {} -> {}", self.mode.name(), next.name());

        if !matches!(next, Mode::Idle) {
            self.matrix.clean();
            self.matrix.clear();
        }

        if matches!(next, Mode::MotionDisplay { .. }) {
            let sample = devices.imu.sample();
            debug!("motion: seeding offset with ({}, {})", sample.x, sample.y);
            self.filter.seed(sample);
        }

        self.mode = next;
    }
}

/// Clamp the knob into the displayable range and print it. Pressing the knob zeroes it.
fn show_knob<D: MatrixDriver, K: Knob>(cfg: &AppConfig, matrix: &mut LedMatrix<D>, knob: &mut K) {
    if knob.is_pressed() {
        let value = knob.get();
        if value != 0 {
            info!("Knob at pos: {}, reset", value);
        }
        knob.set(0);
        return;
    }

    let value = knob.get().clamp(cfg.knob_min, cfg.knob_max);
    knob.set(value);
    matrix.print(value, cfg.base);
}

/// Run the filter and draw its Y position as a full-width bar.
fn show_motion<D: MatrixDriver, A: Accelerometer>(
    filter: &mut MotionFilter,
    matrix: &mut LedMatrix<D>,
    imu: &mut A,
    dt: Time,
) {
    let sample = imu.sample();
    let position = filter.update(sample, dt);
    let row = bar_row(position.y);

    matrix.clean();
    for x in 0..WIDTH {
        matrix.draw_point(x as f32, row);
    }
    matrix.show();
}

/// Pin a display Y coordinate to the panel's row range.
pub fn bar_row(y: f32) -> f32 {
    y.clamp(0.0, (HEIGHT - 1) as f32)
}

/// Knob value as a brightness percentage, written back so the knob stops at the limits.
fn knob_brightness<K: Knob>(cfg: &AppConfig, knob: &mut K) -> u8 {
    let brightness = knob.get().clamp(0, cfg.brightness_max as i32);
    knob.set(brightness);
    brightness as u8
}
