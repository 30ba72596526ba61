// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pixel-ring chase used as the third display mode.
//!
//! Every period the next pair of pixels lights up in a colour taken from [`wave`]; after the
//! fourth pair the ring is cleared and the sequence starts over.

use log::debug;
use micromath::F32Ext;

use crate::io::{Color, Pixels};
use crate::units::Time;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnimationStep {
    S1,
    S2,
    S3,
    S4,
    Clean,
}

impl AnimationStep {
    pub fn next(self) -> Self {
        match self {
            AnimationStep::S1 => AnimationStep::S2,
            AnimationStep::S2 => AnimationStep::S3,
            AnimationStep::S3 => AnimationStep::S4,
            AnimationStep::S4 => AnimationStep::Clean,
            AnimationStep::Clean => AnimationStep::S1,
        }
    }

    /// Pixel indices lit by this step. `None` for [`AnimationStep::Clean`].
    pub fn pixels(self) -> Option<(usize, usize)> {
        match self {
            AnimationStep::S1 => Some((0, 1)),
            AnimationStep::S2 => Some((2, 3)),
            AnimationStep::S3 => Some((4, 5)),
            AnimationStep::S4 => Some((6, 7)),
            AnimationStep::Clean => None,
        }
    }
}

/// Colour at time `t`: three phase-shifted sines mapped onto 0..=255.
///
/// `t` is taken in seconds, so the hue drifts slowly and smoothly from one animation step to
/// the next (about 0.2 rad per 200 ms step) instead of jumping around.
pub fn wave(t: Time) -> Color {
    let t = t.value() as f32;
    let channel = |phase: f32| (((t + phase).sin() + 1.0) / 2.0 * 255.0) as u8;
    Color::new(channel(5.0), channel(-3.0), channel(2.0))
}

/// Sub-state of the animation mode. A fresh one is created on every entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    step: AnimationStep,
    last_step: Time,
}

impl Animation {
    /// Start at [`AnimationStep::S1`]; the first step renders one period after `now`.
    pub fn new(now: Time) -> Self {
        Self {
            step: AnimationStep::S1,
            last_step: now,
        }
    }

    /// The step that renders next.
    #[inline]
    pub fn step(&self) -> AnimationStep {
        self.step
    }

    /// Render the pending step if `period` has elapsed. Returns `true` if it did.
    pub fn poll<P: Pixels>(
        &mut self,
        now: Time,
        period: Time,
        brightness: u8,
        pixels: &mut P,
    ) -> bool {
        if now - self.last_step < period {
            return false;
        }
        self.last_step = now;

        match self.step.pixels() {
            Some((a, b)) => {
                let color = wave(now);
                pixels.set(a, color, brightness);
                pixels.set(b, color, brightness);
            }
            None => pixels.clear(),
        }
        debug!("animation: {:?}", self.step);

        pixels.show();
        self.step = self.step.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_cycle_through_five_states() {
        let mut step = AnimationStep::S1;
        let mut seen = 0;
        loop {
            step = step.next();
            seen += 1;
            if step == AnimationStep::S1 {
                break;
            }
        }
        assert_eq!(seen, 5);
        assert_eq!(AnimationStep::Clean.pixels(), None);
        assert_eq!(AnimationStep::S4.pixels(), Some((6, 7)));
    }

    #[test]
    fn wave_channels_differ_by_phase() {
        let c = wave(Time::new(0.0));
        // sin(5) < 0 < sin(2)
        assert!(c.r < 128);
        assert!(c.b > 128);
    }

    #[test]
    fn wave_drifts_smoothly_between_steps() {
        // Full-scale slope is 127.5 per second, so a 200 ms step moves a channel by at most 25.5.
        for k in 0..50u32 {
            let a = wave(Time::from_millis(k * 200));
            let b = wave(Time::from_millis((k + 1) * 200));
            for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
                assert!(x.abs_diff(y) <= 26, "step {}: {} -> {}", k, x, y);
            }
        }
    }
}
