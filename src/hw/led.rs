// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! On-board LEDs, and a pixel ring built from them.

use stm32f7xx_hal::hal::digital::v2::OutputPin;
use tiltmatrix::io::{Color, Pixels};

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) => self.pin.set_low().ok(),
            (ActiveLevel::Low, true) => self.pin.set_low().ok(),
            (ActiveLevel::Low, false) => self.pin.set_high().ok(),
        };
        self.is_on = on;
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Drive the LED only if the requested state differs from the last one.
    pub fn update(&mut self, on: bool) {
        if on != self.is_on {
            self.set(on);
        }
    }
}

/// Number of addressable pixels the animation expects.
pub const RING_LEN: usize = 8;

/// Scaled channel value above which an LED counts as lit.
const LIT_THRESHOLD: u16 = 128;

/// Eight virtual pixels folded onto the red, green and blue user LEDs.
///
/// On `show`, each LED lights if any staged pixel drives its colour channel (scaled by
/// brightness) past half scale.
pub struct LedRing<R: OutputPin, G: OutputPin, B: OutputPin> {
    red: Led<R>,
    green: Led<G>,
    blue: Led<B>,
    staged: [Option<(Color, u8)>; RING_LEN],
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> LedRing<R, G, B> {
    pub fn new(red: Led<R>, green: Led<G>, blue: Led<B>) -> Self {
        Self {
            red,
            green,
            blue,
            staged: [None; RING_LEN],
        }
    }

    fn channel_lit(&self, channel: impl Fn(Color) -> u8) -> bool {
        self.staged.iter().flatten().any(|&(color, brightness)| {
            channel(color) as u16 * brightness.min(100) as u16 / 100 >= LIT_THRESHOLD
        })
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> Pixels for LedRing<R, G, B> {
    fn set(&mut self, index: usize, color: Color, brightness: u8) {
        if let Some(slot) = self.staged.get_mut(index) {
            *slot = Some((color, brightness));
        }
    }

    fn clear(&mut self) {
        self.staged = [None; RING_LEN];
    }

    fn show(&mut self) {
        let (r, g, b) = (
            self.channel_lit(|c| c.r),
            self.channel_lit(|c| c.g),
            self.channel_lit(|c| c.b),
        );
        self.red.update(r);
        self.green.update(g);
        self.blue.update(b);
    }
}
