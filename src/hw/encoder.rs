// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Quadrature encoder support via TIM3 in encoder mode, and the knob built on it.

use stm32f7xx_hal::hal::digital::v2::InputPin;
use stm32f7xx_hal::pac;
use tiltmatrix::io::Knob;

/// Timer counts per mechanical detent (encoder mode 3 counts every edge).
const COUNTS_PER_DETENT: i32 = 4;

pub struct Encoder {
    tim: pac::TIM3,
}

impl Encoder {
    /// Configure TIM3 as a quadrature encoder with full 16-bit range.
    pub fn tim3(tim3: pac::TIM3) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim3en().set_bit());

        let tim = tim3;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Auto-reload: max 16-bit
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });

        // Slave mode: encoder mode 3 (count on both TI1 and TI2)
        tim.smcr.modify(|_, w| w.sms().bits(0b011));

        // Configure CH1/CH2 as inputs from TI1/TI2
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());

        // Polarity and enable for both channels.
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        tim.cnt.write(|w| unsafe { w.bits(0) });
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Raw 16-bit counter value.
    #[inline]
    pub fn raw(&self) -> u16 {
        self.tim.cnt.read().cnt().bits()
    }
}

/// Knob backed by the TIM3 encoder and an active-low push switch.
///
/// The 16-bit counter is unwrapped into a running `i32` count on every read, so the knob keeps its
/// value through counter overflow as long as it is read at least once per 32k edges.
pub struct KnobEncoder<SW: InputPin> {
    encoder: Encoder,
    switch: SW,
    last_raw: u16,
    counts: i32,
}

impl<SW: InputPin> KnobEncoder<SW> {
    pub fn new(encoder: Encoder, switch: SW) -> Self {
        let last_raw = encoder.raw();
        Self {
            encoder,
            switch,
            last_raw,
            counts: 0,
        }
    }

    fn sync(&mut self) {
        let raw = self.encoder.raw();
        let delta = raw.wrapping_sub(self.last_raw) as i16;
        self.last_raw = raw;
        self.counts = self.counts.saturating_add(delta as i32);
    }
}

impl<SW: InputPin> Knob for KnobEncoder<SW> {
    fn get(&mut self) -> i32 {
        self.sync();
        self.counts / COUNTS_PER_DETENT
    }

    fn set(&mut self, value: i32) {
        self.sync();
        self.counts = value.saturating_mul(COUNTS_PER_DETENT);
    }

    fn is_pressed(&mut self) -> bool {
        self.switch.is_low().unwrap_or(false)
    }
}
