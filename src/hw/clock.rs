// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Time keeping: a monotonic clock on the DWT cycle counter and a SysTick busy-wait delay.

use cortex_m::delay::Delay;
use cortex_m::peripheral::{DCB, DWT, SYST};
use embedded_hal::delay::DelayNs;
use tiltmatrix::io::Clock;
use tiltmatrix::units::Time;

/// Monotonic clock extending the 32-bit cycle counter to 64 bits.
///
/// [`Clock::now`] must be called at least once per counter wrap (about 4.4 min at 16 MHz).
pub struct CycleClock {
    hclk: u32,
    last: u32,
    cycles: u64,
}

impl CycleClock {
    pub fn new(dcb: &mut DCB, dwt: &mut DWT, hclk: u32) -> Self {
        dcb.enable_trace();
        DWT::unlock();
        dwt.enable_cycle_counter();

        Self {
            hclk,
            last: DWT::cycle_count(),
            cycles: 0,
        }
    }
}

impl Clock for CycleClock {
    fn now(&mut self) -> Time {
        let count = DWT::cycle_count();
        self.cycles += count.wrapping_sub(self.last) as u64;
        self.last = count;
        Time::from_cycles(self.cycles, self.hclk)
    }
}

/// SysTick delay exposed through the `embedded-hal` 1.0 delay trait.
pub struct SysDelay {
    inner: Delay,
}

impl SysDelay {
    pub fn new(syst: SYST, hclk: u32) -> Self {
        Self {
            inner: Delay::new(syst, hclk),
        }
    }
}

impl DelayNs for SysDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.inner.delay_us(ns.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
