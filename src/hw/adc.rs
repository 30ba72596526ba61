// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking single-channel ADC1 reads, and the analog accelerometer built on them.

use stm32f7xx_hal::pac;
use tiltmatrix::io::Accelerometer;
use tiltmatrix::motion::Vec2;

pub struct Adc {
    adc: pac::ADC1,
}

impl Adc {
    /// Create and initialize ADC1: 12-bit, right-aligned, software trigger.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        // ADC prescaler: PCLK2 / 4
        common.ccr.modify(|_, w| w.adcpre().div4());

        let adc = adc1;
        adc.cr2.modify(|_, w| w.adon().clear_bit());
        adc.cr1.modify(|_, w| w.res().bits(0b00));
        adc.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w
        });

        // Longest sample time on every channel we use
        adc.smpr2.modify(|_, w| w.smp3().bits(0b111));
        adc.smpr1.modify(|_, w| w.smp10().bits(0b111));

        adc.cr2.modify(|_, w| w.adon().set_bit());

        Self { adc }
    }

    /// Convert one channel and return the 12-bit result.
    pub fn read(&mut self, channel: u8) -> u16 {
        let adc = &self.adc;

        adc.sqr1.modify(|_, w| w.l().bits(0));
        adc.sqr3.modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });
        adc.cr2.modify(|_, w| w.swstart().set_bit());

        while adc.sr.read().eoc().bit_is_clear() {}

        adc.dr.read().data().bits() as u16
    }
}

/// Channel mapping and calibration for a ratiometric two-axis accelerometer.
#[derive(Copy, Clone, Debug)]
pub struct AccelCalibration {
    pub channel_x: u8,
    pub channel_y: u8,
    /// Reading at 0 g.
    pub zero: u16,
    /// Counts per g.
    pub sensitivity: f32,
}

impl Default for AccelCalibration {
    /// ADXL335-class part on a 3.3 V reference: mid-scale at rest, 330 mV/g.
    fn default() -> Self {
        Self {
            channel_x: 3,
            channel_y: 10,
            zero: 2048,
            sensitivity: 409.6,
        }
    }
}

pub struct AnalogAccelerometer {
    adc: Adc,
    cal: AccelCalibration,
}

impl AnalogAccelerometer {
    pub fn new(adc: Adc, cal: AccelCalibration) -> Self {
        Self { adc, cal }
    }

    fn axis(&mut self, channel: u8) -> f32 {
        let raw = self.adc.read(channel) as f32;
        (raw - self.cal.zero as f32) / self.cal.sensitivity
    }
}

impl Accelerometer for AnalogAccelerometer {
    fn sample(&mut self) -> Vec2 {
        let x = self.axis(self.cal.channel_x);
        let y = self.axis(self.cal.channel_y);
        Vec2::new(x, y)
    }
}
