// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use log::{info, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use tiltmatrix::app::{Devices, ModeMachine};
use tiltmatrix::config::{AppConfig, MotionConfig};
use tiltmatrix::display::LedMatrix;

mod hw;
use hw::{
    AccelCalibration, Adc, AnalogAccelerometer, BoardPins, CycleClock, Encoder, KnobEncoder, Led,
    LedRing, PanelButtons, SerialMatrix, SysDelay, Usart,
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let hclk = clocks.hclk().raw();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

    // USART3 (ST-LINK VCP) carries the log
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    hw::logger::init(Usart::new(serial), LevelFilter::Info);
    info!("tiltmatrix: hclk = {} Hz", hclk);

    let mut clock = CycleClock::new(&mut cp.DCB, &mut cp.DWT, hclk);
    let mut delay = SysDelay::new(cp.SYST, hclk);

    let pixels = LedRing::new(
        Led::active_high(pins.leds.red),
        Led::active_high(pins.leds.green),
        Led::active_high(pins.leds.blue),
    );
    // TIM3 reads PA6/PA7 through their alternate function; the pins only need to stay configured
    let _encoder_pins = (pins.knob.tim3_ch1, pins.knob.tim3_ch2);
    let knob = KnobEncoder::new(Encoder::tim3(dp.TIM3), pins.knob.switch);
    let buttons = PanelButtons::new(pins.buttons.a, pins.buttons.b, pins.buttons.c);
    let imu = AnalogAccelerometer::new(Adc::adc1(dp.ADC1), AccelCalibration::default());

    let mut devices = Devices {
        buttons,
        knob,
        imu,
        pixels,
    };

    let app_cfg = AppConfig::default().validate().unwrap();
    let motion_cfg = MotionConfig::default().validate().unwrap();

    let mut machine = ModeMachine::new(LedMatrix::new(SerialMatrix::new()), app_cfg, motion_cfg);
    machine.boot(&mut devices, &mut delay);
    info!("tiltmatrix: ready");

    loop {
        machine.poll(&mut clock, &mut devices);
    }
}
