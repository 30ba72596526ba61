// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI Nucleo-144 running TiltMatrix.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, Alternate, Analog, Input, Output, PullUp, PushPull},
    hal::digital::v2::{InputPin, OutputPin},
    pac,
    prelude::*,
};

// The panel, knob and LED wrappers are bounded on the HAL's embedded-hal 0.2 digital traits; every
// pin handed to them must implement those.
const _: fn() = || {
    fn input<P: InputPin>() {}
    fn output<P: OutputPin>() {}

    input::<gpioc::PC8<Input<PullUp>>>();
    input::<gpioc::PC9<Input<PullUp>>>();
    input::<gpioc::PC10<Input<PullUp>>>();
    input::<gpioc::PC11<Input<PullUp>>>();
    output::<gpiob::PB0<Output<PushPull>>>();
    output::<gpiob::PB7<Output<PushPull>>>();
    output::<gpiob::PB14<Output<PushPull>>>();
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart3: Usart3Pins,
    pub buttons: ButtonPins,
    pub knob: KnobPins,
    pub accel: AccelPins,
}

/// User LEDs LD1..LD3
pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>,
    pub blue: gpiob::PB7<Output<PushPull>>,
    pub red: gpiob::PB14<Output<PushPull>>,
}

/// USART3, routed to the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Front-panel buttons, wired to ground
pub struct ButtonPins {
    pub a: gpioc::PC8<Input<PullUp>>,
    pub b: gpioc::PC9<Input<PullUp>>,
    pub c: gpioc::PC10<Input<PullUp>>,
}

/// Rotary encoder on TIM3 plus its push switch
pub struct KnobPins {
    pub tim3_ch1: gpioa::PA6<Alternate<2>>,
    pub tim3_ch2: gpioa::PA7<Alternate<2>>,
    pub switch: gpioc::PC11<Input<PullUp>>,
}

/// Ratiometric analog accelerometer outputs
pub struct AccelPins {
    pub x: gpioa::PA3<Analog>, // ADC1_IN3
    pub y: gpioc::PC0<Analog>, // ADC1_IN10
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            buttons: ButtonPins {
                a: gpioc.pc8.into_pull_up_input(),
                b: gpioc.pc9.into_pull_up_input(),
                c: gpioc.pc10.into_pull_up_input(),
            },

            knob: KnobPins {
                tim3_ch1: gpioa.pa6.into_alternate::<2>(),
                tim3_ch2: gpioa.pa7.into_alternate::<2>(),
                switch: gpioc.pc11.into_pull_up_input(),
            },

            accel: AccelPins {
                x: gpioa.pa3.into_analog(),
                y: gpioc.pc0.into_analog(),
            },
        }
    }
}
