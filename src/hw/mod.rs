// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board support for the Nucleo-F767ZI.
//!
//! ## Modules
//!
//! - `pins`: pin map
//! - `usart` / `logger`: debug serial port and the `log` backend on it
//! - `clock`: cycle-counter clock and SysTick delay
//! - `buttons`, `encoder`, `adc`: inputs
//! - `led`, `matrix`: outputs

pub mod adc;
pub mod buttons;
pub mod clock;
pub mod encoder;
pub mod led;
pub mod logger;
pub mod matrix;
pub mod pins;
pub mod usart;

pub use adc::{AccelCalibration, Adc, AnalogAccelerometer};
pub use buttons::PanelButtons;
pub use clock::{CycleClock, SysDelay};
pub use encoder::{Encoder, KnobEncoder};
pub use led::{Led, LedRing};
pub use matrix::SerialMatrix;
pub use pins::BoardPins;
pub use usart::Usart;
