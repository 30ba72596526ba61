// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend writing to the debug USART.
//!
//! Lines look like `[INFO ] [tiltmatrix::app::machine:204] mode: idle -> knob`.
//!
//! The USART lives in a critical-section mutex so both the logger and the frame mirror can write
//! to it.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record};
use stm32f7xx_hal::pac::USART3;

use super::Usart;

static SERIAL: Mutex<RefCell<Option<Usart<USART3>>>> = Mutex::new(RefCell::new(None));

static LOGGER: SerialLogger = SerialLogger;

struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        with_serial(|usart| {
            let _ = write!(
                usart,
                "[{:<5}] [{}:{}] {}\r\n",
                record.level(),
                record.module_path().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            );
        });
    }

    fn flush(&self) {
        with_serial(|usart| usart.flush());
    }
}

/// Hand the USART to the logger and install it with the given level ceiling.
pub fn init(usart: Usart<USART3>, level: LevelFilter) {
    interrupt::free(|cs| SERIAL.borrow(cs).replace(Some(usart)));

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Run `f` with exclusive access to the debug USART. `None` before [`init`].
pub fn with_serial<R>(f: impl FnOnce(&mut Usart<USART3>) -> R) -> Option<R> {
    interrupt::free(|cs| SERIAL.borrow(cs).borrow_mut().as_mut().map(f))
}
