// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Front-panel buttons, active low.

use stm32f7xx_hal::hal::digital::v2::InputPin;
use tiltmatrix::io::{Button, Buttons};

pub struct PanelButtons<A: InputPin, B: InputPin, C: InputPin> {
    a: A,
    b: B,
    c: C,
    latched: [bool; 3],
}

impl<A: InputPin, B: InputPin, C: InputPin> PanelButtons<A, B, C> {
    pub fn new(a: A, b: B, c: C) -> Self {
        Self {
            a,
            b,
            c,
            latched: [false; 3],
        }
    }
}

impl<A: InputPin, B: InputPin, C: InputPin> Buttons for PanelButtons<A, B, C> {
    fn update(&mut self) {
        // A pin that fails to read counts as released.
        self.latched = [
            self.a.is_low().unwrap_or(false),
            self.b.is_low().unwrap_or(false),
            self.c.is_low().unwrap_or(false),
        ];
    }

    fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.latched[0],
            Button::B => self.latched[1],
            Button::C => self.latched[2],
        }
    }
}
