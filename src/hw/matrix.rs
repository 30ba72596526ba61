// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dot-matrix driver that mirrors frames to the debug terminal.
//!
//! The Nucleo has no matrix of its own; each new frame is printed as its packed words followed by
//! an 8-line picture. Repeated frames are skipped so the steady-state loop stays quiet.

use tiltmatrix::display::frame::{Frame, HEIGHT, WIDTH};
use tiltmatrix::io::MatrixDriver;

use super::logger::with_serial;

pub struct SerialMatrix {
    last: Option<[u32; 3]>,
}

impl SerialMatrix {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl MatrixDriver for SerialMatrix {
    fn begin(&mut self) {
        with_serial(|usart| usart.println("matrix: serial mirror, 12x8"));
    }

    fn load_frame(&mut self, words: &[u32; 3]) {
        if self.last.as_ref() == Some(words) {
            return;
        }
        self.last = Some(*words);

        let frame = Frame::from_words(*words);
        with_serial(|usart| {
            usart.write_str("frame");
            for &w in words {
                usart.write_byte(b' ');
                usart.print_hex_u32(w);
            }
            usart.write_str("\r\n");

            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    usart.write_byte(if frame.cell(x, y) { b'#' } else { b'.' });
                }
                usart.write_str("\r\n");
            }
        });
    }
}
