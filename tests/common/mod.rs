// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use tiltmatrix::app::Devices;
use tiltmatrix::io::{Accelerometer, Button, Buttons, Clock, Color, Knob, MatrixDriver, Pixels};
use tiltmatrix::motion::Vec2;
use tiltmatrix::units::Time;

/// Keeps every frame it was asked to load.
#[derive(Default)]
pub struct RecordingDriver {
    pub begun: bool,
    pub frames: Vec<[u32; 3]>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<[u32; 3]> {
        self.frames.last().copied()
    }
}

impl MatrixDriver for RecordingDriver {
    fn begin(&mut self) {
        self.begun = true;
    }

    fn load_frame(&mut self, words: &[u32; 3]) {
        self.frames.push(*words);
    }
}

/// Buttons whose state the test sets directly.
#[derive(Default)]
pub struct FakeButtons {
    pub held: [bool; 3],
    pub updates: usize,
}

impl FakeButtons {
    pub fn hold(&mut self, buttons: &[Button]) {
        self.held = [false; 3];
        for b in buttons {
            self.held[*b as usize] = true;
        }
    }

    pub fn release(&mut self) {
        self.held = [false; 3];
    }
}

impl Buttons for FakeButtons {
    fn update(&mut self) {
        self.updates += 1;
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.held[button as usize]
    }
}

#[derive(Default)]
pub struct FakeKnob {
    pub value: i32,
    pub pressed: bool,
}

impl Knob for FakeKnob {
    fn get(&mut self) -> i32 {
        self.value
    }

    fn set(&mut self, value: i32) {
        self.value = value;
    }

    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

/// Plays back queued samples, then repeats `rest`.
#[derive(Default)]
pub struct ScriptedImu {
    pub queue: VecDeque<Vec2>,
    pub rest: Vec2,
    pub reads: usize,
}

impl ScriptedImu {
    pub fn resting_at(rest: Vec2) -> Self {
        Self {
            rest,
            ..Default::default()
        }
    }
}

impl Accelerometer for ScriptedImu {
    fn sample(&mut self) -> Vec2 {
        self.reads += 1;
        self.queue.pop_front().unwrap_or(self.rest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOp {
    Set(usize, Color, u8),
    Clear,
    Show,
}

#[derive(Default)]
pub struct RecordingPixels {
    pub ops: Vec<PixelOp>,
}

impl RecordingPixels {
    pub fn shows(&self) -> usize {
        self.ops.iter().filter(|op| **op == PixelOp::Show).count()
    }

    /// Indices set since the last clear.
    pub fn lit(&self) -> Vec<usize> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == PixelOp::Clear)
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                PixelOp::Set(i, _, _) => Some(*i),
                _ => None,
            })
            .collect()
    }
}

impl Pixels for RecordingPixels {
    fn set(&mut self, index: usize, color: Color, brightness: u8) {
        self.ops.push(PixelOp::Set(index, color, brightness));
    }

    fn clear(&mut self) {
        self.ops.push(PixelOp::Clear);
    }

    fn show(&mut self) {
        self.ops.push(PixelOp::Show);
    }
}

/// Advances by a fixed step on every read.
pub struct SteppingClock {
    pub now: Time,
    pub step: Time,
}

impl Clock for SteppingClock {
    fn now(&mut self) -> Time {
        self.now += self.step;
        self.now
    }
}

/// Records requested delays instead of waiting.
#[derive(Default)]
pub struct NoopDelay {
    pub total_ns: u64,
}

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

pub type TestDevices = Devices<FakeButtons, FakeKnob, ScriptedImu, RecordingPixels>;

pub fn devices() -> TestDevices {
    Devices {
        buttons: FakeButtons::default(),
        knob: FakeKnob::default(),
        imu: ScriptedImu::default(),
        pixels: RecordingPixels::default(),
    }
}

pub fn ms(v: u32) -> Time {
    Time::from_millis(v)
}
