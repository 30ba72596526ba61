// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Unit constructors that normalise to base SI units.
//!
//! `milliseconds(250.0)` and `seconds(0.25)` produce the same [`Time`]; `kilometers(1.0)` is a
//! [`Length`] of 1000 m.

use super::{Energy, Force, Frequency, Length, Mass, Power, Time};

// ----- time -----

#[inline]
pub fn seconds(v: f64) -> Time {
    Time::new(v)
}

#[inline]
pub fn milliseconds(v: f64) -> Time {
    Time::new(v) / 1_000.0
}

#[inline]
pub fn microseconds(v: f64) -> Time {
    Time::new(v) / 1_000_000.0
}

// ----- mass -----

#[inline]
pub fn kilograms(v: f64) -> Mass {
    Mass::new(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    Mass::new(v) / 1_000.0
}

// ----- distance -----

#[inline]
pub fn kilometers(v: f64) -> Length {
    Length::new(v) * 1_000.0
}

#[inline]
pub fn meters(v: f64) -> Length {
    Length::new(v)
}

#[inline]
pub fn millimeters(v: f64) -> Length {
    Length::new(v) / 1_000.0
}

// ----- force -----

#[inline]
pub fn kilonewtons(v: f64) -> Force {
    Force::new(v) * 1_000.0
}

#[inline]
pub fn newtons(v: f64) -> Force {
    Force::new(v)
}

#[inline]
pub fn millinewtons(v: f64) -> Force {
    Force::new(v) / 1_000.0
}

// ----- energy -----

#[inline]
pub fn kilojoules(v: f64) -> Energy {
    Energy::new(v) * 1_000.0
}

#[inline]
pub fn joules(v: f64) -> Energy {
    Energy::new(v)
}

#[inline]
pub fn millijoules(v: f64) -> Energy {
    Energy::new(v) / 1_000.0
}

// ----- power -----

#[inline]
pub fn kilowatts(v: f64) -> Power {
    Power::new(v) * 1_000.0
}

#[inline]
pub fn watts(v: f64) -> Power {
    Power::new(v)
}

#[inline]
pub fn milliwatts(v: f64) -> Power {
    Power::new(v) / 1_000.0
}

// ----- frequency -----

#[inline]
pub fn hertz(v: f64) -> Frequency {
    Frequency::new(v)
}
