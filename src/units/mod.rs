// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Dimensional Quantities
//!
//! Compile-time checked physical units. The controller's timestamps and the motion filter's time
//! step are [`Time`] values, so a millisecond count can never be passed where seconds are
//! expected without going through [`literals`].
//!
//! ## Modules
//!
//! - [`quantity`] - The [`Quantity`] wrapper and its arithmetic.
//! - [`literals`] - Unit constructors (`milliseconds`, `kilometers`, ...).

pub mod literals;
pub mod quantity;

pub use quantity::{
    Acceleration, Dimensionless, Energy, Force, Frequency, Jerk, Length, Mass, Power, Quantity,
    Time, Velocity,
};
