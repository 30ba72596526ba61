// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Signed integer to four-symbol conversion.
//!
//! Positive values use all four positions. Negative values put a [`DASH`] in position 0 and the
//! magnitude in the remaining three, which is why the negative range is one digit shorter.

use log::debug;

use super::font::DASH;

/// Number of symbols on the panel.
pub const DIGITS: usize = 4;

pub const MIN_BASE: i32 = 2;
pub const MAX_BASE: i32 = 16;

/// Displayable `(min, max)` for `base` (clamped into `[2, 16]`).
pub const fn range(base: i32) -> (i32, i32) {
    let b = clamp_base(base);
    (-(b * b * b - 1), b * b * b * b - 1)
}

const fn clamp_base(base: i32) -> i32 {
    if base < MIN_BASE {
        MIN_BASE
    } else if base > MAX_BASE {
        MAX_BASE
    } else {
        base
    }
}

/// Convert `value` into symbol codes, most significant first.
///
/// `base` is clamped into `[2, 16]` and `value` into [`range`] before conversion.
pub fn encode(value: i32, base: i32) -> [u8; DIGITS] {
    let base = clamp_base(base);
    let (min, max) = range(base);
    let clamped = value.clamp(min, max);
    if clamped != value {
        debug!("numeral: {} clamped to {} (base {})", value, clamped, base);
    }

    let mut digits = [0u8; DIGITS];
    let (mut rest, first) = if clamped < 0 {
        digits[0] = DASH;
        (-clamped, 1)
    } else {
        (clamped, 0)
    };

    for slot in digits[first..].iter_mut().rev() {
        *slot = (rest % base) as u8;
        rest /= base;
    }

    digits
}
