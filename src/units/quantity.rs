// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Scalar value tagged with its physical dimension.
//!
//! The mass, length and time exponents are `typenum` integers, so they exist only in the type
//! system. Adding metres to seconds does not compile; multiplying metres by 1/s² yields a
//! `Quantity<Z0, P1, N2>` without any runtime bookkeeping.
//!
//! ```
//! use tiltmatrix::units::literals::{meters, seconds};
//! use tiltmatrix::units::Velocity;
//!
//! let v: Velocity = meters(10.0) / seconds(2.0);
//! assert_eq!(v.value(), 5.0);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use typenum::{Diff, Integer, Negate, Sum, N1, N2, N3, P1, P2, Z0};

/// A `f64` carrying mass (`M`), length (`L`) and time (`T`) exponents.
pub struct Quantity<M, L, T> {
    v: f64,
    dim: PhantomData<(M, L, T)>,
}

pub type Dimensionless = Quantity<Z0, Z0, Z0>;

/// kg
pub type Mass = Quantity<P1, Z0, Z0>;
/// m
pub type Length = Quantity<Z0, P1, Z0>;
/// s
pub type Time = Quantity<Z0, Z0, P1>;

/// m/s
pub type Velocity = Quantity<Z0, P1, N1>;
/// m/s²
pub type Acceleration = Quantity<Z0, P1, N2>;
/// m/s³
pub type Jerk = Quantity<Z0, P1, N3>;

/// kg·m/s² (N)
pub type Force = Quantity<P1, P1, N2>;
/// kg·m²/s² (J)
pub type Energy = Quantity<P1, P2, N2>;
/// kg·m²/s³ (W)
pub type Power = Quantity<P1, P2, N3>;

/// 1/s (Hz)
pub type Frequency = Quantity<Z0, Z0, N1>;

impl<M, L, T> Quantity<M, L, T> {
    /// Wrap a raw value already expressed in base SI units.
    #[inline]
    pub const fn new(v: f64) -> Self {
        Self {
            v,
            dim: PhantomData,
        }
    }

    /// Raw value in base SI units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.v
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(if self.v < 0.0 { -self.v } else { self.v })
    }
}

impl<M: Integer, L: Integer, T: Integer> Quantity<M, L, T> {
    /// The `(mass, length, time)` exponents of this quantity.
    pub fn dim() -> (i32, i32, i32) {
        (M::to_i32(), L::to_i32(), T::to_i32())
    }
}

impl Time {
    pub fn from_millis(ms: u32) -> Self {
        Self::new(ms as f64 / 1_000.0)
    }

    pub fn from_micros(us: u64) -> Self {
        Self::new(us as f64 / 1_000_000.0)
    }

    /// Elapsed time of `cycles` ticks of a `hz` clock. Divides in floating point, so long uptimes
    /// cannot overflow.
    pub fn from_cycles(cycles: u64, hz: u32) -> Self {
        Self::new(cycles as f64 / hz as f64)
    }

    /// Whole milliseconds, saturating at the `u32` range.
    pub fn as_millis(self) -> u32 {
        (self.v * 1_000.0) as u32
    }
}

impl From<Dimensionless> for f64 {
    #[inline]
    fn from(q: Dimensionless) -> f64 {
        q.v
    }
}

// Derives would put bounds on the phantom exponents, so these are spelled out.

impl<M, L, T> Clone for Quantity<M, L, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, L, T> Copy for Quantity<M, L, T> {}

impl<M, L, T> Default for Quantity<M, L, T> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<M: Integer, L: Integer, T: Integer> fmt::Debug for Quantity<M, L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [M^{} L^{} T^{}]",
            self.v,
            M::to_i32(),
            L::to_i32(),
            T::to_i32()
        )
    }
}

impl<M, L, T> PartialEq for Quantity<M, L, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl<M, L, T> PartialOrd for Quantity<M, L, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.v.partial_cmp(&other.v)
    }
}

// ----- same dimension -----

impl<M, L, T> Add for Quantity<M, L, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.v + rhs.v)
    }
}

impl<M, L, T> Sub for Quantity<M, L, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.v - rhs.v)
    }
}

impl<M, L, T> AddAssign for Quantity<M, L, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.v += rhs.v;
    }
}

impl<M, L, T> SubAssign for Quantity<M, L, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.v -= rhs.v;
    }
}

impl<M, L, T> Neg for Quantity<M, L, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.v)
    }
}

// ----- dimension algebra -----

impl<M1, L1, T1, M2, L2, T2> Mul<Quantity<M2, L2, T2>> for Quantity<M1, L1, T1>
where
    M1: Add<M2>,
    L1: Add<L2>,
    T1: Add<T2>,
{
    type Output = Quantity<Sum<M1, M2>, Sum<L1, L2>, Sum<T1, T2>>;

    #[inline]
    fn mul(self, rhs: Quantity<M2, L2, T2>) -> Self::Output {
        Quantity::new(self.v * rhs.v)
    }
}

impl<M1, L1, T1, M2, L2, T2> Div<Quantity<M2, L2, T2>> for Quantity<M1, L1, T1>
where
    M1: Sub<M2>,
    L1: Sub<L2>,
    T1: Sub<T2>,
{
    type Output = Quantity<Diff<M1, M2>, Diff<L1, L2>, Diff<T1, T2>>;

    #[inline]
    fn div(self, rhs: Quantity<M2, L2, T2>) -> Self::Output {
        Quantity::new(self.v / rhs.v)
    }
}

// ----- plain scalars -----

impl<M, L, T> Mul<f64> for Quantity<M, L, T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.v * rhs)
    }
}

impl<M, L, T> Div<f64> for Quantity<M, L, T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.v / rhs)
    }
}

impl<M, L, T> MulAssign<f64> for Quantity<M, L, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.v *= rhs;
    }
}

impl<M, L, T> DivAssign<f64> for Quantity<M, L, T> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.v /= rhs;
    }
}

impl<M, L, T> Mul<Quantity<M, L, T>> for f64 {
    type Output = Quantity<M, L, T>;

    #[inline]
    fn mul(self, rhs: Quantity<M, L, T>) -> Quantity<M, L, T> {
        Quantity::new(self * rhs.v)
    }
}

/// `1.0 / seconds(0.5)` is a [`Frequency`] of 2 Hz.
impl<M, L, T> Div<Quantity<M, L, T>> for f64
where
    M: Neg,
    L: Neg,
    T: Neg,
{
    type Output = Quantity<Negate<M>, Negate<L>, Negate<T>>;

    #[inline]
    fn div(self, rhs: Quantity<M, L, T>) -> Self::Output {
        Quantity::new(self / rhs.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_exponent_algebra() {
        assert_eq!(Time::dim(), (0, 0, 1));
        assert_eq!(Force::dim(), (1, 1, -2));

        let a: Acceleration = Length::new(9.0) / (Time::new(3.0) * Time::new(1.0));
        assert_eq!(a.value(), 3.0);

        let f: Force = Mass::new(2.0) * a;
        assert_eq!(f.value(), 6.0);

        let e: Energy = f * Length::new(0.5);
        let p: Power = e / Time::new(1.5);
        assert_eq!(p.value(), 2.0);
    }

    #[test]
    fn scalar_division_inverts_dimension() {
        let hz: Frequency = 1.0 / Time::new(0.25);
        assert_eq!(hz.value(), 4.0);
    }

    #[test]
    fn ratio_of_like_quantities_is_plain_number() {
        let ratio: f64 = (Length::new(3.0) / Length::new(1.5)).into();
        assert_eq!(ratio, 2.0);
    }

    #[test]
    fn ordering_compares_values() {
        assert!(Time::new(1.0) < Time::new(2.0));
        assert!(Time::new(2.0) >= Time::new(2.0));
        assert_ne!(Time::new(1.0), Time::new(1.5));
        assert_eq!(-Time::new(1.0), Time::new(-1.0));
    }

    #[test]
    fn millisecond_round_trip() {
        assert_eq!(Time::from_millis(250).value(), 0.25);
        assert_eq!(Time::from_micros(1_500).as_millis(), 1);
        assert_eq!(Time::new(-1.0).as_millis(), 0);
    }

    #[test]
    fn cycle_count_survives_long_uptime() {
        const HZ: u32 = 16_000_000;
        assert_eq!(Time::from_cycles(HZ as u64 / 4, HZ).as_millis(), 250);

        // Two weeks of cycles: multiplying by 10^6 first would overflow u64 here.
        let two_weeks = 14 * 24 * 3_600u64;
        let t = Time::from_cycles(two_weeks * HZ as u64, HZ);
        assert_eq!(t.value(), two_weeks as f64);
    }
}
