//! Numeric capability required by the geometry engine.
//!
//! The engine is generic over the scalar it computes with. `f64` is always
//! available; an arbitrary-precision decimal implementation is provided by
//! `rust_decimal` behind the `decimal` feature.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Arithmetic, comparison, trigonometry and rounding over one scalar type.
///
/// Angles passed to the trigonometric functions are in radians.
///
/// # Examples
///
/// ```
/// use geotile_types::real::Real;
///
/// fn half_turn<T: Real>() -> T {
///     T::pi()
/// }
///
/// assert_eq!(half_turn::<f64>(), std::f64::consts::PI);
/// assert_eq!(<f64 as Real>::from_scaled(1_609_344, 6), 1.609344);
/// ```
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    fn from_i32(n: i32) -> Self;

    /// Builds `mantissa × 10^-scale`.
    ///
    /// Exact for decimal types, correctly rounded for binary floats, so
    /// constants written as decimal literals keep their literal value.
    fn from_scaled(mantissa: i64, scale: u32) -> Self;

    fn pi() -> Self;

    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    fn asin(self) -> Self;

    fn floor(self) -> Self;

    fn ceil(self) -> Self;

    fn abs(self) -> Self;

    /// Division that reports a zero divisor or an out-of-range quotient as
    /// `None` instead of producing infinities or panicking.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Integral conversion, `None` when the value does not fit or is not finite.
    fn to_i64(self) -> Option<i64>;

    /// Lossy conversion used for diagnostics and `geo` interop.
    fn to_f64(self) -> f64;

    fn is_finite(self) -> bool {
        true
    }

    fn half() -> Self {
        Self::from_scaled(5, 1)
    }

    fn two() -> Self {
        Self::from_i32(2)
    }
}

impl Real for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_i32(n: i32) -> Self {
        f64::from(n)
    }

    #[inline]
    fn from_scaled(mantissa: i64, scale: u32) -> Self {
        // i32 exponent covers every scale a decimal literal can carry
        mantissa as f64 / 10f64.powi(scale as i32)
    }

    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn asin(self) -> Self {
        f64::asin(self)
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        f64::ceil(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        let quotient = self / rhs;
        quotient.is_finite().then_some(quotient)
    }

    fn to_i64(self) -> Option<i64> {
        if self.is_finite() && self >= i64::MIN as f64 && self <= i64::MAX as f64 {
            Some(self as i64)
        } else {
            None
        }
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

#[cfg(feature = "decimal")]
mod decimal {
    use super::Real;
    use rust_decimal::Decimal;
    use rust_decimal::MathematicalOps;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

    /// Newton refinement steps applied to the `f64` seed in [`Real::asin`].
    const ASIN_NEWTON_STEPS: usize = 4;

    impl Real for Decimal {
        #[inline]
        fn zero() -> Self {
            Decimal::ZERO
        }

        #[inline]
        fn from_i32(n: i32) -> Self {
            Decimal::from(n)
        }

        #[inline]
        fn from_scaled(mantissa: i64, scale: u32) -> Self {
            Decimal::new(mantissa, scale)
        }

        #[inline]
        fn pi() -> Self {
            Decimal::PI
        }

        fn sqrt(self) -> Self {
            // Only negative input has no root; callers square before rooting.
            MathematicalOps::sqrt(&self).unwrap_or(Decimal::ZERO)
        }

        fn sin(self) -> Self {
            MathematicalOps::sin(&self)
        }

        fn cos(self) -> Self {
            MathematicalOps::cos(&self)
        }

        /// Seeds from the `f64` arcsine and refines with Newton's method on
        /// `sin(y) - x`, since `rust_decimal` has no inverse trigonometry.
        fn asin(self) -> Self {
            let seed = ToPrimitive::to_f64(&self).unwrap_or(0.0).asin();
            let mut y = Decimal::from_f64(seed).unwrap_or(Decimal::ZERO);
            for _ in 0..ASIN_NEWTON_STEPS {
                let slope = MathematicalOps::cos(&y);
                if slope.is_zero() {
                    break;
                }
                y -= (MathematicalOps::sin(&y) - self) / slope;
            }
            y
        }

        #[inline]
        fn floor(self) -> Self {
            Decimal::floor(&self)
        }

        #[inline]
        fn ceil(self) -> Self {
            Decimal::ceil(&self)
        }

        #[inline]
        fn abs(self) -> Self {
            Decimal::abs(&self)
        }

        #[inline]
        fn checked_div(self, rhs: Self) -> Option<Self> {
            Decimal::checked_div(self, rhs)
        }

        fn to_i64(self) -> Option<i64> {
            ToPrimitive::to_i64(&self)
        }

        fn to_f64(self) -> f64 {
            ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
        }
    }
}
