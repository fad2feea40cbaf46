//! # Checked Arithmetic
//!
//! Traits and utilities for safe floating-point pricing arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`Rounding`] - Enum for explicit rounding direction
//! - [`round_dp`] - Decimal-place rounding backed by [`rust_decimal`]
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::value_objects::arithmetic::{CheckedArithmetic, ArithmeticError};
//!
//! let fare = 200.0_f64;
//! assert_eq!(fare.safe_div(4.0), Ok(50.0));
//! assert_eq!(fare.safe_div(0.0), Err(ArithmeticError::DivisionByZero));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic,
/// including overflow, division by zero, and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Value is too large to be represented as a decimal.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Operation produced NaN or an infinity.
    #[error("non-finite result")]
    NonFinite,

    /// Invalid value provided (e.g., negative when positive required).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounding direction for decimal-place rounding.
///
/// # Examples
///
/// ```
/// use flight_pricing::domain::value_objects::arithmetic::{Rounding, round_dp};
///
/// assert_eq!(round_dp(0.125, 2, Rounding::HalfEven).unwrap(), 0.12);
/// assert_eq!(round_dp(1.001, 2, Rounding::Up).unwrap(), 1.01);
/// assert_eq!(round_dp(1.009, 2, Rounding::Down).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rounding {
    /// Round towards zero (truncate).
    Down,
    /// Round away from zero.
    Up,
    /// Round to nearest, ties to the even digit (banker's rounding).
    #[default]
    HalfEven,
}

impl Rounding {
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Down => RoundingStrategy::ToZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "Down"),
            Self::Up => write!(f, "Up"),
            Self::HalfEven => write!(f, "HalfEven"),
        }
    }
}

/// Rounds a float to `dp` decimal places.
///
/// The binary value of `value` is carried into a [`Decimal`] as-is, so a
/// float such as `2.675` (stored slightly below the midpoint) rounds down,
/// and only exact binary midpoints are treated as ties.
///
/// # Errors
///
/// - `ArithmeticError::NonFinite` if `value` is NaN or infinite
/// - `ArithmeticError::Overflow` if `value` exceeds the decimal range
///
/// # Examples
///
/// ```
/// use flight_pricing::domain::value_objects::arithmetic::{Rounding, round_dp};
///
/// assert_eq!(round_dp(246.899_999_999_999_98, 2, Rounding::HalfEven).unwrap(), 246.9);
/// assert_eq!(round_dp(2.675, 2, Rounding::HalfEven).unwrap(), 2.67);
/// ```
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn round_dp(value: f64, dp: u32, rounding: Rounding) -> ArithmeticResult<f64> {
    if !value.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }

    let exact = Decimal::from_f64_retain(value).ok_or(ArithmeticError::Overflow)?;
    let rounded = exact.round_dp_with_strategy(dp, rounding.strategy());

    // Parsing the decimal text yields the nearest f64 to the rounded value.
    rounded
        .to_string()
        .parse::<f64>()
        .map_err(|_| ArithmeticError::InvalidValue("unparseable decimal"))
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// silently producing NaN or infinities.
///
/// # Implementation Notes
///
/// Implementors should ensure that:
/// - No operation panics
/// - Division by zero returns `Err(ArithmeticError::DivisionByZero)`
/// - A non-finite result returns `Err(ArithmeticError::NonFinite)`
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::NonFinite` if the result is not finite.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::NonFinite` if the result is not finite.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

#[inline]
fn finite(value: f64) -> ArithmeticResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::NonFinite)
    }
}

impl CheckedArithmetic for f64 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        finite(self + rhs)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        finite(self * rhs)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        finite(self / rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
            assert_eq!(ArithmeticError::NonFinite.to_string(), "non-finite result");
            assert_eq!(
                ArithmeticError::InvalidValue("negative").to_string(),
                "invalid value: negative"
            );
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(Rounding::Down.to_string(), "Down");
            assert_eq!(Rounding::Up.to_string(), "Up");
            assert_eq!(Rounding::HalfEven.to_string(), "HalfEven");
        }

        #[test]
        fn default_is_half_even() {
            assert_eq!(Rounding::default(), Rounding::HalfEven);
        }
    }

    mod round_dp_tests {
        use super::*;

        #[test]
        fn exact_binary_ties_go_to_even() {
            assert_eq!(round_dp(0.125, 2, Rounding::HalfEven).unwrap(), 0.12);
            assert_eq!(round_dp(0.375, 2, Rounding::HalfEven).unwrap(), 0.38);
        }

        #[test]
        fn below_midpoint_binary_rounds_down() {
            // 2.675 is stored as 2.67499999...
            assert_eq!(round_dp(2.675, 2, Rounding::HalfEven).unwrap(), 2.67);
        }

        #[test]
        fn float_noise_is_removed() {
            let noisy = 0.1 + 0.2;
            assert_eq!(round_dp(noisy, 2, Rounding::HalfEven).unwrap(), 0.3);
        }

        #[test]
        fn down_truncates() {
            assert_eq!(round_dp(1.009, 2, Rounding::Down).unwrap(), 1.0);
            assert_eq!(round_dp(-1.009, 2, Rounding::Down).unwrap(), -1.0);
        }

        #[test]
        fn up_rounds_away_from_zero() {
            assert_eq!(round_dp(1.001, 2, Rounding::Up).unwrap(), 1.01);
            assert_eq!(round_dp(-1.001, 2, Rounding::Up).unwrap(), -1.01);
        }

        #[test]
        fn integers_are_unchanged() {
            assert_eq!(round_dp(120.0, 2, Rounding::HalfEven).unwrap(), 120.0);
        }

        #[test]
        fn nan_is_rejected() {
            assert_eq!(
                round_dp(f64::NAN, 2, Rounding::HalfEven),
                Err(ArithmeticError::NonFinite)
            );
        }

        #[test]
        fn infinity_is_rejected() {
            assert_eq!(
                round_dp(f64::INFINITY, 2, Rounding::HalfEven),
                Err(ArithmeticError::NonFinite)
            );
        }

        #[test]
        fn out_of_decimal_range_overflows() {
            assert_eq!(
                round_dp(1e300, 2, Rounding::HalfEven),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod checked_arithmetic_f64 {
        use super::*;

        #[test]
        fn safe_add_works() {
            assert_eq!(171.9_f64.safe_add(75.0).unwrap(), 171.9 + 75.0);
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(f64::MAX.safe_add(f64::MAX), Err(ArithmeticError::NonFinite));
        }

        #[test]
        fn safe_mul_works() {
            assert_eq!(200.0_f64.safe_mul(0.9).unwrap(), 180.0);
        }

        #[test]
        fn safe_mul_nan_fails() {
            assert_eq!(f64::NAN.safe_mul(1.0), Err(ArithmeticError::NonFinite));
        }

        #[test]
        fn safe_div_works() {
            assert_eq!(50.0_f64.safe_div(200.0).unwrap(), 0.25);
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(100.0_f64.safe_div(0.0), Err(ArithmeticError::DivisionByZero));
            assert_eq!(
                100.0_f64.safe_div(-0.0),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }
}
