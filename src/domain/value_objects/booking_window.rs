//! # Booking Window
//!
//! Classification of how far ahead of departure a seat is being sold, and
//! the time multiplier each regime applies.
//!
//! ```text
//! days ≤ 7        LastMinute   1.5 + (7 − days) × 0.1
//! 8 ≤ days ≤ 21   Advance      1.2 + (21 − days) × 0.02
//! days > 21       EarlyBird    1.0 − (days − 21) × 0.005
//! ```
//!
//! The regimes are not joined smoothly: day 7 prices at 1.5 and day 8 at
//! 1.46. The applied multiplier never drops below [`TIME_MULTIPLIER_FLOOR`].
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::value_objects::booking_window::BookingWindow;
//!
//! assert_eq!(BookingWindow::classify(7), BookingWindow::LastMinute);
//! assert_eq!(BookingWindow::classify(8), BookingWindow::Advance);
//! assert_eq!(BookingWindow::applied_multiplier(7), 1.5);
//! assert_eq!(BookingWindow::applied_multiplier(90), 0.8);
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest time multiplier ever applied to the fare.
pub const TIME_MULTIPLIER_FLOOR: f64 = 0.8;

/// Last day (inclusive) of the last-minute surge regime.
const LAST_MINUTE_MAX_DAYS: u32 = 7;

/// Last day (inclusive) of the advance booking regime.
const ADVANCE_MAX_DAYS: u32 = 21;

/// Booking window regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BookingWindow {
    /// Seven days or fewer before departure: surge pricing.
    LastMinute = 0,
    /// Eight to twenty-one days out: gradual increase.
    Advance = 1,
    /// More than three weeks out: early-bird discount.
    EarlyBird = 2,
}

impl BookingWindow {
    /// Classifies a booking made `days` before departure.
    #[inline]
    #[must_use]
    pub const fn classify(days: u32) -> Self {
        if days <= LAST_MINUTE_MAX_DAYS {
            Self::LastMinute
        } else if days <= ADVANCE_MAX_DAYS {
            Self::Advance
        } else {
            Self::EarlyBird
        }
    }

    /// Returns the regime's multiplier for `days` before the floor is applied.
    ///
    /// The early-bird discount decreases without bound; see
    /// [`BookingWindow::applied_multiplier`] for the floored value.
    #[must_use]
    pub fn raw_multiplier(days: u32) -> f64 {
        match Self::classify(days) {
            Self::LastMinute => 1.5 + f64::from(LAST_MINUTE_MAX_DAYS.saturating_sub(days)) * 0.1,
            Self::Advance => 1.2 + f64::from(ADVANCE_MAX_DAYS.saturating_sub(days)) * 0.02,
            Self::EarlyBird => 1.0 - f64::from(days.saturating_sub(ADVANCE_MAX_DAYS)) * 0.005,
        }
    }

    /// Returns the multiplier actually applied to the fare for `days`.
    #[must_use]
    pub fn applied_multiplier(days: u32) -> f64 {
        Self::raw_multiplier(days).max(TIME_MULTIPLIER_FLOOR)
    }

    /// Returns `true` for the last-minute surge regime.
    #[inline]
    #[must_use]
    pub const fn is_last_minute(self) -> bool {
        matches!(self, Self::LastMinute)
    }
}

impl fmt::Display for BookingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastMinute => write!(f, "LastMinute"),
            Self::Advance => write!(f, "Advance"),
            Self::EarlyBird => write!(f, "EarlyBird"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    mod classification {
        use super::*;

        #[test]
        fn regime_boundaries() {
            assert_eq!(BookingWindow::classify(0), BookingWindow::LastMinute);
            assert_eq!(BookingWindow::classify(7), BookingWindow::LastMinute);
            assert_eq!(BookingWindow::classify(8), BookingWindow::Advance);
            assert_eq!(BookingWindow::classify(21), BookingWindow::Advance);
            assert_eq!(BookingWindow::classify(22), BookingWindow::EarlyBird);
            assert_eq!(BookingWindow::classify(90), BookingWindow::EarlyBird);
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(BookingWindow::LastMinute.to_string(), "LastMinute");
            assert_eq!(BookingWindow::Advance.to_string(), "Advance");
            assert_eq!(BookingWindow::EarlyBird.to_string(), "EarlyBird");
        }

        #[test]
        fn serde_uses_snake_case() {
            let json = serde_json::to_string(&BookingWindow::LastMinute).unwrap();
            assert_eq!(json, "\"last_minute\"");
        }
    }

    mod multipliers {
        use super::*;

        #[test]
        fn departure_day_surges_to_2_2() {
            assert!(approx_eq(BookingWindow::applied_multiplier(0), 2.2));
        }

        #[test]
        fn day_seven_is_exactly_1_5() {
            assert_eq!(BookingWindow::applied_multiplier(7), 1.5);
        }

        #[test]
        fn day_eight_drops_to_1_46() {
            let day_7 = BookingWindow::applied_multiplier(7);
            let day_8 = BookingWindow::applied_multiplier(8);
            assert!(approx_eq(day_8, 1.46));
            assert!(day_8 < day_7);
        }

        #[test]
        fn day_twenty_one_is_1_2() {
            assert_eq!(BookingWindow::applied_multiplier(21), 1.2);
        }

        #[test]
        fn day_twenty_two_drops_to_0_995() {
            assert!(approx_eq(BookingWindow::applied_multiplier(22), 0.995));
        }

        #[test]
        fn day_thirty_is_0_955() {
            assert!(approx_eq(BookingWindow::applied_multiplier(30), 0.955));
        }

        #[test]
        fn early_bird_is_floored() {
            assert!(approx_eq(BookingWindow::raw_multiplier(90), 0.655));
            assert_eq!(BookingWindow::applied_multiplier(90), TIME_MULTIPLIER_FLOOR);
        }

        #[test]
        fn non_increasing_within_each_regime() {
            for range in [0..=7u32, 8..=21, 22..=90] {
                let values: Vec<f64> = range.map(BookingWindow::applied_multiplier).collect();
                assert!(values.windows(2).all(|w| w[1] <= w[0]));
            }
        }
    }
}
