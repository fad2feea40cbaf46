//! # Pricing Inputs
//!
//! The eight scalar factors a seat price is derived from.
//!
//! [`PricingInputs`] is an immutable `Copy` value. The `with_*` methods
//! return a modified copy, which is how sensitivity sweeps vary one factor
//! while holding the rest fixed.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::value_objects::PricingInputs;
//!
//! let inputs = PricingInputs::default()
//!     .with_base_fare(250.0)
//!     .with_days_until_departure(5);
//! assert_eq!(inputs.base_fare(), 250.0);
//! assert!(inputs.validate().is_ok());
//!
//! let overbooked = inputs.with_seats_filled(500).with_total_seats(180);
//! assert!(overbooked.validate().is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default base fare in currency units.
const DEFAULT_BASE_FARE: f64 = 200.0;

/// Default booking window in days.
const DEFAULT_DAYS_UNTIL_DEPARTURE: u32 = 30;

/// Default number of booked seats.
const DEFAULT_SEATS_FILLED: u32 = 50;

/// Default aircraft capacity.
const DEFAULT_TOTAL_SEATS: u32 = 180;

/// Default block time in hours.
const DEFAULT_FLIGHT_DURATION: f64 = 3.0;

/// Default competitor average fare.
const DEFAULT_COMPETITOR_PRICE: f64 = 250.0;

/// Inputs to the seat pricing formula.
///
/// Only the relations the formula depends on are validated (see
/// [`PricingInputs::validate`]). Host-facing ranges such as "base fare
/// between 100 and 500" are a presentation concern handled by
/// [`InputBounds`](crate::config::InputBounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PricingInputs {
    /// Base fare covering operational cost.
    base_fare: f64,
    /// Days between booking and departure.
    days_until_departure: u32,
    /// Seats already sold.
    seats_filled: u32,
    /// Aircraft seat capacity.
    total_seats: u32,
    /// Flight duration in hours.
    flight_duration: f64,
    /// Seasonal demand multiplier.
    season_multiplier: f64,
    /// Average competitor fare on the route.
    competitor_price: f64,
    /// Overall market demand multiplier.
    demand_index: f64,
}

impl Default for PricingInputs {
    /// Returns the calculator's reference inputs: $200 fare, 30 days out,
    /// 50 of 180 seats filled, 3 hours, neutral season and demand, $250
    /// competitor fare.
    fn default() -> Self {
        Self {
            base_fare: DEFAULT_BASE_FARE,
            days_until_departure: DEFAULT_DAYS_UNTIL_DEPARTURE,
            seats_filled: DEFAULT_SEATS_FILLED,
            total_seats: DEFAULT_TOTAL_SEATS,
            flight_duration: DEFAULT_FLIGHT_DURATION,
            season_multiplier: 1.0,
            competitor_price: DEFAULT_COMPETITOR_PRICE,
            demand_index: 1.0,
        }
    }
}

impl PricingInputs {
    /// Sets the base fare.
    #[must_use]
    pub fn with_base_fare(mut self, base_fare: f64) -> Self {
        self.base_fare = base_fare;
        self
    }

    /// Sets the number of days until departure.
    #[must_use]
    pub fn with_days_until_departure(mut self, days: u32) -> Self {
        self.days_until_departure = days;
        self
    }

    /// Sets the number of seats already sold.
    #[must_use]
    pub fn with_seats_filled(mut self, seats_filled: u32) -> Self {
        self.seats_filled = seats_filled;
        self
    }

    /// Sets the aircraft capacity.
    #[must_use]
    pub fn with_total_seats(mut self, total_seats: u32) -> Self {
        self.total_seats = total_seats;
        self
    }

    /// Sets the flight duration in hours.
    #[must_use]
    pub fn with_flight_duration(mut self, hours: f64) -> Self {
        self.flight_duration = hours;
        self
    }

    /// Sets the seasonal multiplier.
    #[must_use]
    pub fn with_season_multiplier(mut self, multiplier: f64) -> Self {
        self.season_multiplier = multiplier;
        self
    }

    /// Sets the competitor average fare.
    #[must_use]
    pub fn with_competitor_price(mut self, price: f64) -> Self {
        self.competitor_price = price;
        self
    }

    /// Sets the demand index.
    #[must_use]
    pub fn with_demand_index(mut self, index: f64) -> Self {
        self.demand_index = index;
        self
    }

    /// Returns the base fare.
    #[inline]
    #[must_use]
    pub const fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Returns the number of days until departure.
    #[inline]
    #[must_use]
    pub const fn days_until_departure(&self) -> u32 {
        self.days_until_departure
    }

    /// Returns the number of seats already sold.
    #[inline]
    #[must_use]
    pub const fn seats_filled(&self) -> u32 {
        self.seats_filled
    }

    /// Returns the aircraft capacity.
    #[inline]
    #[must_use]
    pub const fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns the flight duration in hours.
    #[inline]
    #[must_use]
    pub const fn flight_duration(&self) -> f64 {
        self.flight_duration
    }

    /// Returns the seasonal multiplier.
    #[inline]
    #[must_use]
    pub const fn season_multiplier(&self) -> f64 {
        self.season_multiplier
    }

    /// Returns the competitor average fare.
    #[inline]
    #[must_use]
    pub const fn competitor_price(&self) -> f64 {
        self.competitor_price
    }

    /// Returns the demand index.
    #[inline]
    #[must_use]
    pub const fn demand_index(&self) -> f64 {
        self.demand_index
    }

    /// Checks that the formula is defined for these inputs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if:
    /// - `base_fare` or `competitor_price` is not strictly positive
    /// - `total_seats` is zero
    /// - `seats_filled` exceeds `total_seats`
    /// - any real-valued input is NaN or infinite
    pub fn validate(&self) -> DomainResult<()> {
        require_positive("base_fare", self.base_fare)?;
        require_positive("competitor_price", self.competitor_price)?;
        require_finite("flight_duration", self.flight_duration)?;
        require_finite("season_multiplier", self.season_multiplier)?;
        require_finite("demand_index", self.demand_index)?;

        if self.total_seats == 0 {
            return Err(DomainError::invalid_input(
                "total_seats",
                "must be greater than zero",
            ));
        }

        if self.seats_filled > self.total_seats {
            return Err(DomainError::invalid_input(
                "seats_filled",
                format!(
                    "must not exceed total_seats ({} > {})",
                    self.seats_filled, self.total_seats
                ),
            ));
        }

        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> DomainResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::invalid_input(
            field,
            format!("must be finite, got {value}"),
        ))
    }
}

fn require_positive(field: &'static str, value: f64) -> DomainResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid_input(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}
