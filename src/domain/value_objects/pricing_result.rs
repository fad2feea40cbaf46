//! # Pricing Result
//!
//! The quoted seat price together with the revenue metrics derived from it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Revenue from selling `seats` seats at `price`.
///
/// Shared by the metrics and the demand sweep so both produce bit-identical
/// values for the same price.
#[inline]
#[must_use]
pub fn seat_revenue(price: f64, seats: u32) -> f64 {
    price * f64::from(seats)
}

/// A priced seat and its revenue metrics.
///
/// Recomputed from scratch on every evaluation; it has no lifecycle of its
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PricingResult {
    /// Seat price rounded to two decimal places.
    price: f64,
    /// Seats sold as a percentage of capacity.
    occupancy_rate: f64,
    /// Revenue from the seats already sold at this price.
    current_revenue: f64,
    /// Revenue if every seat sold at this price.
    potential_max_revenue: f64,
    /// Price relative to the base fare, in percent.
    profit_margin: f64,
}

impl PricingResult {
    pub(crate) const fn new(
        price: f64,
        occupancy_rate: f64,
        current_revenue: f64,
        potential_max_revenue: f64,
        profit_margin: f64,
    ) -> Self {
        Self {
            price,
            occupancy_rate,
            current_revenue,
            potential_max_revenue,
            profit_margin,
        }
    }

    /// Returns the seat price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the occupancy rate in percent.
    #[inline]
    #[must_use]
    pub const fn occupancy_rate(&self) -> f64 {
        self.occupancy_rate
    }

    /// Returns the revenue from seats already sold.
    #[inline]
    #[must_use]
    pub const fn current_revenue(&self) -> f64 {
        self.current_revenue
    }

    /// Returns the revenue of a full flight at this price.
    #[inline]
    #[must_use]
    pub const fn potential_max_revenue(&self) -> f64 {
        self.potential_max_revenue
    }

    /// Returns the profit margin over the base fare in percent.
    #[inline]
    #[must_use]
    pub const fn profit_margin(&self) -> f64 {
        self.profit_margin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn seat_revenue_multiplies() {
        assert_eq!(seat_revenue(246.9, 0), 0.0);
        assert_eq!(seat_revenue(100.0, 180), 18000.0);
    }

    #[test]
    fn serializes_all_metrics() {
        let result = PricingResult::new(246.9, 27.5, 12345.0, 44442.0, 23.45);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["price"], 246.9);
        assert_eq!(json["occupancy_rate"], 27.5);
        assert_eq!(json["current_revenue"], 12345.0);
        assert_eq!(json["potential_max_revenue"], 44442.0);
        assert_eq!(json["profit_margin"], 23.45);
    }
}
