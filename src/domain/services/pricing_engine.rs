//! # Pricing Engine
//!
//! Closed-form seat pricing and the revenue metrics derived from a price.
//!
//! This module provides:
//! - [`SeatPricer`]: Trait for anything that can quote a seat price
//! - [`PricingEngine`]: The seven-stage pricing pipeline
//!
//! # Pipeline
//!
//! ```text
//! base_fare → time → capacity → +duration → season → competitor → demand → floor → round
//! ```
//!
//! Every stage is evaluated in that order on a running price. The engine
//! holds no state; identical inputs always give identical prices.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::services::PricingEngine;
//! use flight_pricing::domain::value_objects::PricingInputs;
//!
//! let engine = PricingEngine::new();
//! let result = engine.evaluate(&PricingInputs::default()).unwrap();
//! assert_eq!(result.price(), 246.9);
//! assert_eq!(result.current_revenue(), 12345.0);
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, Rounding, round_dp};
use crate::domain::value_objects::booking_window::BookingWindow;
use crate::domain::value_objects::occupancy_band::OccupancyBand;
use crate::domain::value_objects::price_breakdown::PriceBreakdown;
use crate::domain::value_objects::pricing_inputs::PricingInputs;
use crate::domain::value_objects::pricing_result::{PricingResult, seat_revenue};

/// Duration fee per flight hour.
pub const DURATION_RATE_PER_HOUR: f64 = 25.0;

/// Relative premium over the competitor above which the discount applies.
pub const COMPETITIVE_THRESHOLD: f64 = 0.15;

/// Multiplier applied when priced above the competitive threshold.
pub const COMPETITIVE_DISCOUNT: f64 = 0.95;

/// Minimum price as a fraction of the base fare.
pub const PRICE_FLOOR_RATIO: f64 = 0.6;

/// Decimal places of a quoted price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Trait for quoting a seat price.
///
/// Sensitivity analysis is written against this trait so that it can be
/// driven by any pricing model, not only [`PricingEngine`].
pub trait SeatPricer {
    /// Returns the seat price for the given inputs.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the inputs are outside the model's domain.
    fn price(&self, inputs: &PricingInputs) -> DomainResult<f64>;
}

/// The seat pricing pipeline.
///
/// Stateless; construct once and share freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates a new pricing engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the pipeline and records every intermediate stage.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidInput` if [`PricingInputs::validate`] fails
    /// - `DomainError::Arithmetic` if an intermediate value is not finite
    pub fn explain(&self, inputs: &PricingInputs) -> DomainResult<PriceBreakdown> {
        inputs.validate()?;

        let base_fare = inputs.base_fare();
        let days = inputs.days_until_departure();

        let booking_window = BookingWindow::classify(days);
        let raw_time_multiplier = BookingWindow::raw_multiplier(days);
        let time_multiplier = BookingWindow::applied_multiplier(days);
        let mut price = base_fare.safe_mul(time_multiplier)?;

        let occupancy_rate = occupancy_rate(inputs)?;
        let occupancy_band = OccupancyBand::classify(occupancy_rate);
        let capacity_multiplier = OccupancyBand::multiplier(occupancy_rate);
        price = price.safe_mul(capacity_multiplier)?;

        let duration_surcharge = inputs.flight_duration().safe_mul(DURATION_RATE_PER_HOUR)?;
        price = price.safe_add(duration_surcharge)?;

        price = price.safe_mul(inputs.season_multiplier())?;
        let price_after_season = price;

        let competitor = inputs.competitor_price();
        let competitive_diff = (price - competitor).safe_div(competitor)?;
        let competitive_discount_applied = competitive_diff > COMPETITIVE_THRESHOLD;
        if competitive_discount_applied {
            price = price.safe_mul(COMPETITIVE_DISCOUNT)?;
        }

        price = price.safe_mul(inputs.demand_index())?;
        let price_after_demand = price;

        let price_floor = base_fare.safe_mul(PRICE_FLOOR_RATIO)?;
        let floor_applied = price < price_floor;
        let floored = price.max(price_floor);

        let price = round_dp(floored, PRICE_DECIMAL_PLACES, Rounding::HalfEven)?;

        tracing::debug!(
            price,
            %booking_window,
            %occupancy_band,
            competitive_discount_applied,
            floor_applied,
            "seat priced"
        );

        Ok(PriceBreakdown {
            base_fare,
            booking_window,
            raw_time_multiplier,
            time_multiplier,
            occupancy_rate,
            occupancy_band,
            capacity_multiplier,
            duration_surcharge,
            price_after_season,
            competitive_diff,
            competitive_discount_applied,
            price_after_demand,
            price_floor,
            floor_applied,
            price,
        })
    }

    /// Returns the seat price rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Same as [`PricingEngine::explain`].
    pub fn calculate_price(&self, inputs: &PricingInputs) -> DomainResult<f64> {
        self.explain(inputs).map(|breakdown| breakdown.price)
    }

    /// Derives revenue metrics for a price quoted on `inputs`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the inputs are invalid, or
    /// `DomainError::Arithmetic` if `price` is not finite.
    pub fn derive_metrics(
        &self,
        price: f64,
        inputs: &PricingInputs,
    ) -> DomainResult<PricingResult> {
        inputs.validate()?;

        let base_fare = inputs.base_fare();
        let occupancy_rate = occupancy_rate(inputs)?;
        let current_revenue = seat_revenue(price, inputs.seats_filled());
        let potential_max_revenue = seat_revenue(price, inputs.total_seats());
        let profit_margin = (price - base_fare)
            .safe_div(base_fare)?
            .safe_mul(100.0)?;

        Ok(PricingResult::new(
            price,
            occupancy_rate,
            current_revenue,
            potential_max_revenue,
            profit_margin,
        ))
    }

    /// Prices a seat and derives its revenue metrics.
    ///
    /// # Errors
    ///
    /// Same as [`PricingEngine::explain`].
    pub fn evaluate(&self, inputs: &PricingInputs) -> DomainResult<PricingResult> {
        let price = self.calculate_price(inputs)?;
        self.derive_metrics(price, inputs)
    }
}

impl SeatPricer for PricingEngine {
    fn price(&self, inputs: &PricingInputs) -> DomainResult<f64> {
        self.calculate_price(inputs)
    }
}

/// Seats sold as a percentage of capacity.
fn occupancy_rate(inputs: &PricingInputs) -> DomainResult<f64> {
    let rate = f64::from(inputs.seats_filled())
        .safe_div(f64::from(inputs.total_seats()))?
        .safe_mul(100.0)?;
    Ok(rate)
}
