//! # Price Breakdown
//!
//! Stage-by-stage record of one pass through the pricing pipeline.
//!
//! ```text
//! base_fare
//!   × time multiplier        (booking window, floored at 0.8)
//!   × capacity multiplier    (occupancy band)
//!   + duration surcharge     (25 per flight hour)
//!   × season multiplier
//!   × 0.95 if > 15% above competitor
//!   × demand index
//!   max(base_fare × 0.6, ·)
//!   round to 2 dp
//! ```

use crate::domain::value_objects::booking_window::BookingWindow;
use crate::domain::value_objects::occupancy_band::OccupancyBand;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Intermediate values of a price evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PriceBreakdown {
    /// Fare the pipeline was seeded with.
    pub base_fare: f64,
    /// Booking window regime for the days until departure.
    pub booking_window: BookingWindow,
    /// Regime multiplier before the floor.
    pub raw_time_multiplier: f64,
    /// Multiplier applied after the floor.
    pub time_multiplier: f64,
    /// Seats sold as a percentage of capacity.
    pub occupancy_rate: f64,
    /// Yield management tier.
    pub occupancy_band: OccupancyBand,
    /// Capacity multiplier for the tier.
    pub capacity_multiplier: f64,
    /// Flat per-hour duration fee added to the price.
    pub duration_surcharge: f64,
    /// Running price after the seasonal multiplier.
    pub price_after_season: f64,
    /// `(price − competitor) / competitor` at the competitive stage.
    pub competitive_diff: f64,
    /// Whether the 5% competitive discount was taken.
    pub competitive_discount_applied: bool,
    /// Running price after the demand multiplier.
    pub price_after_demand: f64,
    /// Minimum price for this base fare.
    pub price_floor: f64,
    /// Whether the floor raised the price.
    pub floor_applied: bool,
    /// Final price rounded to two decimal places.
    pub price: f64,
}
