//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Inputs and Outputs
//!
//! - [`PricingInputs`]: The eight factors a seat price depends on
//! - [`PricingResult`]: Price plus derived revenue metrics
//! - [`PriceBreakdown`]: Intermediate values of one evaluation
//! - [`SweepSeries`]: One-factor sensitivity series
//!
//! ## Regimes
//!
//! - [`BookingWindow`]: Last-minute, advance, or early-bird booking
//! - [`OccupancyBand`]: Yield management tier
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`Rounding`]: Enum for explicit rounding direction

pub mod arithmetic;
pub mod booking_window;
pub mod occupancy_band;
pub mod price_breakdown;
pub mod pricing_inputs;
pub mod pricing_result;
pub mod sweep;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, Rounding, round_dp};
pub use booking_window::BookingWindow;
pub use occupancy_band::OccupancyBand;
pub use price_breakdown::PriceBreakdown;
pub use pricing_inputs::PricingInputs;
pub use pricing_result::{PricingResult, seat_revenue};
pub use sweep::{SweepKind, SweepMetric, SweepPoint, SweepSeries};
