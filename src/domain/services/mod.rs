//! # Domain Services
//!
//! Domain services encapsulating pricing logic that doesn't naturally
//! belong to a single value object.
//!
//! ## Services
//!
//! - [`pricing_engine::PricingEngine`]: Seat pricing and revenue metrics

pub mod pricing_engine;

pub use pricing_engine::{PricingEngine, SeatPricer};
