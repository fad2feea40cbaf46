//! # Flight Pricing
//!
//! Dynamic seat pricing for a single flight.
//!
//! The price of a seat is a deterministic function of eight inputs: base
//! fare, booking window, seats sold, capacity, flight duration, season,
//! competitor fare and market demand. The engine applies a fixed pipeline
//! of multipliers, a competitive discount and a price floor, and derives
//! revenue metrics from the result. One-factor sensitivity sweeps re-price
//! the seat across the domain of a single input.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ api          report rendering                │
//! ├──────────────────────────────────────────────┤
//! │ application  sensitivity sweeps, errors      │
//! ├──────────────────────────────────────────────┤
//! │ domain       pricing engine, value objects   │
//! └──────────────────────────────────────────────┘
//!   config / logging: host configuration and tracing
//! ```
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

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
