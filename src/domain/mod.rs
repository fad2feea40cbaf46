//! # Domain Layer
//!
//! The pricing model: value objects, the pricing engine, and the errors
//! they raise. Nothing here performs I/O or holds mutable state.
//!
//! - [`value_objects`]: Inputs, results, regimes and sweep types
//! - [`services`]: [`PricingEngine`](services::PricingEngine)
//! - [`errors`]: [`DomainError`](errors::DomainError)

pub mod errors;
pub mod services;
pub mod value_objects;
