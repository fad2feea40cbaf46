//! # API Layer
//!
//! Presentation of pricing results to a host.
//!
//! - [`report`]: Text and JSON rendering of an evaluation

pub mod report;

pub use report::{PricingReport, ReportFormat, format_currency, format_percent};
