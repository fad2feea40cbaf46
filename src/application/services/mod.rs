//! # Application Services
//!
//! Services that orchestrate the pricing domain for a host.
//!
//! This module provides:
//! - [`SensitivityAnalyzer`]: One-factor sweeps over the pricing formula

pub mod sensitivity;

pub use sensitivity::SensitivityAnalyzer;
