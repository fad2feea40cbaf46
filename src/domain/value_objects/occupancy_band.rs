//! # Occupancy Band
//!
//! Yield management tiers keyed on the percentage of seats already sold.
//!
//! ```text
//! occupancy < 50        Low        0.9
//! 50 ≤ occupancy < 70   Moderate   1.0 + (occupancy − 50) × 0.01
//! occupancy ≥ 70        High       1.2 + (occupancy − 70) × 0.02
//! ```
//!
//! Each band's lower bound belongs to that band, so exactly 50% prices at
//! 1.0 (not 0.9) and exactly 70% at 1.2.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy (percent) at which the discount for empty flights ends.
const MODERATE_FROM_PCT: f64 = 50.0;

/// Occupancy (percent) at which scarcity pricing starts.
const HIGH_FROM_PCT: f64 = 70.0;

/// Multiplier for flights under half full.
const LOW_OCCUPANCY_MULTIPLIER: f64 = 0.9;

/// Yield management tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum OccupancyBand {
    /// Under 50% sold: flat discount to fill seats.
    Low = 0,
    /// 50% to under 70% sold: gradual increase.
    Moderate = 1,
    /// 70% or more sold: scarcity pricing.
    High = 2,
}

impl OccupancyBand {
    /// Classifies an occupancy rate expressed in percent.
    #[must_use]
    pub fn classify(occupancy_pct: f64) -> Self {
        if occupancy_pct < MODERATE_FROM_PCT {
            Self::Low
        } else if occupancy_pct < HIGH_FROM_PCT {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Returns the capacity multiplier for an occupancy rate in percent.
    #[must_use]
    pub fn multiplier(occupancy_pct: f64) -> f64 {
        match Self::classify(occupancy_pct) {
            Self::Low => LOW_OCCUPANCY_MULTIPLIER,
            Self::Moderate => 1.0 + (occupancy_pct - MODERATE_FROM_PCT) * 0.01,
            Self::High => 1.2 + (occupancy_pct - HIGH_FROM_PCT) * 0.02,
        }
    }
}

impl fmt::Display for OccupancyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}
