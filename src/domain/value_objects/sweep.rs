//! # Sweep Series
//!
//! Value types for one-factor sensitivity sweeps.
//!
//! A sweep holds every input fixed except one, varies that one over a
//! fixed domain, and records the formula's output at each point:
//!
//! | Kind                 | Domain                         | Output  |
//! |----------------------|--------------------------------|---------|
//! | `DaysUntilDeparture` | 1..=90, step 1                 | price   |
//! | `SeatsFilled`        | 0..=total_seats, step 1        | price   |
//! | `DemandIndex`        | 50 evenly spaced in [0.5, 2.0] | revenue |
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::value_objects::sweep::{linspace, SweepKind, SweepMetric};
//!
//! let grid = linspace(0.5, 2.0, 50);
//! assert_eq!(grid.first(), Some(&0.5));
//! assert_eq!(grid.last(), Some(&2.0));
//! assert_eq!(SweepKind::DemandIndex.metric(), SweepMetric::Revenue);
//! ```

use crate::domain::value_objects::pricing_inputs::PricingInputs;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Booking windows swept by [`SweepKind::DaysUntilDeparture`].
pub const DAYS_SWEEP: RangeInclusive<u32> = 1..=90;

/// Lowest demand index in the demand sweep.
pub const DEMAND_SWEEP_START: f64 = 0.5;

/// Highest demand index in the demand sweep.
pub const DEMAND_SWEEP_STOP: f64 = 2.0;

/// Number of demand index samples.
pub const DEMAND_SWEEP_SAMPLES: u32 = 50;

/// Returns `num` evenly spaced values over `[start, stop]`.
///
/// The first value is exactly `start` and the last exactly `stop`.
/// Zero samples yield an empty vector and one sample yields `[start]`.
#[must_use]
pub fn linspace(start: f64, stop: f64, num: u32) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / f64::from(num - 1);
            (0..num)
                .map(|i| {
                    if i == num - 1 {
                        stop
                    } else {
                        f64::from(i) * step + start
                    }
                })
                .collect()
        }
    }
}

/// Which input a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SweepKind {
    /// Price against booking window.
    DaysUntilDeparture,
    /// Price against seats sold.
    SeatsFilled,
    /// Revenue against market demand.
    DemandIndex,
}

impl SweepKind {
    /// All sweep kinds in display order.
    pub const ALL: [Self; 3] = [Self::DaysUntilDeparture, Self::SeatsFilled, Self::DemandIndex];

    /// Returns the output metric of this sweep.
    #[inline]
    #[must_use]
    pub const fn metric(self) -> SweepMetric {
        match self {
            Self::DaysUntilDeparture | Self::SeatsFilled => SweepMetric::Price,
            Self::DemandIndex => SweepMetric::Revenue,
        }
    }

    /// Returns the value of the swept input in `inputs`.
    #[must_use]
    pub fn current_x(self, inputs: &PricingInputs) -> f64 {
        match self {
            Self::DaysUntilDeparture => f64::from(inputs.days_until_departure()),
            Self::SeatsFilled => f64::from(inputs.seats_filled()),
            Self::DemandIndex => inputs.demand_index(),
        }
    }

    /// Returns the x-axis label.
    #[must_use]
    pub const fn x_label(self) -> &'static str {
        match self {
            Self::DaysUntilDeparture => "Days Until Departure",
            Self::SeatsFilled => "Seats Filled",
            Self::DemandIndex => "Demand Index",
        }
    }

    /// Returns the chart title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DaysUntilDeparture => "Price vs Booking Window",
            Self::SeatsFilled => "Price vs Occupancy (Yield Management)",
            Self::DemandIndex => "Revenue vs Market Demand",
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DaysUntilDeparture => write!(f, "days_until_departure"),
            Self::SeatsFilled => write!(f, "seats_filled"),
            Self::DemandIndex => write!(f, "demand_index"),
        }
    }
}

/// What a sweep's y-values measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SweepMetric {
    /// Seat price.
    Price,
    /// Seat price times seats sold.
    Revenue,
}

impl SweepMetric {
    /// Returns the y-axis label.
    #[must_use]
    pub const fn y_label(self) -> &'static str {
        match self {
            Self::Price => "Price ($)",
            Self::Revenue => "Revenue ($)",
        }
    }
}

/// One `(x, y)` sample of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SweepPoint {
    /// Value of the swept input.
    pub x: f64,
    /// Output metric at `x`.
    pub y: f64,
}

/// An ordered sensitivity series ready for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SweepSeries {
    kind: SweepKind,
    metric: SweepMetric,
    /// Value of the swept input in the fixed inputs (the "current" marker).
    current_x: f64,
    points: Vec<SweepPoint>,
}

impl SweepSeries {
    /// Creates a series for `kind` marked at `current_x`.
    #[must_use]
    pub fn new(kind: SweepKind, current_x: f64, points: Vec<SweepPoint>) -> Self {
        Self {
            kind,
            metric: kind.metric(),
            current_x,
            points,
        }
    }

    /// Returns the swept input.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> SweepKind {
        self.kind
    }

    /// Returns the output metric.
    #[inline]
    #[must_use]
    pub const fn metric(&self) -> SweepMetric {
        self.metric
    }

    /// Returns the current value of the swept input.
    #[inline]
    #[must_use]
    pub const fn current_x(&self) -> f64 {
        self.current_x
    }

    /// Returns the samples in domain order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Returns the number of samples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no samples.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the x-values.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Iterates over the y-values.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    mod linspace_tests {
        use super::*;

        #[test]
        fn demand_grid_endpoints_and_count() {
            let grid = linspace(DEMAND_SWEEP_START, DEMAND_SWEEP_STOP, DEMAND_SWEEP_SAMPLES);
            assert_eq!(grid.len(), 50);
            assert_eq!(grid[0], 0.5);
            assert_eq!(grid[49], 2.0);
        }

        #[test]
        fn uniform_step() {
            let grid = linspace(0.5, 2.0, 50);
            let step = 1.5 / 49.0;
            for pair in grid.windows(2) {
                assert!((pair[1] - pair[0] - step).abs() < 1e-12);
            }
        }

        #[test]
        fn strictly_increasing() {
            let grid = linspace(0.5, 2.0, 50);
            assert!(grid.windows(2).all(|w| w[1] > w[0]));
        }

        #[test]
        fn degenerate_counts() {
            assert!(linspace(0.0, 1.0, 0).is_empty());
            assert_eq!(linspace(0.7, 1.0, 1), vec![0.7]);
            assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
        }
    }

    mod kinds {
        use super::*;

        #[test]
        fn only_demand_reports_revenue() {
            assert_eq!(SweepKind::DaysUntilDeparture.metric(), SweepMetric::Price);
            assert_eq!(SweepKind::SeatsFilled.metric(), SweepMetric::Price);
            assert_eq!(SweepKind::DemandIndex.metric(), SweepMetric::Revenue);
        }

        #[test]
        fn current_x_reads_swept_input() {
            let inputs = PricingInputs::default()
                .with_days_until_departure(12)
                .with_seats_filled(77)
                .with_demand_index(1.3);
            assert_eq!(SweepKind::DaysUntilDeparture.current_x(&inputs), 12.0);
            assert_eq!(SweepKind::SeatsFilled.current_x(&inputs), 77.0);
            assert_eq!(SweepKind::DemandIndex.current_x(&inputs), 1.3);
        }

        #[test]
        fn labels() {
            assert_eq!(SweepKind::SeatsFilled.x_label(), "Seats Filled");
            assert_eq!(SweepKind::DemandIndex.title(), "Revenue vs Market Demand");
            assert_eq!(SweepMetric::Revenue.y_label(), "Revenue ($)");
        }

        #[test]
        fn display_matches_serde_name() {
            for kind in SweepKind::ALL {
                let json = serde_json::to_string(&kind).unwrap();
                assert_eq!(json, format!("\"{kind}\""));
            }
        }
    }

    mod series {
        use super::*;

        #[test]
        fn accessors() {
            let series = SweepSeries::new(
                SweepKind::DemandIndex,
                1.0,
                vec![SweepPoint { x: 0.5, y: 10.0 }, SweepPoint { x: 2.0, y: 40.0 }],
            );
            assert_eq!(series.metric(), SweepMetric::Revenue);
            assert_eq!(series.len(), 2);
            assert!(!series.is_empty());
            assert_eq!(series.xs().collect::<Vec<_>>(), vec![0.5, 2.0]);
            assert_eq!(series.ys().collect::<Vec<_>>(), vec![10.0, 40.0]);
        }
    }
}
