//! # Sensitivity Analysis
//!
//! One-factor sweeps over the pricing formula.
//!
//! [`SensitivityAnalyzer`] re-prices the seat at every point of a fixed
//! domain for one input while holding the other seven at their current
//! values. Sweeps are pure functions of the inputs: calling one twice
//! yields the same series.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::application::services::SensitivityAnalyzer;
//! use flight_pricing::domain::value_objects::{PricingInputs, SweepKind};
//!
//! let analyzer = SensitivityAnalyzer::standard();
//! let inputs = PricingInputs::default();
//!
//! let by_days = analyzer.sweep(&inputs, SweepKind::DaysUntilDeparture).unwrap();
//! assert_eq!(by_days.len(), 90);
//!
//! let by_seats = analyzer.sweep(&inputs, SweepKind::SeatsFilled).unwrap();
//! assert_eq!(by_seats.len(), inputs.total_seats() as usize + 1);
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::services::pricing_engine::{PricingEngine, SeatPricer};
use crate::domain::value_objects::pricing_inputs::PricingInputs;
use crate::domain::value_objects::pricing_result::seat_revenue;
use crate::domain::value_objects::sweep::{
    DAYS_SWEEP, DEMAND_SWEEP_SAMPLES, DEMAND_SWEEP_START, DEMAND_SWEEP_STOP, SweepKind,
    SweepMetric, SweepPoint, SweepSeries, linspace,
};

/// Generates sensitivity series with a [`SeatPricer`].
#[derive(Debug, Clone)]
pub struct SensitivityAnalyzer<P = PricingEngine> {
    pricer: P,
}

impl SensitivityAnalyzer<PricingEngine> {
    /// Creates an analyzer driven by the standard [`PricingEngine`].
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            pricer: PricingEngine::new(),
        }
    }
}

impl Default for SensitivityAnalyzer<PricingEngine> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<P: SeatPricer> SensitivityAnalyzer<P> {
    /// Creates an analyzer driven by `pricer`.
    #[must_use]
    pub fn new(pricer: P) -> Self {
        Self { pricer }
    }

    /// Returns the underlying pricer.
    #[inline]
    #[must_use]
    pub fn pricer(&self) -> &P {
        &self.pricer
    }

    /// Sweeps one input across its domain.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the fixed inputs are invalid,
    /// or any error the pricer raises at a sample point.
    pub fn sweep(&self, inputs: &PricingInputs, kind: SweepKind) -> DomainResult<SweepSeries> {
        inputs.validate()?;

        let samples: Vec<(f64, PricingInputs)> = match kind {
            SweepKind::DaysUntilDeparture => DAYS_SWEEP
                .map(|days| (f64::from(days), inputs.with_days_until_departure(days)))
                .collect(),
            SweepKind::SeatsFilled => (0..=inputs.total_seats())
                .map(|seats| (f64::from(seats), inputs.with_seats_filled(seats)))
                .collect(),
            SweepKind::DemandIndex => {
                linspace(DEMAND_SWEEP_START, DEMAND_SWEEP_STOP, DEMAND_SWEEP_SAMPLES)
                    .into_iter()
                    .map(|demand| (demand, inputs.with_demand_index(demand)))
                    .collect()
            }
        };

        let points = samples
            .iter()
            .map(|(x, varied)| self.sample(kind.metric(), *x, varied))
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::trace!(%kind, points = points.len(), "sweep generated");

        Ok(SweepSeries::new(kind, kind.current_x(inputs), points))
    }

    /// Price against days until departure, 1 to 90.
    ///
    /// # Errors
    ///
    /// Same as [`SensitivityAnalyzer::sweep`].
    pub fn days_until_departure(&self, inputs: &PricingInputs) -> DomainResult<SweepSeries> {
        self.sweep(inputs, SweepKind::DaysUntilDeparture)
    }

    /// Price against seats filled, 0 to capacity.
    ///
    /// # Errors
    ///
    /// Same as [`SensitivityAnalyzer::sweep`].
    pub fn seats_filled(&self, inputs: &PricingInputs) -> DomainResult<SweepSeries> {
        self.sweep(inputs, SweepKind::SeatsFilled)
    }

    /// Revenue against demand index, 50 samples from 0.5 to 2.0.
    ///
    /// # Errors
    ///
    /// Same as [`SensitivityAnalyzer::sweep`].
    pub fn demand_index(&self, inputs: &PricingInputs) -> DomainResult<SweepSeries> {
        self.sweep(inputs, SweepKind::DemandIndex)
    }

    /// Generates all three series in [`SweepKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Same as [`SensitivityAnalyzer::sweep`].
    pub fn all(&self, inputs: &PricingInputs) -> DomainResult<Vec<SweepSeries>> {
        SweepKind::ALL
            .into_iter()
            .map(|kind| self.sweep(inputs, kind))
            .collect()
    }

    fn sample(
        &self,
        metric: SweepMetric,
        x: f64,
        inputs: &PricingInputs,
    ) -> DomainResult<SweepPoint> {
        let price = self.pricer.price(inputs)?;
        let y = match metric {
            SweepMetric::Price => price,
            SweepMetric::Revenue => seat_revenue(price, inputs.seats_filled()),
        };
        Ok(SweepPoint { x, y })
    }
}
