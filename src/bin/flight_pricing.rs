//! Command-line seat pricing calculator.
//!
//! ```text
//! flight-pricing --base-fare 320 --days-until-departure 5 --explain
//! flight-pricing --sweep all --format json
//! ```
//!
//! Unset inputs fall back to the configured defaults. Inputs outside the
//! configured bounds are clamped unless `--no-clamp` is given.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flight_pricing::api::report::{PricingReport, ReportFormat};
use flight_pricing::application::services::SensitivityAnalyzer;
use flight_pricing::config::AppConfig;
use flight_pricing::domain::services::PricingEngine;
use flight_pricing::domain::value_objects::{PricingInputs, SweepKind};
use flight_pricing::logging::init_tracing;
use std::path::PathBuf;

/// Sensitivity series to include in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SweepArg {
    /// Price against days until departure.
    Days,
    /// Price against seats filled.
    Seats,
    /// Revenue against demand index.
    Demand,
    /// All three series.
    All,
}

impl SweepArg {
    fn kinds(self) -> Vec<SweepKind> {
        match self {
            Self::Days => vec![SweepKind::DaysUntilDeparture],
            Self::Seats => vec![SweepKind::SeatsFilled],
            Self::Demand => vec![SweepKind::DemandIndex],
            Self::All => SweepKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "flight-pricing", version, about = "Dynamic flight seat pricing")]
struct Cli {
    /// Base fare covering operational cost.
    #[arg(long)]
    base_fare: Option<f64>,

    /// Days between booking and departure.
    #[arg(long)]
    days_until_departure: Option<u32>,

    /// Seats already sold.
    #[arg(long)]
    seats_filled: Option<u32>,

    /// Aircraft capacity.
    #[arg(long)]
    total_seats: Option<u32>,

    /// Flight duration in hours.
    #[arg(long)]
    flight_duration: Option<f64>,

    /// Seasonal multiplier.
    #[arg(long)]
    season_multiplier: Option<f64>,

    /// Competitor average fare.
    #[arg(long)]
    competitor_price: Option<f64>,

    /// Market demand index.
    #[arg(long)]
    demand_index: Option<f64>,

    /// Include sensitivity series.
    #[arg(long, value_enum)]
    sweep: Option<SweepArg>,

    /// Include the stage-by-stage price breakdown.
    #[arg(long)]
    explain: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Price the inputs as given instead of clamping them to the configured bounds.
    #[arg(long)]
    no_clamp: bool,

    /// Configuration file (defaults to ./flight_pricing.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, defaults: PricingInputs) -> PricingInputs {
        let mut inputs = defaults;
        if let Some(v) = self.base_fare {
            inputs = inputs.with_base_fare(v);
        }
        if let Some(v) = self.days_until_departure {
            inputs = inputs.with_days_until_departure(v);
        }
        if let Some(v) = self.seats_filled {
            inputs = inputs.with_seats_filled(v);
        }
        if let Some(v) = self.total_seats {
            inputs = inputs.with_total_seats(v);
        }
        if let Some(v) = self.flight_duration {
            inputs = inputs.with_flight_duration(v);
        }
        if let Some(v) = self.season_multiplier {
            inputs = inputs.with_season_multiplier(v);
        }
        if let Some(v) = self.competitor_price {
            inputs = inputs.with_competitor_price(v);
        }
        if let Some(v) = self.demand_index {
            inputs = inputs.with_demand_index(v);
        }
        inputs
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging).context("initialising logging")?;

    let requested = cli.apply_overrides(config.defaults);
    let (inputs, clamped) = if cli.no_clamp {
        (requested, Vec::new())
    } else {
        config.bounds.clamp(&requested)
    };
    for field in &clamped {
        tracing::warn!(
            field = field.field,
            requested = field.requested,
            applied = field.applied,
            "input outside configured bounds, clamped"
        );
    }

    let engine = PricingEngine::new();
    let result = engine.evaluate(&inputs).context("pricing seat")?;
    tracing::info!(price = result.price(), "seat priced");

    let mut report = PricingReport::new(inputs, result).with_clamped(clamped);

    if cli.explain {
        report = report.with_breakdown(engine.explain(&inputs).context("explaining price")?);
    }

    if let Some(sweep) = cli.sweep {
        let analyzer = SensitivityAnalyzer::new(engine);
        let series = sweep
            .kinds()
            .into_iter()
            .map(|kind| analyzer.sweep(&inputs, kind))
            .collect::<Result<Vec<_>, _>>()
            .context("generating sensitivity series")?;
        report = report.with_sweeps(series);
    }

    println!("{}", report.render(cli.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_only_given_inputs() {
        let cli = Cli::parse_from(["flight-pricing", "--base-fare", "320", "--seats-filled", "90"]);
        let inputs = cli.apply_overrides(PricingInputs::default());
        assert_eq!(inputs.base_fare(), 320.0);
        assert_eq!(inputs.seats_filled(), 90);
        assert_eq!(inputs.total_seats(), 180);
        assert_eq!(inputs.demand_index(), 1.0);
    }

    #[test]
    fn sweep_all_expands_to_every_kind() {
        let cli = Cli::parse_from(["flight-pricing", "--sweep", "all", "--format", "json"]);
        assert_eq!(cli.sweep.map(SweepArg::kinds), Some(SweepKind::ALL.to_vec()));
        assert_eq!(cli.format, ReportFormat::Json);
    }
}
