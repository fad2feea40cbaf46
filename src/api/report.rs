//! # Pricing Report
//!
//! Rendering of an evaluation for the command line.
//!
//! A [`PricingReport`] bundles everything one run produced: the inputs
//! actually priced, the metrics, an optional breakdown, any sensitivity
//! series and the inputs the host clamped. It renders as aligned text or
//! as a single JSON document.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::api::report::{format_currency, format_percent};
//!
//! assert_eq!(format_currency(12345.0), "$12,345.00");
//! assert_eq!(format_percent(27.777), "27.8%");
//! ```

use crate::application::error::{ApplicationResult, InfrastructureError};
use crate::config::ClampedField;
use crate::domain::value_objects::{
    PriceBreakdown, PricingInputs, PricingResult, SweepKind, SweepSeries,
};
use serde::Serialize;
use std::fmt::Write as _;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Aligned plain text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Everything produced by one pricing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    /// Inputs after clamping.
    pub inputs: PricingInputs,
    /// Price and revenue metrics.
    pub result: PricingResult,
    /// Stage-by-stage breakdown, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PriceBreakdown>,
    /// Requested sensitivity series.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sweeps: Vec<SweepSeries>,
    /// Inputs moved into the host ranges.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clamped: Vec<ClampedField>,
}

impl PricingReport {
    /// Creates a report with metrics only.
    #[must_use]
    pub fn new(inputs: PricingInputs, result: PricingResult) -> Self {
        Self {
            inputs,
            result,
            breakdown: None,
            sweeps: Vec::new(),
            clamped: Vec::new(),
        }
    }

    /// Attaches a price breakdown.
    #[must_use]
    pub fn with_breakdown(mut self, breakdown: PriceBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    /// Attaches sensitivity series.
    #[must_use]
    pub fn with_sweeps(mut self, sweeps: Vec<SweepSeries>) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Records clamped inputs.
    #[must_use]
    pub fn with_clamped(mut self, clamped: Vec<ClampedField>) -> Self {
        self.clamped = clamped;
        self
    }

    /// Renders the report.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Serialization` if JSON encoding fails.
    pub fn render(&self, format: ReportFormat) -> ApplicationResult<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| InfrastructureError::from(e).into())
            }
        }
    }

    /// Renders the report as aligned text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        for field in &self.clamped {
            writeln!(
                out,
                "note: {} clamped from {} to {}",
                field.field, field.requested, field.applied
            )?;
        }
        if !self.clamped.is_empty() {
            writeln!(out)?;
        }

        let result = &self.result;
        writeln!(out, "Seat Pricing")?;
        write_row(out, "Current Seat Price", &format_currency(result.price()))?;
        write_row(out, "Occupancy Rate", &format_percent(result.occupancy_rate()))?;
        write_row(out, "Current Revenue", &format_currency(result.current_revenue()))?;
        write_row(
            out,
            "Potential Max Revenue",
            &format_currency(result.potential_max_revenue()),
        )?;
        write_row(out, "Profit Margin", &format_percent(result.profit_margin()))?;

        if let Some(breakdown) = &self.breakdown {
            writeln!(out)?;
            write_breakdown(out, breakdown)?;
        }

        for series in &self.sweeps {
            writeln!(out)?;
            write_series(out, series)?;
        }

        Ok(())
    }
}

const LABEL_WIDTH: usize = 24;

fn write_row(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    writeln!(out, "  {label:<LABEL_WIDTH$}{value:>14}")
}

fn write_breakdown(out: &mut String, b: &PriceBreakdown) -> std::fmt::Result {
    writeln!(out, "Pricing Formula Breakdown")?;
    write_row(out, "Base Fare", &format_currency(b.base_fare))?;
    write_row(
        out,
        &format!("Time ({})", b.booking_window),
        &format_multiplier(b.time_multiplier),
    )?;
    if b.raw_time_multiplier != b.time_multiplier {
        write_row(out, "  before floor", &format_multiplier(b.raw_time_multiplier))?;
    }
    write_row(
        out,
        &format!("Capacity ({})", b.occupancy_band),
        &format_multiplier(b.capacity_multiplier),
    )?;
    write_row(out, "Duration Fee", &format!("+{}", format_currency(b.duration_surcharge)))?;
    write_row(out, "After Season", &format_currency(b.price_after_season))?;
    write_row(
        out,
        "Competitive Diff",
        &format_percent(b.competitive_diff * 100.0),
    )?;
    if b.competitive_discount_applied {
        write_row(out, "  discount", "x0.95")?;
    }
    write_row(out, "After Demand", &format_currency(b.price_after_demand))?;
    let floor = if b.floor_applied {
        format!("{} (applied)", format_currency(b.price_floor))
    } else {
        format_currency(b.price_floor)
    };
    write_row(out, "Price Floor", &floor)?;
    write_row(out, "Final Price", &format_currency(b.price))
}

fn write_series(out: &mut String, series: &SweepSeries) -> std::fmt::Result {
    let kind = series.kind();
    writeln!(out, "{}", kind.title())?;
    writeln!(
        out,
        "  current {}: {}",
        kind.x_label().to_lowercase(),
        format_x(kind, series.current_x())
    )?;
    writeln!(
        out,
        "  {:>22}  {:>14}",
        kind.x_label(),
        series.metric().y_label()
    )?;
    for point in series.points() {
        writeln!(
            out,
            "  {:>22}  {:>14}",
            format_x(kind, point.x),
            format_currency(point.y)
        )?;
    }
    Ok(())
}

fn format_x(kind: SweepKind, x: f64) -> String {
    match kind {
        SweepKind::DaysUntilDeparture | SweepKind::SeatsFilled => format!("{x:.0}"),
        SweepKind::DemandIndex => format!("{x:.3}"),
    }
}

fn format_multiplier(value: f64) -> String {
    format!("x{value:.3}")
}

/// Formats an amount with a dollar sign, thousands separators and two
/// decimals, e.g. `$1,234.56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}

/// Formats a percentage with one decimal, e.g. `27.8%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
