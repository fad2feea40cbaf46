//! # Configuration
//!
//! Layered configuration for hosts of the pricing engine.
//!
//! Sources are merged in increasing priority:
//!
//! ```text
//! built-in defaults → flight_pricing.toml (or --config path) → FLIGHT_PRICING__* env vars
//! ```
//!
//! A `.env` file, if present, is loaded into the environment first.
//! Nested keys use a double underscore, e.g.
//! `FLIGHT_PRICING__DEFAULTS__BASE_FARE=320`.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::config::InputBounds;
//! use flight_pricing::domain::value_objects::PricingInputs;
//!
//! let bounds = InputBounds::default();
//! let (clamped, adjusted) = bounds.clamp(&PricingInputs::default().with_base_fare(900.0));
//! assert_eq!(clamped.base_fare(), 500.0);
//! assert_eq!(adjusted.len(), 1);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult, InfrastructureError};
use crate::domain::value_objects::pricing_inputs::PricingInputs;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "FLIGHT_PRICING";

/// Name (without extension) of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "flight_pricing";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Inputs used when the host supplies none.
    pub defaults: PricingInputs,
    /// Host-facing input ranges.
    pub bounds: InputBounds,
    /// Tracing subscriber settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, an optional file and the
    /// environment.
    ///
    /// When `path` is `None`, `flight_pricing.{toml,json,yaml}` in the
    /// working directory is used if present. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// - `InfrastructureError::Configuration` if a source cannot be read
    ///   or deserialized
    /// - `ApplicationError::Validation` if the bounds or defaults are
    ///   inconsistent
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default()).map_err(InfrastructureError::from)?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(InfrastructureError::from)?
            .try_deserialize()
            .map_err(InfrastructureError::from)?;

        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Checks bounds and default inputs.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if any bound has min > max, or
    /// `ApplicationError::Domain` if the default inputs are invalid.
    pub fn validate(&self) -> ApplicationResult<()> {
        self.bounds.validate()?;
        self.defaults.validate()?;
        Ok(())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `flight_pricing=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lowest accepted value.
    pub min: T,
    /// Highest accepted value.
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns `value` limited to the range.
    #[must_use]
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// An input changed by [`InputBounds::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampedField {
    /// Input name.
    pub field: &'static str,
    /// Value supplied.
    pub requested: f64,
    /// Value used.
    pub applied: f64,
}

/// Ranges a host clamps inputs to before pricing.
///
/// The engine itself accepts any valid input; these ranges reproduce the
/// calculator's slider limits. `seats_filled` has no bound of its own and
/// is limited to `[0, total_seats]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Base fare range.
    pub base_fare: Bounds<f64>,
    /// Days until departure range.
    pub days_until_departure: Bounds<u32>,
    /// Capacity range.
    pub total_seats: Bounds<u32>,
    /// Flight duration range in hours.
    pub flight_duration: Bounds<f64>,
    /// Seasonal multiplier range.
    pub season_multiplier: Bounds<f64>,
    /// Competitor fare range.
    pub competitor_price: Bounds<f64>,
    /// Demand index range.
    pub demand_index: Bounds<f64>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            base_fare: Bounds::new(100.0, 500.0),
            days_until_departure: Bounds::new(1, 90),
            total_seats: Bounds::new(50, 400),
            flight_duration: Bounds::new(1.0, 15.0),
            season_multiplier: Bounds::new(0.7, 1.8),
            competitor_price: Bounds::new(100.0, 600.0),
            demand_index: Bounds::new(0.5, 2.0),
        }
    }
}

impl InputBounds {
    /// Checks that every range has `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` naming the first inverted range.
    pub fn validate(&self) -> ApplicationResult<()> {
        let checks = [
            ("base_fare", self.base_fare.is_ordered()),
            ("days_until_departure", self.days_until_departure.is_ordered()),
            ("total_seats", self.total_seats.is_ordered()),
            ("flight_duration", self.flight_duration.is_ordered()),
            ("season_multiplier", self.season_multiplier.is_ordered()),
            ("competitor_price", self.competitor_price.is_ordered()),
            ("demand_index", self.demand_index.is_ordered()),
        ];

        match checks.iter().find(|(_, ordered)| !ordered) {
            Some((field, _)) => Err(ApplicationError::validation(format!(
                "bounds for {field}: min exceeds max"
            ))),
            None => Ok(()),
        }
    }

    /// Clamps every input to its range.
    ///
    /// `total_seats` is clamped before `seats_filled`, so the result always
    /// satisfies `seats_filled <= total_seats`. Returns the clamped inputs
    /// and the fields that changed.
    #[must_use]
    pub fn clamp(&self, inputs: &PricingInputs) -> (PricingInputs, Vec<ClampedField>) {
        let mut adjusted = Vec::new();

        let mut clamp_f64 = |field: &'static str, bounds: &Bounds<f64>, value: f64| {
            let applied = bounds.clamp(value);
            if applied != value {
                adjusted.push(ClampedField {
                    field,
                    requested: value,
                    applied,
                });
            }
            applied
        };

        let base_fare = clamp_f64("base_fare", &self.base_fare, inputs.base_fare());
        let flight_duration =
            clamp_f64("flight_duration", &self.flight_duration, inputs.flight_duration());
        let season_multiplier = clamp_f64(
            "season_multiplier",
            &self.season_multiplier,
            inputs.season_multiplier(),
        );
        let competitor_price =
            clamp_f64("competitor_price", &self.competitor_price, inputs.competitor_price());
        let demand_index = clamp_f64("demand_index", &self.demand_index, inputs.demand_index());

        let days = clamp_u32(
            &mut adjusted,
            "days_until_departure",
            &self.days_until_departure,
            inputs.days_until_departure(),
        );
        let total_seats = clamp_u32(
            &mut adjusted,
            "total_seats",
            &self.total_seats,
            inputs.total_seats(),
        );
        let seats_filled = clamp_u32(
            &mut adjusted,
            "seats_filled",
            &Bounds::new(0, total_seats),
            inputs.seats_filled(),
        );

        let clamped = inputs
            .with_base_fare(base_fare)
            .with_days_until_departure(days)
            .with_total_seats(total_seats)
            .with_seats_filled(seats_filled)
            .with_flight_duration(flight_duration)
            .with_season_multiplier(season_multiplier)
            .with_competitor_price(competitor_price)
            .with_demand_index(demand_index);

        (clamped, adjusted)
    }
}

fn clamp_u32(
    adjusted: &mut Vec<ClampedField>,
    field: &'static str,
    bounds: &Bounds<u32>,
    value: u32,
) -> u32 {
    let applied = bounds.clamp(value);
    if applied != value {
        adjusted.push(ClampedField {
            field,
            requested: f64::from(value),
            applied: f64::from(applied),
        });
    }
    applied
}
