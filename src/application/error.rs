//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures a host can hit while loading
//! configuration, evaluating prices, or emitting results.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - Rejected pricing inputs
//! ├── Infrastructure(InfrastructureError) - Config, logging and output failures
//! └── Validation(String)                  - Host-level validation failures
//! ```
//!
//! # Examples
//!
//! ```
//! use flight_pricing::application::error::{ApplicationError, InfrastructureError};
//!
//! let err = ApplicationError::validation("bounds: base_fare min exceeds max");
//! assert!(err.is_validation());
//!
//! let infra_err = InfrastructureError::configuration("missing defaults section");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(app_err.to_string().contains("configuration"));
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Infrastructure layer error.
///
/// Represents failures of the components around the pricing core:
/// configuration sources, the tracing subscriber, and serializers.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Logging initialisation error.
    #[error("logging error: {0}")]
    Logging(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl InfrastructureError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a logging error.
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<config::ConfigError> for InfrastructureError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from the pricing model.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure error from the surrounding components.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this is a validation error, including rejected
    /// pricing inputs.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_invalid_input(),
            Self::Infrastructure(_) => false,
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Infrastructure(InfrastructureError::Configuration(_))
        )
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::arithmetic::ArithmeticError;

    // InfrastructureError tests

    #[test]
    fn infrastructure_error_configuration() {
        let err = InfrastructureError::configuration("missing defaults");
        assert!(err.to_string().contains("configuration"));
        assert!(err.to_string().contains("missing defaults"));
    }

    #[test]
    fn infrastructure_error_logging() {
        let err = InfrastructureError::logging("subscriber already set");
        assert!(err.to_string().contains("logging"));
    }

    #[test]
    fn infrastructure_error_serialization() {
        let err = InfrastructureError::serialization("invalid JSON");
        assert!(err.to_string().contains("serialization"));
    }

    #[test]
    fn infrastructure_error_from_serde_json() {
        let json_err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let err: InfrastructureError = json_err.into();
        assert!(matches!(err, InfrastructureError::Serialization(_)));
    }

    #[test]
    fn infrastructure_error_from_config() {
        let config_err = config::ConfigError::Message("bad key".to_string());
        let err: InfrastructureError = config_err.into();
        assert!(err.to_string().contains("bad key"));
    }

    // ApplicationError tests

    #[test]
    fn application_error_validation() {
        let err = ApplicationError::validation("min exceeds max");
        assert!(err.to_string().contains("min exceeds max"));
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn application_error_from_invalid_input() {
        let domain_err = DomainError::invalid_input("total_seats", "must be greater than zero");
        let app_err: ApplicationError = domain_err.into();
        assert!(app_err.to_string().contains("total_seats"));
        assert!(app_err.is_validation());
    }

    #[test]
    fn application_error_from_arithmetic_is_not_validation() {
        let domain_err: DomainError = ArithmeticError::NonFinite.into();
        let app_err: ApplicationError = domain_err.into();
        assert!(!app_err.is_validation());
    }

    #[test]
    fn application_error_from_infrastructure_error() {
        let infra_err = InfrastructureError::configuration("unreadable file");
        let app_err: ApplicationError = infra_err.into();
        assert!(app_err.to_string().contains("infrastructure"));
        assert!(app_err.is_configuration());
    }
}
