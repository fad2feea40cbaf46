//! # Domain Errors
//!
//! Error types raised by the pricing domain.
//!
//! The pricing pipeline is total over its valid domain, so the only
//! failure a caller can provoke is [`DomainError::InvalidInput`]. Arithmetic
//! failures are surfaced separately so that a non-finite intermediate never
//! masquerades as a price.
//!
//! # Examples
//!
//! ```
//! use flight_pricing::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_input("total_seats", "must be greater than zero");
//! assert!(err.is_invalid_input());
//! assert_eq!(err.to_string(), "invalid input: total_seats must be greater than zero");
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Pricing domain error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An input is outside the domain the pricing formula is defined on.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A checked arithmetic operation failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid input error.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns the offending field, if this is an invalid input error.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Arithmetic(_) => None,
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = DomainError::invalid_input("competitor_price", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid input: competitor_price must be positive, got 0"
        );
        assert_eq!(err.field(), Some("competitor_price"));
    }

    #[test]
    fn from_arithmetic_error() {
        let err: DomainError = ArithmeticError::DivisionByZero.into();
        assert!(!err.is_invalid_input());
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("division by zero"));
    }
}
