//! Error types for the CalcKit formula resolver.
//!
//! This module provides a unified error type [`ResolveError`] that covers
//! all error conditions that can occur while validating an assignment and
//! resolving a quantity network, plus the boundary-layer conditions raised
//! when converting raw form input into an assignment.
//!
//! Every failure is a returned value; no error crosses the resolver boundary
//! as a panic. The presentation layer maps each variant to an inline message.

use thiserror::Error;

/// Result type alias using [`ResolveError`].
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Unified error type for all CalcKit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    // ============ Invalid Input ============
    /// A supplied quantity name does not exist in the network.
    #[error("'{name}' is not a quantity of the {network} network")]
    UnknownQuantity { network: String, name: String },

    /// The same quantity was supplied more than once.
    #[error("Quantity '{name}' was supplied more than once")]
    DuplicateQuantity { name: String },

    /// A supplied value is NaN or infinite.
    #[error("Value for '{name}' must be a finite number (got {value})")]
    NonFiniteValue { name: String, value: f64 },

    // ============ Solvability ============
    /// Too few known quantities to pin down the network.
    #[error(
        "Need at least {required} known quantities ({supplied} supplied); provide one of: {}",
        .candidates.join(", ")
    )]
    Underdetermined {
        required: usize,
        supplied: usize,
        /// Quantities still unknown, any of which would make progress.
        candidates: Vec<String>,
    },

    /// More known quantities supplied than the network accepts.
    #[error("Supply exactly {required} known quantities ({supplied} were given)")]
    Overdetermined { required: usize, supplied: usize },

    // ============ Domain Validation ============
    /// A known value violates a quantity domain or an identity precondition
    /// before any computation occurs.
    #[error("{quantity} {constraint}")]
    DomainViolation { quantity: String, constraint: String },

    /// Computation produced a non-finite or out-of-domain value despite the
    /// inputs passing every precondition check.
    #[error("Computed {quantity} = {value} via {identity} is not a valid result")]
    InvalidResult {
        quantity: String,
        identity: String,
        value: f64,
    },

    // ============ Network Definition ============
    /// A network definition is structurally unsound (bad identity wiring,
    /// undeclared under-determined pair). Raised by `validate_network`.
    #[error("Invalid network '{network}': {message}")]
    InvalidNetwork { network: String, message: String },

    // ============ Boundary Layer ============
    /// A raw form field could not be parsed as a number. Raised by the input
    /// boundary, never by `resolve` itself.
    #[error("Field '{field}' is not a valid number: '{text}'")]
    InvalidNumber { field: String, text: String },

    /// No builtin network registered under the given name.
    #[error("Unknown network '{name}'")]
    UnknownNetwork { name: String },
}

impl ResolveError {
    /// Create a domain violation error.
    pub fn domain(quantity: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::DomainViolation {
            quantity: quantity.into(),
            constraint: constraint.into(),
        }
    }

    /// Create an invalid-number boundary error.
    pub fn invalid_number(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            text: text.into(),
        }
    }

    /// True for the input-validation class of failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownQuantity { .. }
                | Self::DuplicateQuantity { .. }
                | Self::NonFiniteValue { .. }
        )
    }
}
