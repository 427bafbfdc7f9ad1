//! Algebraic identities relating quantities.

use super::QuantityId;

/// A closed-form relation that computes one quantity from two others.
///
/// Each algebraic rearrangement of a physical law is declared as its own
/// identity (e.g. V = I·R, I = V/R and R = V/I are three entries). The
/// network lists identities in priority order; the resolver always picks the
/// first satisfied entry, so results are reproducible regardless of how the
/// assignment was built.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Quantity this identity computes.
    pub target: QuantityId,
    /// The two quantities that must be known, in the order `eval` expects.
    pub inputs: [QuantityId; 2],
    /// Human-readable formula, recorded on the result for display
    /// (e.g. "R = V / I").
    pub formula: &'static str,
    /// Evaluate the target from the two inputs.
    pub eval: fn(f64, f64) -> f64,
    /// Inputs that must be nonzero for the identity to be valid
    /// (divisors, square-root denominators).
    pub nonzero: &'static [QuantityId],
}

impl Identity {
    /// Create an identity with no precondition beyond the input domains.
    pub const fn new(
        target: QuantityId,
        inputs: [QuantityId; 2],
        formula: &'static str,
        eval: fn(f64, f64) -> f64,
    ) -> Self {
        Self {
            target,
            inputs,
            formula,
            eval,
            nonzero: &[],
        }
    }

    /// Create an identity that divides by one or more of its inputs.
    pub const fn with_nonzero(
        target: QuantityId,
        inputs: [QuantityId; 2],
        formula: &'static str,
        eval: fn(f64, f64) -> f64,
        nonzero: &'static [QuantityId],
    ) -> Self {
        Self {
            target,
            inputs,
            formula,
            eval,
            nonzero,
        }
    }

    /// Whether `id` is one of this identity's inputs.
    pub fn uses(&self, id: QuantityId) -> bool {
        self.inputs.contains(&id)
    }
}
