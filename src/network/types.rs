//! Core types for quantity network representation.

use std::fmt;

/// A unique identifier for a quantity within its network.
/// The index refers to the network's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantityId(pub usize);

impl fmt::Display for QuantityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Sign/zero constraint on a quantity's admissible values.
///
/// Checked on supplied values before any identity is evaluated, and again on
/// every computed value before it is accepted into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Any finite value.
    Any,
    /// Any finite value except zero.
    NonZero,
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
}

impl Domain {
    /// Check a value against the constraint. Assumes the value is finite.
    pub fn admits(&self, value: f64) -> bool {
        match self {
            Domain::Any => true,
            Domain::NonZero => value != 0.0,
            Domain::Positive => value > 0.0,
            Domain::NonNegative => value >= 0.0,
        }
    }

    /// Human-readable constraint description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Domain::Any => "may take any value",
            Domain::NonZero => "cannot be zero",
            Domain::Positive => "must be greater than zero",
            Domain::NonNegative => "cannot be negative",
        }
    }
}

/// A named physical variable in a formula (voltage, current, etc.).
#[derive(Debug, Clone)]
pub struct Quantity {
    /// Name used in assignments and results (e.g. "voltage").
    pub name: &'static str,
    /// Short symbol for formulas and table output (e.g. "V").
    pub symbol: &'static str,
    /// Display unit (e.g. "V", "A", "Ω", "W").
    pub unit: &'static str,
    /// Admissible-value constraint.
    pub domain: Domain,
}

impl Quantity {
    /// Create a new quantity descriptor.
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        unit: &'static str,
        domain: Domain,
    ) -> Self {
        Self {
            name,
            symbol,
            unit,
            domain,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_admits() {
        assert!(Domain::Any.admits(-3.0));
        assert!(Domain::Any.admits(0.0));
        assert!(!Domain::NonZero.admits(0.0));
        assert!(Domain::NonZero.admits(-1.0));
        assert!(!Domain::Positive.admits(0.0));
        assert!(!Domain::Positive.admits(-0.5));
        assert!(Domain::Positive.admits(1e-12));
        assert!(Domain::NonNegative.admits(0.0));
        assert!(!Domain::NonNegative.admits(-1e-12));
    }

    #[test]
    fn test_quantity_id_display() {
        assert_eq!(QuantityId(2).to_string(), "Q2");
    }
}
