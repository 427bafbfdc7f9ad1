//! Partial assignments of known values.

/// A partial assignment of quantity names to numeric values.
///
/// Built fresh per resolution call and never mutated afterwards. Empty form
/// fields must be omitted entirely, never passed as zero; the boundary layer
/// in [`crate::input`] does this when starting from raw text.
///
/// Names and values are not validated here; `resolve` checks them against
/// the network so that every failure carries the network's context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    entries: Vec<(String, f64)>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a known value, consuming and returning the assignment.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Number of supplied values (duplicates included; `resolve` rejects them).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no values were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the supplied `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}
