//! Resolution results.

/// How a quantity's value came to be known, recorded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Supplied by the caller.
    Given,
    /// Computed via the named identity.
    Computed {
        /// Formula of the identity that produced the value (e.g. "R = V / I").
        formula: &'static str,
    },
    /// No identity chain reached this quantity. Only possible in networks
    /// that declare under-determined pairs.
    Undetermined,
}

/// One quantity's slot in a resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuantity {
    /// Quantity name as declared by the network.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Display unit.
    pub unit: &'static str,
    /// The value, if determined.
    pub value: Option<f64>,
    /// Provenance of the value.
    pub derivation: Derivation,
}

/// The outcome of a successful resolution: one entry per network quantity,
/// in network declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    network: &'static str,
    entries: Vec<ResolvedQuantity>,
    ignored: Vec<String>,
}

impl Resolution {
    pub(crate) fn new(
        network: &'static str,
        entries: Vec<ResolvedQuantity>,
        ignored: Vec<String>,
    ) -> Self {
        Self {
            network,
            entries,
            ignored,
        }
    }

    /// Name of the network this resolution belongs to.
    pub fn network(&self) -> &'static str {
        self.network
    }

    /// All entries in network declaration order.
    pub fn entries(&self) -> &[ResolvedQuantity] {
        &self.entries
    }

    /// Value of a quantity by name, if determined.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name)?.value
    }

    /// Provenance of a quantity by name.
    pub fn derivation(&self, name: &str) -> Option<&Derivation> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.derivation)
    }

    /// True when every quantity in the network has a value.
    pub fn is_fully_determined(&self) -> bool {
        self.entries.iter().all(|e| e.value.is_some())
    }

    /// Supplied values that were ignored under the lenient over-determined
    /// policy. Empty under the reject policy.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}
