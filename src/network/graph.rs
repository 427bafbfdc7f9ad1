//! Quantity network representation.
//!
//! A [`QuantityNetwork`] is the immutable description of one calculator
//! domain: its quantities, the identities relating them, how many values
//! the caller must supply, and what to do when they supply more. Networks
//! are defined once as configuration data and shared read-only between
//! resolution calls.

use super::{Identity, Quantity, QuantityId};

/// What `resolve` does when more than the minimum number of known
/// quantities is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverdeterminedPolicy {
    /// Fail with `Overdetermined`, even if the extra values are consistent.
    /// Avoids silently accepting self-contradictory input; this is the
    /// policy the Ohm's-law-style calculators use.
    Reject,
    /// Keep the first `min_known` supplied values in network declaration
    /// order and record the rest as ignored on the result.
    UseFirstIgnoreRest,
}

/// The fixed set of quantities and identities for one calculator domain.
#[derive(Debug, Clone)]
pub struct QuantityNetwork {
    name: &'static str,
    quantities: Vec<Quantity>,
    identities: Vec<Identity>,
    min_known: usize,
    policy: OverdeterminedPolicy,
    /// Known-quantity pairs documented as insufficient to close the network.
    underdetermined_pairs: Vec<[QuantityId; 2]>,
}

impl QuantityNetwork {
    /// Start building a network.
    pub fn builder(name: &'static str) -> NetworkBuilder {
        NetworkBuilder {
            name,
            quantities: Vec::new(),
            identities: Vec::new(),
            min_known: 2,
            policy: OverdeterminedPolicy::Reject,
            underdetermined_pairs: Vec::new(),
        }
    }

    /// Network name, used in error messages and registry lookup.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Quantities in declaration order.
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Identities in priority order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// Minimum number of known quantities required to resolve.
    pub fn min_known(&self) -> usize {
        self.min_known
    }

    /// Declared over-determined policy.
    pub fn policy(&self) -> OverdeterminedPolicy {
        self.policy
    }

    /// Number of quantities in the network.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// True if the network declares no quantities.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Quantity descriptor by id.
    pub fn quantity(&self, id: QuantityId) -> &Quantity {
        &self.quantities[id.0]
    }

    /// Look up a quantity id by name.
    pub fn find(&self, name: &str) -> Option<QuantityId> {
        self.quantities
            .iter()
            .position(|q| q.name == name)
            .map(QuantityId)
    }

    /// Whether the given known pair is documented as under-determined.
    pub fn is_declared_underdetermined(&self, a: QuantityId, b: QuantityId) -> bool {
        self.underdetermined_pairs
            .iter()
            .any(|p| (p[0] == a && p[1] == b) || (p[0] == b && p[1] == a))
    }
}

/// Builder for [`QuantityNetwork`].
///
/// Quantities receive ids in declaration order; identities are matched in
/// declaration order, so list direct relations before derived ones.
#[derive(Debug)]
pub struct NetworkBuilder {
    name: &'static str,
    quantities: Vec<Quantity>,
    identities: Vec<Identity>,
    min_known: usize,
    policy: OverdeterminedPolicy,
    underdetermined_pairs: Vec<[QuantityId; 2]>,
}

impl NetworkBuilder {
    /// Add a quantity. Its id is the current declaration index.
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantities.push(quantity);
        self
    }

    /// Add an identity at the next priority rank.
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identities.push(identity);
        self
    }

    /// Set the minimum number of known quantities (default 2).
    pub fn min_known(mut self, min_known: usize) -> Self {
        self.min_known = min_known;
        self
    }

    /// Set the over-determined policy (default [`OverdeterminedPolicy::Reject`]).
    pub fn policy(mut self, policy: OverdeterminedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Document a known pair that cannot close the network.
    pub fn underdetermined_pair(mut self, a: QuantityId, b: QuantityId) -> Self {
        self.underdetermined_pairs.push([a, b]);
        self
    }

    /// Finish the network. Structural checks live in
    /// [`validate_network`](super::validate_network).
    pub fn build(self) -> QuantityNetwork {
        QuantityNetwork {
            name: self.name,
            quantities: self.quantities,
            identities: self.identities,
            min_known: self.min_known,
            policy: self.policy,
            underdetermined_pairs: self.underdetermined_pairs,
        }
    }
}
