//! Quantity network representation and validation.
//!
//! This module provides the declarative description of one calculator
//! domain: the [`Quantity`] set, the [`Identity`] list relating them, and
//! the [`QuantityNetwork`] that holds both in a form suitable for
//! resolution.

mod graph;
mod identity;
mod types;
mod validate;

pub use graph::{NetworkBuilder, OverdeterminedPolicy, QuantityNetwork};
pub use identity::Identity;
pub use types::{Domain, Quantity, QuantityId};
pub use validate::validate_network;
