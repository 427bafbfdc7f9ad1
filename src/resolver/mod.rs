//! Partial-input resolution.
//!
//! Given a [`QuantityNetwork`](crate::network::QuantityNetwork) and an
//! [`Assignment`] of known values, [`resolve`] determines every derivable
//! quantity and records the identity used for each, or fails with a typed
//! error:
//!
//! - invalid input (unknown name, duplicate, non-finite value)
//! - [`Underdetermined`](crate::error::ResolveError::Underdetermined) /
//!   [`Overdetermined`](crate::error::ResolveError::Overdetermined)
//! - [`DomainViolation`](crate::error::ResolveError::DomainViolation) before
//!   any computation
//! - [`InvalidResult`](crate::error::ResolveError::InvalidResult) when a
//!   computed value is non-finite or out of domain
//!
//! Resolution is deterministic: identities are matched in the network's
//! declared priority order, with identities over originally supplied values
//! preferred to ones consuming derived values.

mod assignment;
mod resolution;
mod solve;

pub use assignment::Assignment;
pub use resolution::{Derivation, ResolvedQuantity, Resolution};
pub use solve::resolve;
