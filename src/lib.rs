//! # CalcKit Core
//!
//! Partial-input formula resolver for engineering calculators.
//!
//! A calculator page exposes a handful of physically related quantities
//! (voltage, current, resistance, power, ...) and lets the user fill in any
//! sufficient subset. This library holds the part of that problem worth
//! designing once: given a fixed *quantity network* (the variables and the
//! algebraic identities relating them) and a partial assignment of known
//! values, determine every derivable quantity — and fail predictably when
//! the combination is invalid, under-determined, over-determined, or
//! physically nonsensical.
//!
//! ## Architecture
//!
//! - [`network`] - Declarative network representation and validation
//! - [`networks`] - Builtin calculator domains (Ohm's law, power)
//! - [`resolver`] - The resolver: assignment in, resolution out
//! - [`input`] - Boundary parsing of raw form fields (SI suffixes, blank
//!   handling)
//!
//! ## Usage
//!
//! ```
//! use calckit_core::{networks, resolve, Assignment};
//!
//! let network = networks::ohms_law();
//! let assignment = Assignment::new().with("voltage", 12.0).with("current", 3.0);
//!
//! let resolution = resolve(&network, &assignment)?;
//! assert_eq!(resolution.value("resistance"), Some(4.0));
//! assert_eq!(resolution.value("power"), Some(36.0));
//! # Ok::<(), calckit_core::ResolveError>(())
//! ```
//!
//! ## Resolution Method
//!
//! Networks declare each algebraic rearrangement as its own identity, in a
//! fixed priority order. The resolver validates the assignment (names,
//! finiteness, known count, value domains), then repeatedly picks the first
//! identity whose inputs are known — preferring identities over originally
//! supplied values so rounding error does not compound — checks its
//! preconditions, and evaluates, cascading until every reachable quantity
//! has a value. All failures are typed; nothing panics across the boundary.

pub mod error;
pub mod input;
pub mod network;
pub mod networks;
pub mod resolver;

// Re-export main types for convenience
pub use error::{ResolveError, Result};
pub use network::{QuantityNetwork, validate_network};
pub use resolver::{resolve, Assignment, Derivation, Resolution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmResolver;
