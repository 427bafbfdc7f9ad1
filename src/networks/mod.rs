//! Builtin calculator networks.
//!
//! Each submodule defines one calculator domain as configuration data:
//! quantity descriptors, identity priority list, minimum known count and
//! over-determined policy. Networks are built on demand and are cheap to
//! construct; callers that resolve repeatedly should build once and share
//! the reference.

mod ohms_law;
mod power;

pub use ohms_law::ohms_law;
pub use power::power;

use crate::error::{ResolveError, Result};
use crate::network::QuantityNetwork;

/// Names accepted by [`by_name`], in display order.
pub const NETWORK_NAMES: &[&str] = &["ohms-law", "power"];

/// Look up a builtin network by name.
pub fn by_name(name: &str) -> Result<QuantityNetwork> {
    match name {
        "ohms-law" => Ok(ohms_law()),
        "power" => Ok(power()),
        _ => Err(ResolveError::UnknownNetwork {
            name: name.to_string(),
        }),
    }
}
