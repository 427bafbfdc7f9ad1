//! Network definition validation.

use crate::error::{ResolveError, Result};

use super::{QuantityId, QuantityNetwork};

/// Validate a network definition.
///
/// Checks:
/// - `min_known` is sane for the number of quantities
/// - every identity references in-range quantities and never targets one of
///   its own inputs
/// - every pair of known quantities closes the network under identity
///   application, or is explicitly declared under-determined
pub fn validate_network(network: &QuantityNetwork) -> Result<()> {
    let n = network.len();

    if n == 0 {
        return Err(invalid(network, "network has no quantities".to_string()));
    }

    if network.min_known() == 0 || network.min_known() > n {
        return Err(invalid(
            network,
            format!(
                "min_known must be between 1 and {} (got {})",
                n,
                network.min_known()
            ),
        ));
    }

    for identity in network.identities() {
        if identity.target.0 >= n {
            return Err(invalid(
                network,
                format!("identity '{}' targets out-of-range {}", identity.formula, identity.target),
            ));
        }
        for input in identity.inputs {
            if input.0 >= n {
                return Err(invalid(
                    network,
                    format!("identity '{}' reads out-of-range {}", identity.formula, input),
                ));
            }
        }
        if identity.uses(identity.target) {
            return Err(invalid(
                network,
                format!("identity '{}' targets one of its own inputs", identity.formula),
            ));
        }
        if identity.inputs[0] == identity.inputs[1] {
            return Err(invalid(
                network,
                format!("identity '{}' reads the same quantity twice", identity.formula),
            ));
        }
        for nz in identity.nonzero {
            if !identity.uses(*nz) {
                return Err(invalid(
                    network,
                    format!(
                        "identity '{}' declares a nonzero precondition on {}, which is not an input",
                        identity.formula, nz
                    ),
                ));
            }
        }
    }

    // Closure invariant: any two knowns determine everything, unless the
    // pair is documented as under-determined.
    if network.min_known() == 2 {
        for a in 0..n {
            for b in (a + 1)..n {
                let (a, b) = (QuantityId(a), QuantityId(b));
                if closes(network, a, b) || network.is_declared_underdetermined(a, b) {
                    continue;
                }
                return Err(invalid(
                    network,
                    format!(
                        "knowing {} and {} does not determine the network, and the pair is not declared under-determined",
                        network.quantity(a).name,
                        network.quantity(b).name
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Symbolic closure: does knowing `a` and `b` determine every quantity,
/// ignoring numeric preconditions?
fn closes(network: &QuantityNetwork, a: QuantityId, b: QuantityId) -> bool {
    let mut known = vec![false; network.len()];
    known[a.0] = true;
    known[b.0] = true;

    loop {
        let mut progressed = false;
        for identity in network.identities() {
            if known[identity.target.0] {
                continue;
            }
            if identity.inputs.iter().all(|i| known[i.0]) {
                known[identity.target.0] = true;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    known.iter().all(|k| *k)
}

fn invalid(network: &QuantityNetwork, message: String) -> ResolveError {
    ResolveError::InvalidNetwork {
        network: network.name().to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Domain, Identity, Quantity};

    fn two_quantity_net(with_identities: bool) -> QuantityNetwork {
        let builder = QuantityNetwork::builder("test")
            .quantity(Quantity::new("a", "A", "", Domain::Any))
            .quantity(Quantity::new("b", "B", "", Domain::Any))
            .quantity(Quantity::new("c", "C", "", Domain::Any));

        if with_identities {
            builder
                .identity(Identity::new(
                    QuantityId(2),
                    [QuantityId(0), QuantityId(1)],
                    "C = A * B",
                    |a, b| a * b,
                ))
                .identity(Identity::with_nonzero(
                    QuantityId(0),
                    [QuantityId(2), QuantityId(1)],
                    "A = C / B",
                    |c, b| c / b,
                    &[QuantityId(1)],
                ))
                .identity(Identity::with_nonzero(
                    QuantityId(1),
                    [QuantityId(2), QuantityId(0)],
                    "B = C / A",
                    |c, a| c / a,
                    &[QuantityId(0)],
                ))
                .build()
        } else {
            builder.build()
        }
    }

    #[test]
    fn test_complete_network_validates() {
        assert!(validate_network(&two_quantity_net(true)).is_ok());
    }

    #[test]
    fn test_missing_identities_fail_closure_check() {
        let err = validate_network(&two_quantity_net(false)).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidNetwork { .. }));
    }

    #[test]
    fn test_self_referential_identity_rejected() {
        let net = QuantityNetwork::builder("bad")
            .quantity(Quantity::new("a", "A", "", Domain::Any))
            .quantity(Quantity::new("b", "B", "", Domain::Any))
            .min_known(1)
            .identity(Identity::new(
                QuantityId(0),
                [QuantityId(0), QuantityId(1)],
                "A = A * B",
                |a, b| a * b,
            ))
            .build();

        let err = validate_network(&net).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidNetwork { .. }));
    }

    #[test]
    fn test_declared_underdetermined_pair_is_accepted() {
        let net = QuantityNetwork::builder("partial")
            .quantity(Quantity::new("a", "A", "", Domain::Any))
            .quantity(Quantity::new("b", "B", "", Domain::Any))
            .quantity(Quantity::new("c", "C", "", Domain::Any))
            .identity(Identity::new(
                QuantityId(2),
                [QuantityId(0), QuantityId(1)],
                "C = A + B",
                |a, b| a + b,
            ))
            .underdetermined_pair(QuantityId(0), QuantityId(2))
            .underdetermined_pair(QuantityId(1), QuantityId(2))
            .build();

        assert!(validate_network(&net).is_ok());
    }
}
