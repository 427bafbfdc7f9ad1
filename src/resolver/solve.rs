//! The resolver: derive every determinable quantity from a partial assignment.

use crate::error::{ResolveError, Result};
use crate::network::{Identity, OverdeterminedPolicy, QuantityNetwork};

use super::{Assignment, Derivation, Resolution, ResolvedQuantity};

/// Per-quantity solver state. `Given` and `Derived` are kept distinct so
/// identity selection can prefer originally supplied values.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Unknown,
    Given(f64),
    Derived(f64, &'static str),
}

impl Slot {
    fn value(self) -> Option<f64> {
        match self {
            Slot::Unknown => None,
            Slot::Given(v) | Slot::Derived(v, _) => Some(v),
        }
    }

    fn is_known(self) -> bool {
        !matches!(self, Slot::Unknown)
    }
}

/// Resolve a network from a partial assignment.
///
/// Pure function of its inputs: no I/O, no shared state, deterministic
/// identity selection. See the module docs for the failure taxonomy.
pub fn resolve(network: &QuantityNetwork, assignment: &Assignment) -> Result<Resolution> {
    let n = network.len();
    let mut slots = vec![Slot::Unknown; n];

    // Input validation: names, finiteness, duplicates.
    for (name, value) in assignment.iter() {
        let id = network
            .find(name)
            .ok_or_else(|| ResolveError::UnknownQuantity {
                network: network.name().to_string(),
                name: name.to_string(),
            })?;
        if !value.is_finite() {
            return Err(ResolveError::NonFiniteValue {
                name: name.to_string(),
                value,
            });
        }
        if slots[id.0].is_known() {
            return Err(ResolveError::DuplicateQuantity {
                name: name.to_string(),
            });
        }
        slots[id.0] = Slot::Given(value);
    }

    let supplied = slots.iter().filter(|s| s.is_known()).count();
    let required = network.min_known();

    if supplied < required {
        let candidates = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_known())
            .map(|(i, _)| network.quantities()[i].name.to_string())
            .collect();
        return Err(ResolveError::Underdetermined {
            required,
            supplied,
            candidates,
        });
    }

    let mut ignored = Vec::new();
    if supplied > required {
        match network.policy() {
            OverdeterminedPolicy::Reject => {
                return Err(ResolveError::Overdetermined { required, supplied });
            }
            OverdeterminedPolicy::UseFirstIgnoreRest => {
                // Keep the first `required` knowns in declaration order,
                // surface the rest instead of silently checking them.
                let mut kept = 0;
                for (i, slot) in slots.iter_mut().enumerate() {
                    if let Slot::Given(_) = slot {
                        if kept < required {
                            kept += 1;
                        } else {
                            ignored.push(network.quantities()[i].name.to_string());
                            *slot = Slot::Unknown;
                        }
                    }
                }
            }
        }
    }

    // Domain check on supplied values, before any computation.
    for (i, slot) in slots.iter().enumerate() {
        if let Slot::Given(v) = slot {
            let quantity = &network.quantities()[i];
            if !quantity.domain.admits(*v) {
                return Err(ResolveError::domain(quantity.name, quantity.domain.describe()));
            }
        }
    }

    // Cascade: derive one quantity per iteration until nothing matches.
    while let Some(identity) = select_identity(network, &slots)? {
        let a = slots[identity.inputs[0].0].value().unwrap_or_default();
        let b = slots[identity.inputs[1].0].value().unwrap_or_default();
        let value = (identity.eval)(a, b);

        let target = network.quantity(identity.target);
        if !value.is_finite() || !target.domain.admits(value) {
            return Err(ResolveError::InvalidResult {
                quantity: target.name.to_string(),
                identity: identity.formula.to_string(),
                value,
            });
        }
        slots[identity.target.0] = Slot::Derived(value, identity.formula);
    }

    let entries = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let quantity = &network.quantities()[i];
            ResolvedQuantity {
                name: quantity.name,
                symbol: quantity.symbol,
                unit: quantity.unit,
                value: slot.value(),
                derivation: match *slot {
                    Slot::Unknown => Derivation::Undetermined,
                    Slot::Given(_) => Derivation::Given,
                    Slot::Derived(_, formula) => Derivation::Computed { formula },
                },
            }
        })
        .collect();

    Ok(Resolution::new(network.name(), entries, ignored))
}

/// Pick the next identity to evaluate, or `None` when the cascade is done.
///
/// Identities are scanned in declared priority order, twice: the first pass
/// admits only identities whose inputs were all originally supplied, so
/// derived values never displace direct computation (and rounding error does
/// not compound); the second pass admits any known input.
///
/// A zero divisor among *given* values is a hard domain violation. A zero
/// divisor that was itself derived only disqualifies the identity, since a
/// lower-priority chain may still reach the target.
fn select_identity<'a>(
    network: &'a QuantityNetwork,
    slots: &[Slot],
) -> Result<Option<&'a Identity>> {
    for given_only in [true, false] {
        'identities: for identity in network.identities() {
            if slots[identity.target.0].is_known() {
                continue;
            }
            for input in identity.inputs {
                match slots[input.0] {
                    Slot::Unknown => continue 'identities,
                    Slot::Derived(..) if given_only => continue 'identities,
                    _ => {}
                }
            }
            for nz in identity.nonzero {
                match slots[nz.0] {
                    Slot::Given(v) if v == 0.0 => {
                        return Err(ResolveError::domain(
                            network.quantity(*nz).name,
                            "cannot be zero",
                        ));
                    }
                    Slot::Derived(v, _) if v == 0.0 => continue 'identities,
                    _ => {}
                }
            }
            return Ok(Some(identity));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Domain, Quantity, QuantityId};
    use crate::networks::{ohms_law, power};
    use approx::assert_relative_eq;

    /// a * b = c with all rearrangements; used where the builtin networks
    /// would get in the way.
    fn product_net(policy: OverdeterminedPolicy) -> QuantityNetwork {
        QuantityNetwork::builder("product")
            .quantity(Quantity::new("a", "a", "", Domain::Any))
            .quantity(Quantity::new("b", "b", "", Domain::Any))
            .quantity(Quantity::new("c", "c", "", Domain::Any))
            .policy(policy)
            .identity(Identity::new(
                QuantityId(2),
                [QuantityId(0), QuantityId(1)],
                "c = a * b",
                |a, b| a * b,
            ))
            .identity(Identity::with_nonzero(
                QuantityId(0),
                [QuantityId(2), QuantityId(1)],
                "a = c / b",
                |c, b| c / b,
                &[QuantityId(1)],
            ))
            .identity(Identity::with_nonzero(
                QuantityId(1),
                [QuantityId(2), QuantityId(0)],
                "b = c / a",
                |c, a| c / a,
                &[QuantityId(0)],
            ))
            .build()
    }

    #[test]
    fn test_empty_assignment_is_underdetermined() {
        for net in [ohms_law(), power()] {
            let err = resolve(&net, &Assignment::new()).unwrap_err();
            match err {
                ResolveError::Underdetermined {
                    required,
                    supplied,
                    candidates,
                } => {
                    assert_eq!(required, 2);
                    assert_eq!(supplied, 0);
                    assert_eq!(candidates.len(), net.len());
                }
                other => panic!("expected Underdetermined, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_single_known_names_the_missing_candidates() {
        let net = ohms_law();
        let err = resolve(&net, &Assignment::new().with("voltage", 5.0)).unwrap_err();
        match err {
            ResolveError::Underdetermined { candidates, .. } => {
                assert_eq!(candidates, vec!["current", "resistance", "power"]);
            }
            other => panic!("expected Underdetermined, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_quantity_name_is_rejected() {
        let net = ohms_law();
        let err = resolve(
            &net,
            &Assignment::new().with("voltage", 5.0).with("frequency", 50.0),
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, ResolveError::UnknownQuantity { .. }));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let net = ohms_law();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = resolve(
                &net,
                &Assignment::new().with("voltage", bad).with("current", 1.0),
            )
            .unwrap_err();
            assert!(matches!(err, ResolveError::NonFiniteValue { .. }), "{bad}");
        }
    }

    #[test]
    fn test_duplicate_quantity_is_rejected() {
        let net = ohms_law();
        let err = resolve(
            &net,
            &Assignment::new().with("voltage", 5.0).with("voltage", 6.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ResolveError::DuplicateQuantity {
                name: "voltage".to_string()
            }
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let net = power();
        let assignment = Assignment::new().with("voltage", 230.0).with("current", 0.5);
        let first = resolve(&net, &assignment).unwrap();
        let second = resolve(&net, &assignment).unwrap();
        // Bit-identical, not merely approximately equal.
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_reproduces_discarded_value() {
        let net = ohms_law();
        let forward = resolve(
            &net,
            &Assignment::new().with("voltage", 17.3).with("current", 0.042),
        )
        .unwrap();
        let r = forward.value("resistance").unwrap();

        let back = resolve(
            &net,
            &Assignment::new().with("current", 0.042).with("resistance", r),
        )
        .unwrap();
        assert_relative_eq!(back.value("voltage").unwrap(), 17.3, max_relative = 1e-9);
    }

    #[test]
    fn test_derivations_are_recorded_per_quantity() {
        let net = ohms_law();
        let resolution = resolve(
            &net,
            &Assignment::new().with("voltage", 12.0).with("current", 3.0),
        )
        .unwrap();

        assert_eq!(resolution.derivation("voltage"), Some(&Derivation::Given));
        assert_eq!(resolution.derivation("current"), Some(&Derivation::Given));
        assert_eq!(
            resolution.derivation("resistance"),
            Some(&Derivation::Computed { formula: "R = V / I" })
        );
        assert!(resolution.is_fully_determined());
        assert!(resolution.ignored().is_empty());
    }

    #[test]
    fn test_overflow_is_an_invalid_result_not_infinity() {
        let net = ohms_law();
        let err = resolve(
            &net,
            &Assignment::new().with("voltage", 1e300).with("current", 1e-300),
        )
        .unwrap_err();
        match err {
            ResolveError::InvalidResult { quantity, value, .. } => {
                assert_eq!(quantity, "resistance");
                assert!(!value.is_finite());
            }
            other => panic!("expected InvalidResult, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_policy_keeps_declaration_order_and_flags_the_rest() {
        let net = product_net(OverdeterminedPolicy::UseFirstIgnoreRest);
        // Supplied c contradicts a * b; the lenient policy ignores it and
        // reports that it did.
        let resolution = resolve(
            &net,
            &Assignment::new().with("c", 999.0).with("a", 2.0).with("b", 3.0),
        )
        .unwrap();

        assert_eq!(resolution.ignored(), &["c".to_string()]);
        assert_relative_eq!(resolution.value("c").unwrap(), 6.0, max_relative = 1e-9);
        assert_eq!(
            resolution.derivation("c"),
            Some(&Derivation::Computed { formula: "c = a * b" })
        );
    }

    #[test]
    fn test_reject_policy_refuses_extra_values() {
        let net = product_net(OverdeterminedPolicy::Reject);
        let err = resolve(
            &net,
            &Assignment::new().with("a", 2.0).with("b", 3.0).with("c", 6.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ResolveError::Overdetermined {
                required: 2,
                supplied: 3
            }
        );
    }

    #[test]
    fn test_unreachable_quantity_is_marked_undetermined() {
        // Sum network with no rearrangements: knowing (a, c) cannot give b.
        let net = QuantityNetwork::builder("sum")
            .quantity(Quantity::new("a", "a", "", Domain::Any))
            .quantity(Quantity::new("b", "b", "", Domain::Any))
            .quantity(Quantity::new("c", "c", "", Domain::Any))
            .identity(Identity::new(
                QuantityId(2),
                [QuantityId(0), QuantityId(1)],
                "c = a + b",
                |a, b| a + b,
            ))
            .underdetermined_pair(QuantityId(0), QuantityId(2))
            .underdetermined_pair(QuantityId(1), QuantityId(2))
            .build();

        let resolution = resolve(
            &net,
            &Assignment::new().with("a", 1.0).with("c", 5.0),
        )
        .unwrap();
        assert_eq!(resolution.derivation("b"), Some(&Derivation::Undetermined));
        assert_eq!(resolution.value("b"), None);
        assert!(!resolution.is_fully_determined());
    }

    #[test]
    fn test_zero_given_value_errors_only_when_used_as_divisor() {
        let net = product_net(OverdeterminedPolicy::Reject);

        // a = 0 is fine while nothing divides by it.
        let resolution = resolve(
            &net,
            &Assignment::new().with("a", 0.0).with("b", 3.0),
        )
        .unwrap();
        assert_eq!(resolution.value("c"), Some(0.0));

        // Deriving b = c / a with a = 0 is a domain violation, never Infinity.
        let err = resolve(
            &net,
            &Assignment::new().with("a", 0.0).with("c", 6.0),
        )
        .unwrap_err();
        assert_eq!(err, ResolveError::domain("a", "cannot be zero"));
    }
}
