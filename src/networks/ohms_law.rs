//! The Ohm's law calculator network: {voltage, current, resistance, power}.
//!
//! Voltage and current carry sign (DC polarity); resistance must be
//! strictly positive. Power is derivable from any resolved pair, so the
//! network also accepts power as a known quantity (P with any one of V, I,
//! R determines the rest).

use crate::network::{Domain, Identity, OverdeterminedPolicy, Quantity, QuantityId, QuantityNetwork};

/// Quantity id for voltage.
pub const VOLTAGE: QuantityId = QuantityId(0);
/// Quantity id for current.
pub const CURRENT: QuantityId = QuantityId(1);
/// Quantity id for resistance.
pub const RESISTANCE: QuantityId = QuantityId(2);
/// Quantity id for power.
pub const POWER: QuantityId = QuantityId(3);

/// Build the Ohm's law network.
///
/// Policy is [`OverdeterminedPolicy::Reject`]: exactly two knowns, no more.
pub fn ohms_law() -> QuantityNetwork {
    QuantityNetwork::builder("ohms-law")
        .quantity(Quantity::new("voltage", "V", "V", Domain::Any))
        .quantity(Quantity::new("current", "I", "A", Domain::Any))
        .quantity(Quantity::new("resistance", "R", "Ω", Domain::Positive))
        .quantity(Quantity::new("power", "P", "W", Domain::Any))
        .min_known(2)
        .policy(OverdeterminedPolicy::Reject)
        // Direct Ohm's law rearrangements first, power relations after.
        .identity(Identity::new(
            VOLTAGE,
            [CURRENT, RESISTANCE],
            "V = I * R",
            |i, r| i * r,
        ))
        .identity(Identity::with_nonzero(
            CURRENT,
            [VOLTAGE, RESISTANCE],
            "I = V / R",
            |v, r| v / r,
            &[RESISTANCE],
        ))
        .identity(Identity::with_nonzero(
            RESISTANCE,
            [VOLTAGE, CURRENT],
            "R = V / I",
            |v, i| v / i,
            &[CURRENT],
        ))
        .identity(Identity::new(POWER, [VOLTAGE, CURRENT], "P = V * I", |v, i| v * i))
        .identity(Identity::with_nonzero(
            VOLTAGE,
            [POWER, CURRENT],
            "V = P / I",
            |p, i| p / i,
            &[CURRENT],
        ))
        .identity(Identity::with_nonzero(
            CURRENT,
            [POWER, VOLTAGE],
            "I = P / V",
            |p, v| p / v,
            &[VOLTAGE],
        ))
        .identity(Identity::new(
            POWER,
            [CURRENT, RESISTANCE],
            "P = I^2 * R",
            |i, r| i * i * r,
        ))
        .identity(Identity::with_nonzero(
            POWER,
            [VOLTAGE, RESISTANCE],
            "P = V^2 / R",
            |v, r| v * v / r,
            &[RESISTANCE],
        ))
        .identity(Identity::with_nonzero(
            RESISTANCE,
            [VOLTAGE, POWER],
            "R = V^2 / P",
            |v, p| v * v / p,
            &[POWER],
        ))
        .identity(Identity::with_nonzero(
            RESISTANCE,
            [POWER, CURRENT],
            "R = P / I^2",
            |p, i| p / (i * i),
            &[CURRENT],
        ))
        .identity(Identity::new(
            VOLTAGE,
            [POWER, RESISTANCE],
            "V = sqrt(P * R)",
            |p, r| (p * r).sqrt(),
        ))
        .identity(Identity::with_nonzero(
            CURRENT,
            [POWER, RESISTANCE],
            "I = sqrt(P / R)",
            |p, r| (p / r).sqrt(),
            &[RESISTANCE],
        ))
        .build()
}
