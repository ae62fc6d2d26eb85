use crate::model::{AgeGroup, GateSpec, Trial, TrialError};

/// Gate Garden: boolean gates with their lamp inputs spelled out.
///
/// Listed easiest first; the catalog keeps this order.
pub(super) fn trials() -> Result<Vec<Trial>, TrialError> {
    Ok(vec![
        Trial::gate(
            "Lamp A is ON and lamp B is ON. The AND gate shines only when both lamps are ON. \
             Does the bulb shine?",
            GateSpec::And { a: true, b: true },
        )?
        .with_hint("AND needs both lamps ON."),
        Trial::gate(
            "Lamp A is ON but lamp B is OFF. Does the AND bulb shine?",
            GateSpec::And { a: true, b: false },
        )?
        .with_hint("One lamp OFF is enough to keep an AND bulb dark."),
        Trial::gate(
            "Lamp A is OFF and lamp B is ON. The OR gate shines when at least one lamp is ON. \
             Does the bulb shine?",
            GateSpec::Or { a: false, b: true },
        )?
        .with_hint("OR only needs one lamp."),
        Trial::gate(
            "Both lamps are OFF. Does the OR bulb shine?",
            GateSpec::Or { a: false, b: false },
        )?
        .with_hint("OR needs at least one lamp ON."),
        Trial::gate(
            "The NOT gate flips its lamp. The lamp is ON. Does the bulb shine?",
            GateSpec::Not { input: true },
        )?
        .with_hint("NOT turns ON into OFF.")
        .with_min_tier(AgeGroup::Middle),
        Trial::gate(
            "The NOT gate flips its lamp. The lamp is OFF. Does the bulb shine?",
            GateSpec::Not { input: false },
        )?
        .with_hint("NOT turns OFF into ON.")
        .with_min_tier(AgeGroup::Middle),
        Trial::gate(
            "Both lamps are OFF. Does the AND bulb shine?",
            GateSpec::And { a: false, b: false },
        )?
        .with_min_tier(AgeGroup::Older),
        Trial::gate(
            "Both lamps are ON. Does the OR bulb shine?",
            GateSpec::Or { a: true, b: true },
        )?
        .with_min_tier(AgeGroup::Older),
    ])
}
