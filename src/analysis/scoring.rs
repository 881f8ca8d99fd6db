//! Risk and safety scoring

use crate::analysis::models::{CanonicalEntity, Label};

/// Maximum safety score
pub const MAX_SAFETY: u32 = 100;

/// Risk weight per label
const WEIGHTS: &[(Label, u32)] = &[
    (Label::Phone, 5),
    (Label::Email, 3),
    (Label::Person, 2),
    (Label::Org, 1),
    (Label::Gpe, 1),
    (Label::Aadhaar, 10),
    (Label::Pan, 8),
    (Label::CreditCard, 10),
    (Label::Ifsc, 6),
];

/// Risk weight of a label, 0 when unweighted
pub fn weight(label: Label) -> u32 {
    WEIGHTS
        .iter()
        .find(|(l, _)| *l == label)
        .map_or(0, |(_, w)| *w)
}

/// Sum of label weights over all entities
///
/// Unbounded above; saturates instead of wrapping.
pub fn compute_risk_score(entities: &[CanonicalEntity]) -> u32 {
    entities
        .iter()
        .fold(0u32, |risk, entity| risk.saturating_add(weight(entity.label)))
}

/// `100 - risk`, floored at 0
pub fn compute_safety_score(risk: u32) -> u32 {
    MAX_SAFETY.saturating_sub(risk)
}
