//! Label to privacy category mapping

use crate::analysis::models::{CandidateSpan, CanonicalEntity, Category, Label};

/// Static category map; labels missing here are `Personal`
const CATEGORY_MAP: &[(Label, Category)] = &[
    (Label::Person, Category::Personal),
    (Label::Phone, Category::Personal),
    (Label::Email, Category::Personal),
    (Label::Org, Category::Personal),
    (Label::Gpe, Category::Personal),
    (Label::Aadhaar, Category::Government),
    (Label::Pan, Category::Government),
    (Label::CreditCard, Category::Financial),
    (Label::Ifsc, Category::Financial),
];

/// Category a label belongs to
pub fn category_for(label: Label) -> Category {
    CATEGORY_MAP
        .iter()
        .find(|(l, _)| *l == label)
        .map_or(Category::Personal, |(_, category)| *category)
}

/// Attach a category to every resolved span
pub fn classify(spans: Vec<CandidateSpan>) -> Vec<CanonicalEntity> {
    spans
        .into_iter()
        .map(|span| {
            let category = category_for(span.label);
            CanonicalEntity::from_span(span, category)
        })
        .collect()
}
