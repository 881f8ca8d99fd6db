//! Property tests for conflict resolution and redaction

use privlens::analysis::merge::resolve;
use privlens::analysis::redaction::redact;
use privlens::analysis::{AnalysisEngine, AnalysisOptions, CandidateSpan, DetectionMethod, Label};
use proptest::prelude::*;

const METHODS: [DetectionMethod; 3] = [
    DetectionMethod::Pattern,
    DetectionMethod::Rule,
    DetectionMethod::Contextual,
];

fn candidate() -> impl Strategy<Value = CandidateSpan> {
    (0usize..60, 1usize..12, 0usize..Label::ALL.len(), 0usize..METHODS.len()).prop_map(
        |(start, len, label, method)| {
            CandidateSpan::new(
                "x".repeat(len),
                Label::ALL[label],
                METHODS[method],
                start,
                start + len,
            )
        },
    )
}

/// Text assembled from fragments the detectors react to
fn pii_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "My name is",
            "Alice Kumar",
            "Hi",
            "Rahul",
            "Name:",
            "Emergency Contact:",
            "john@example.com",
            "9876543210",
            "+91 98765 43210",
            "4111 1111 1111 1111",
            "2345 6789 0123",
            "ABCDE1234F",
            "HDFC0001234",
            "and",
            "the",
            "phone",
            "café",
            ",",
            "\n",
        ]),
        0..16,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn resolved_spans_never_overlap(candidates in prop::collection::vec(candidate(), 0..40)) {
        let resolved = resolve(candidates);
        for (i, a) in resolved.iter().enumerate() {
            for b in &resolved[i + 1..] {
                prop_assert!(!(a.start < b.end && a.end > b.start), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn resolved_spans_are_in_document_order(candidates in prop::collection::vec(candidate(), 0..40)) {
        let resolved = resolve(candidates);
        prop_assert!(resolved.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn resolution_ignores_input_order(candidates in prop::collection::vec(candidate(), 0..40)) {
        let mut reversed = candidates.clone();
        reversed.reverse();
        prop_assert_eq!(resolve(candidates), resolve(reversed));
    }

    #[test]
    fn detected_entities_slice_the_text(text in pii_text()) {
        let engine = AnalysisEngine::new(AnalysisOptions::default()).unwrap();
        let entities = engine.detect(&text).unwrap();

        for entity in &entities {
            prop_assert_eq!(text.get(entity.start..entity.end), Some(entity.value.as_str()));
        }
        prop_assert!(entities.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn redaction_preserves_text_between_entities(text in pii_text()) {
        let engine = AnalysisEngine::new(AnalysisOptions::default()).unwrap();
        let entities = engine.detect(&text).unwrap();
        let redacted = redact(&text, &entities);

        let mut rest = redacted.as_str();
        let mut cursor = 0;
        for entity in &entities {
            let gap = &text[cursor..entity.start];
            prop_assert!(rest.starts_with(gap));
            rest = &rest[gap.len()..];
            let placeholder = entity.label.placeholder();
            prop_assert!(rest.starts_with(&placeholder));
            rest = &rest[placeholder.len()..];
            cursor = entity.end;
        }
        prop_assert_eq!(rest, &text[cursor..]);
    }
}

#[test]
fn test_redacting_without_entities_is_identity() {
    let text = "nothing sensitive here, just café notes";
    assert_eq!(redact(text, &[]), text);
}
