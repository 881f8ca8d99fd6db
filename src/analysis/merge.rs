//! Merge and conflict resolution
//!
//! Reconciles candidate spans from every detector into one non-overlapping
//! list in document order.
//!
//! Candidates are ranked by
//! `(method priority, label priority, longer span first, earlier start, label)` and
//! accepted greedily: a span is kept only if it overlaps nothing already
//! kept. Rejected spans are never reconsidered. The ranking is a total order
//! over distinct spans, so the result does not depend on the order the
//! detectors reported in.

use crate::analysis::detector::label_priority;
use crate::analysis::models::CandidateSpan;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Resolve overlapping candidates into the canonical span list
///
/// The returned spans are pairwise non-overlapping and sorted by `start`.
/// Empty input yields empty output.
pub fn resolve(candidates: Vec<CandidateSpan>) -> Vec<CandidateSpan> {
    let mut ranked: Vec<CandidateSpan> = candidates
        .into_iter()
        .filter(|span| !span.is_empty())
        .collect();

    ranked.sort_by_key(|span| {
        (
            span.detection_method.priority(),
            label_priority(span.label),
            Reverse(span.len()),
            span.start,
            span.label,
        )
    });

    let mut accepted: Vec<CandidateSpan> = Vec::with_capacity(ranked.len());
    let mut seen = HashSet::new();

    for span in ranked {
        if accepted.iter().any(|kept| kept.overlaps(span.start, span.end)) {
            continue;
        }
        // Identical ranges always overlap, so this only matters for exact repeats
        if seen.insert((span.start, span.end, span.label)) {
            accepted.push(span);
        }
    }

    accepted.sort_by_key(|span| span.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{DetectionMethod, Label};

    fn span(label: Label, method: DetectionMethod, start: usize, end: usize) -> CandidateSpan {
        CandidateSpan::new("x".repeat(end - start), label, method, start, end)
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve(Vec::new()).is_empty());
    }

    #[test]
    fn test_pattern_beats_contextual_guess() {
        let resolved = resolve(vec![
            span(Label::Person, DetectionMethod::Contextual, 12, 16),
            span(Label::CreditCard, DetectionMethod::Pattern, 10, 29),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].label, Label::CreditCard);
        assert_eq!((resolved[0].start, resolved[0].end), (10, 29));
    }

    #[test]
    fn test_rule_beats_contextual() {
        let resolved = resolve(vec![
            span(Label::Org, DetectionMethod::Contextual, 0, 20),
            span(Label::Person, DetectionMethod::Rule, 5, 15),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].detection_method, DetectionMethod::Rule);
    }

    #[test]
    fn test_label_priority_breaks_method_ties() {
        // A card number also contains an Aadhaar-shaped prefix
        let resolved = resolve(vec![
            span(Label::Aadhaar, DetectionMethod::Pattern, 0, 14),
            span(Label::CreditCard, DetectionMethod::Pattern, 0, 19),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].label, Label::CreditCard);
    }

    #[test]
    fn test_same_priority_prefers_longer_then_earlier() {
        let resolved = resolve(vec![
            span(Label::Person, DetectionMethod::Contextual, 4, 8),
            span(Label::Person, DetectionMethod::Contextual, 0, 10),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!((resolved[0].start, resolved[0].end), (0, 10));

        let resolved = resolve(vec![
            span(Label::Gpe, DetectionMethod::Contextual, 3, 8),
            span(Label::Gpe, DetectionMethod::Contextual, 0, 5),
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].start, 0);
    }

    #[test]
    fn test_duplicates_and_document_order() {
        let resolved = resolve(vec![
            span(Label::Phone, DetectionMethod::Pattern, 30, 40),
            span(Label::Email, DetectionMethod::Pattern, 9, 25),
            span(Label::Phone, DetectionMethod::Pattern, 30, 40),
            span(Label::Person, DetectionMethod::Rule, 0, 5),
        ]);

        let ranges: Vec<(usize, usize)> = resolved.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, vec![(0, 5), (9, 25), (30, 40)]);
    }

    #[test]
    fn test_adjacent_spans_do_not_overlap() {
        let resolved = resolve(vec![
            span(Label::Person, DetectionMethod::Contextual, 0, 5),
            span(Label::Email, DetectionMethod::Pattern, 5, 10),
        ]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_same_range_unranked_labels_resolve_by_label() {
        let person = span(Label::Person, DetectionMethod::Contextual, 0, 6);
        let org = span(Label::Org, DetectionMethod::Contextual, 0, 6);

        let forward = resolve(vec![person.clone(), org.clone()]);
        let backward = resolve(vec![org, person]);
        assert_eq!(forward, backward);
        assert_eq!(forward[0].label, Label::Person);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let spans = vec![
            span(Label::Person, DetectionMethod::Contextual, 2, 9),
            span(Label::Org, DetectionMethod::Contextual, 0, 6),
            span(Label::Phone, DetectionMethod::Pattern, 8, 18),
            span(Label::Person, DetectionMethod::Rule, 20, 30),
        ];
        let mut reversed = spans.clone();
        reversed.reverse();

        assert_eq!(resolve(spans), resolve(reversed));
    }
}
