//! Contextual entity detection over an external recognizer
//!
//! Raw recognizer output is noisy around names: trailing function words,
//! form labels picked up as entities, short personal names tagged as
//! organizations. This detector keeps the accepted labels and cleans them.

use super::vocabulary::{is_business_suffix, is_name_token, is_stop_word, is_structural_keyword};
use super::CandidateDetector;
use crate::analysis::models::{CandidateSpan, DetectionMethod, Label};
use crate::analysis::recognizer::{ModelHandle, RecognizedSpan};
use crate::domain::{PrivlensError, Result};
use std::sync::Arc;

/// Maximum tokens in a cleaned PERSON span
const MAX_PERSON_TOKENS: usize = 4;

/// Maximum words in an ORG span eligible for PERSON reclassification
const MAX_RECLASSIFIED_ORG_WORDS: usize = 3;

/// Recognizer labels the detector accepts
const ACCEPTED_LABELS: [(&str, Label); 3] = [
    ("PERSON", Label::Person),
    ("ORG", Label::Org),
    ("GPE", Label::Gpe),
];

/// Detector wrapping the shared entity recognizer
pub struct ContextualDetector {
    model: Arc<ModelHandle>,
}

impl ContextualDetector {
    pub fn new(model: Arc<ModelHandle>) -> Self {
        Self { model }
    }

    fn clean(&self, text: &str, span: &RecognizedSpan) -> Option<CandidateSpan> {
        let label = ACCEPTED_LABELS
            .iter()
            .find(|(name, _)| *name == span.label)
            .map(|(_, label)| *label)?;

        let Some(value) = text.get(span.start..span.end).filter(|v| !v.is_empty()) else {
            tracing::warn!(
                start = span.start,
                end = span.end,
                "Recognizer returned an invalid span, skipping"
            );
            return None;
        };

        match label {
            Label::Person => clean_person(text, span.start, value),
            Label::Org => clean_org(text, span.start, span.end, value),
            _ => CandidateSpan::from_text(
                text,
                label,
                DetectionMethod::Contextual,
                span.start,
                span.end,
            ),
        }
    }
}

impl CandidateDetector for ContextualDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Contextual
    }

    fn detect(&self, text: &str) -> Result<Vec<CandidateSpan>> {
        let model = self.model.ensure_loaded()?;
        let recognized = model.recognize(text).map_err(|e| match e {
            PrivlensError::ModelUnavailable(_) => e,
            other => PrivlensError::ModelUnavailable(other.to_string()),
        })?;

        Ok(recognized
            .iter()
            .filter_map(|span| self.clean(text, span))
            .collect())
    }
}

/// Whitespace-separated tokens of `s` with their byte offsets
fn tokens_with_offsets(s: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut token_start = None;

    for (i, c) in s.char_indices() {
        match (c.is_whitespace(), token_start) {
            (true, Some(start)) => {
                tokens.push((start, &s[start..i]));
                token_start = None;
            }
            (false, None) => token_start = Some(i),
            _ => {}
        }
    }
    if let Some(start) = token_start {
        tokens.push((start, &s[start..]));
    }

    tokens
}

/// Re-trim a PERSON entity at the first stop-word or non-name token
fn clean_person(text: &str, start: usize, value: &str) -> Option<CandidateSpan> {
    let kept: Vec<(usize, &str)> = tokens_with_offsets(value)
        .into_iter()
        .take_while(|(_, token)| is_name_token(token) && !is_stop_word(token))
        .collect();

    if kept.is_empty() || kept.len() > MAX_PERSON_TOKENS {
        return None;
    }

    let (first_offset, _) = kept[0];
    let (last_offset, last_token) = kept[kept.len() - 1];
    let span = CandidateSpan::from_text(
        text,
        Label::Person,
        DetectionMethod::Contextual,
        start + first_offset,
        start + last_offset + last_token.len(),
    )?;

    if is_structural_keyword(&span.value) {
        return None;
    }
    Some(span)
}

/// Drop structural ORG hits and relabel short unsuffixed ones as PERSON
fn clean_org(text: &str, start: usize, end: usize, value: &str) -> Option<CandidateSpan> {
    if is_structural_keyword(value) {
        return None;
    }

    let words: Vec<&str> = value.split_whitespace().collect();
    let looks_personal = (1..=MAX_RECLASSIFIED_ORG_WORDS).contains(&words.len())
        && words
            .iter()
            .all(|w| w.chars().all(char::is_alphabetic) && !is_business_suffix(w));

    let label = if looks_personal { Label::Person } else { Label::Org };
    CandidateSpan::from_text(text, label, DetectionMethod::Contextual, start, end)
}
