//! Pattern library and regex-based detector for structured identifiers

use super::CandidateDetector;
use crate::analysis::models::{CandidateSpan, DetectionMethod, Label};
use crate::domain::{PrivlensError, Result};
use fancy_regex::Regex;
use std::sync::Arc;

/// Post-match validation applied to the digits of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitRule {
    /// No validation
    Any,
    /// Exactly this many digits after stripping separators
    Exact(usize),
    /// 10 digits, optionally prefixed with the `91` country code
    IndianPhone,
    /// 12 digits that do not read as a `91`-prefixed phone number
    Aadhaar,
}

impl DigitRule {
    /// Check the digits of `matched` against the rule
    pub fn accepts(&self, matched: &str) -> bool {
        let digits: String = matched.chars().filter(char::is_ascii_digit).collect();
        match self {
            Self::Any => true,
            Self::Exact(count) => digits.len() == *count,
            Self::IndianPhone => {
                let national = if digits.len() == 12 && digits.starts_with("91") {
                    &digits[2..]
                } else {
                    digits.as_str()
                };
                national.len() == 10
            }
            Self::Aadhaar => {
                let unseparated = digits.len() == matched.len();
                digits.len() == 12 && !(unseparated && digits.starts_with("91"))
            }
        }
    }

    /// Check a match against the rule in its surrounding text
    ///
    /// `start..end` must be a match range inside `text`.
    pub fn accepts_in(&self, text: &str, start: usize, end: usize) -> bool {
        if *self == Self::Aadhaar && text[..start].ends_with('+') {
            return false;
        }
        self.accepts(&text[start..end])
    }
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII label
    pub label: Label,
    /// Digit validation
    pub rule: DigitRule,
}

/// Built-in pattern table in declaration (priority) order
///
/// Longer digit groups are declared before shorter ones: a card number also
/// contains an Aadhaar-shaped prefix and the phone pattern can claim a
/// `91`-prefixed group, so their order decides overlaps. Aadhaar validation
/// gives up unseparated `91` runs and `+`-prefixed digits to the phone pattern.
const DEFAULT_PATTERNS: &[(Label, &str, DigitRule)] = &[
    (
        Label::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        DigitRule::Any,
    ),
    (
        Label::CreditCard,
        r"\b(?:\d{4}[-\s]?){3}\d{4}\b",
        DigitRule::Exact(16),
    ),
    (
        Label::Aadhaar,
        r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}\b",
        DigitRule::Aadhaar,
    ),
    (Label::Pan, r"\b[A-Z]{5}\d{4}[A-Z]\b", DigitRule::Any),
    (Label::Ifsc, r"\b[A-Z]{4}0[A-Z0-9]{6}\b", DigitRule::Any),
    (
        Label::Phone,
        r"(?<!\d)(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{2,5}\)?[-.\s]?)?\d{4,5}[-.\s]?\d{4,5}(?!\d)",
        DigitRule::IndianPhone,
    ),
];

/// Pattern registry for PII detection
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create the registry with the built-in patterns
    pub fn default_patterns() -> Result<Self> {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|(label, pattern, rule)| {
                let regex = Regex::new(pattern).map_err(|e| {
                    PrivlensError::Configuration(format!("Invalid regex for {label}: {e}"))
                })?;
                Ok(CompiledPattern {
                    regex,
                    label: *label,
                    rule: *rule,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Get all patterns in declaration order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}

/// Tie-break priority of a label among spans of equal method priority
///
/// Follows the pattern table's declaration order; labels not in the table
/// rank after every pattern label.
pub fn label_priority(label: Label) -> usize {
    DEFAULT_PATTERNS
        .iter()
        .position(|(l, _, _)| *l == label)
        .unwrap_or(DEFAULT_PATTERNS.len())
}

/// Regex-based detector for structured identifiers
pub struct PatternDetector {
    registry: Arc<PatternRegistry>,
}

impl PatternDetector {
    /// Create a new pattern detector with the built-in patterns
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(PatternRegistry::default_patterns()?))
    }

    /// Create a pattern detector with a custom registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    fn detect_in_string(&self, text: &str) -> Vec<CandidateSpan> {
        let mut spans = Vec::new();

        for pattern in self.registry.all_patterns() {
            for found in pattern.regex.find_iter(text) {
                let matched = match found {
                    Ok(m) => m,
                    Err(e) => {
                        // Backtracking limit or similar; the rest of this pattern is skipped
                        tracing::warn!(label = %pattern.label, error = %e, "Pattern match aborted");
                        break;
                    }
                };

                if matched.start() == matched.end()
                    || !pattern.rule.accepts_in(text, matched.start(), matched.end())
                {
                    continue;
                }

                spans.push(CandidateSpan::new(
                    matched.as_str(),
                    pattern.label,
                    DetectionMethod::Pattern,
                    matched.start(),
                    matched.end(),
                ));
            }
        }

        spans
    }
}

impl CandidateDetector for PatternDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Pattern
    }

    fn detect(&self, text: &str) -> Result<Vec<CandidateSpan>> {
        Ok(self.detect_in_string(text))
    }
}
