//! PII detection module
//!
//! Provides the trait-based detection interface and the three independent
//! candidate sources the merge resolver reconciles:
//!
//! - [`pattern::PatternDetector`] - validated regular expressions for structured identifiers
//! - [`rules::RuleNameExtractor`] - name-introduction phrases and field labels
//! - [`contextual::ContextualDetector`] - cleanup over an external entity recognizer

pub mod contextual;
pub mod pattern;
pub mod rules;
pub mod vocabulary;

use crate::analysis::models::{CandidateSpan, DetectionMethod};
use crate::domain::Result;

pub use contextual::ContextualDetector;
pub use pattern::{label_priority, PatternDetector, PatternRegistry};
pub use rules::RuleNameExtractor;

/// Trait for candidate span sources
pub trait CandidateDetector: Send + Sync {
    /// Detection method stamped on every span this detector emits
    fn method(&self) -> DetectionMethod;

    /// Propose candidate spans for `text`
    ///
    /// Detectors swallow their own anomalies and return an empty list; an
    /// error means a required collaborator is unavailable and the request
    /// must be aborted.
    fn detect(&self, text: &str) -> Result<Vec<CandidateSpan>>;
}
