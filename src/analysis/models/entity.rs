//! PII entity data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// PII label enumeration
///
/// The closed label set every detector reports in. Structured identifiers come
/// from the pattern detector; `Person`, `Org` and `Gpe` come from the name
/// rules and the contextual recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// Person names
    Person,
    /// Organizations
    Org,
    /// Geo-political entities (cities, states, countries)
    Gpe,
    /// Telephone numbers
    Phone,
    /// Email addresses
    Email,
    /// Aadhaar national identity numbers (12 digits)
    Aadhaar,
    /// Permanent Account Numbers (Indian tax ID)
    Pan,
    /// Payment card numbers (16 digits)
    CreditCard,
    /// Indian Financial System Codes (bank branch codes)
    Ifsc,
}

impl Label {
    /// Every label, in declaration order
    pub const ALL: [Label; 9] = [
        Label::Person,
        Label::Org,
        Label::Gpe,
        Label::Phone,
        Label::Email,
        Label::Aadhaar,
        Label::Pan,
        Label::CreditCard,
        Label::Ifsc,
    ];

    /// Get the wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::Aadhaar => "AADHAAR",
            Self::Pan => "PAN",
            Self::CreditCard => "CREDIT_CARD",
            Self::Ifsc => "IFSC",
        }
    }

    /// Redaction placeholder for this label
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.as_str())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detection method used to identify PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Validated regular expression match
    Pattern,
    /// Contextual phrase rule ("my name is ...")
    Rule,
    /// External entity recognizer
    Contextual,
}

impl DetectionMethod {
    /// Conflict priority; lower wins
    pub fn priority(&self) -> u8 {
        match self {
            Self::Pattern => 0,
            Self::Rule => 1,
            Self::Contextual => 2,
        }
    }

    /// Get the wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Rule => "rule",
            Self::Contextual => "contextual",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy category an entity is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Financial,
    Government,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Financial => "Financial",
            Self::Government => "Government",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate PII span proposed by a single detector
///
/// `start` and `end` are half-open byte offsets into the analyzed text and
/// always fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSpan {
    /// Matched substring
    pub value: String,
    /// PII label
    pub label: Label,
    /// Detector that proposed the span
    pub detection_method: DetectionMethod,
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl CandidateSpan {
    /// Create a new candidate span
    pub fn new(
        value: impl Into<String>,
        label: Label,
        detection_method: DetectionMethod,
        start: usize,
        end: usize,
    ) -> Self {
        debug_assert!(start < end, "candidate span must not be empty");
        Self {
            value: value.into(),
            label,
            detection_method,
            start,
            end,
        }
    }

    /// Create a span by slicing `text`, returning `None` for empty or invalid ranges
    pub fn from_text(
        text: &str,
        label: Label,
        detection_method: DetectionMethod,
        start: usize,
        end: usize,
    ) -> Option<Self> {
        if start >= end {
            return None;
        }
        let value = text.get(start..end)?;
        Some(Self::new(value, label, detection_method, start, end))
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open range overlap test
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }
}

/// Candidate span that survived conflict resolution, with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEntity {
    pub value: String,
    pub label: Label,
    pub category: Category,
    pub detection_method: DetectionMethod,
    pub start: usize,
    pub end: usize,
}

impl CanonicalEntity {
    /// Attach a category to a resolved span
    pub fn from_span(span: CandidateSpan, category: Category) -> Self {
        Self {
            value: span.value,
            label: span.label,
            category,
            detection_method: span.detection_method,
            start: span.start,
            end: span.end,
        }
    }

    /// External view with offsets stripped
    pub fn to_detected(&self) -> DetectedEntity {
        DetectedEntity {
            value: self.value.clone(),
            label: self.label,
            category: self.category,
            detection_method: self.detection_method,
        }
    }
}

/// Entity as exposed to callers of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedEntity {
    pub value: String,
    pub label: Label,
    pub category: Category,
    pub detection_method: DetectionMethod,
}
