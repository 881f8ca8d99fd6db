//! Compliance status derived from the risk score
//!
//! # Examples
//!
//! ```
//! use privlens::analysis::compliance::{evaluate, ComplianceStatus};
//!
//! assert_eq!(evaluate(8), ComplianceStatus::SafeForPublicRelease);
//! assert_eq!(evaluate(81).to_string(), "CRITICAL - NOT SAFE");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Risk tier of an analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplianceStatus {
    /// Risk above 80
    Critical,
    /// Risk above 50
    HighRisk,
    /// Risk above 25
    ModerateRisk,
    /// Anything else
    SafeForPublicRelease,
}

impl ComplianceStatus {
    /// Human-readable status label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL - NOT SAFE",
            Self::HighRisk => "HIGH RISK - REVIEW REQUIRED",
            Self::ModerateRisk => "MODERATE RISK - REVIEW",
            Self::SafeForPublicRelease => "SAFE FOR PUBLIC RELEASE",
        }
    }

    /// Whether the text needs human review before release
    pub fn requires_review(&self) -> bool {
        !matches!(self, Self::SafeForPublicRelease)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ComplianceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Exclusive lower bounds, highest first; the final 0 entry catches the rest
pub const THRESHOLDS: &[(u32, ComplianceStatus)] = &[
    (80, ComplianceStatus::Critical),
    (50, ComplianceStatus::HighRisk),
    (25, ComplianceStatus::ModerateRisk),
    (0, ComplianceStatus::SafeForPublicRelease),
];

/// Map a risk score to its compliance status
pub fn evaluate(risk: u32) -> ComplianceStatus {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| risk > *bound)
        .map_or(ComplianceStatus::SafeForPublicRelease, |(_, status)| *status)
}
