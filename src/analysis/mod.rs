//! PII analysis pipeline
//!
//! Detects personally identifiable information in free text, resolves the
//! disagreements between detectors, and reports what was found.
//!
//! # Architecture
//!
//! - **Detection**: validated patterns, name-introduction rules and an
//!   optional contextual recognizer each propose candidate spans
//! - **Merge**: one deterministic, non-overlapping entity list
//! - **Scoring**: category, weighted risk score and compliance tier
//! - **Redaction**: `[LABEL]` placeholders over every entity
//! - **Audit**: JSON-lines log with hashed values
//!
//! # Usage
//!
//! ```
//! use privlens::analysis::{AnalysisEngine, AnalysisOptions};
//!
//! let engine = AnalysisEngine::new(AnalysisOptions::default())?;
//! let result = engine.analyze("My name is Alice Kumar and my email is alice@x.com")?;
//! assert_eq!(
//!     result.redacted_text.as_deref(),
//!     Some("My name is [PERSON] and my email is [EMAIL]")
//! );
//! # Ok::<(), privlens::domain::PrivlensError>(())
//! ```

pub mod audit;
pub mod classifier;
pub mod compliance;
pub mod detector;
pub mod distribution;
pub mod engine;
pub mod image;
pub mod merge;
pub mod models;
pub mod recognizer;
pub mod redaction;
pub mod report;
pub mod scoring;

// Re-export main types
pub use compliance::ComplianceStatus;
pub use engine::{AnalysisEngine, AnalysisOptions, AnalysisResult, ImageAnalysis};
pub use models::{CandidateSpan, CanonicalEntity, Category, DetectedEntity, DetectionMethod, Label};
pub use report::AnalysisReport;
