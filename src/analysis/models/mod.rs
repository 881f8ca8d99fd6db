//! Data models shared by the analysis pipeline

pub mod entity;

pub use entity::{CandidateSpan, CanonicalEntity, Category, DetectedEntity, DetectionMethod, Label};
