// Privlens - PII Detection, Risk Scoring and Redaction
// Copyright (c) 2025 Privlens Contributors
// Licensed under the MIT License

//! # Privlens - PII Detection, Risk Scoring and Redaction
//!
//! Privlens finds personally identifiable information in documents, scores
//! the disclosure risk and produces a redacted copy.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** structured identifiers (email, phone, payment card, Aadhaar,
//!   PAN, IFSC) and named entities (person, organization, place)
//! - **Resolving** overlapping detections into one canonical entity list
//! - **Scoring** weighted risk, safety and a compliance tier
//! - **Redacting** text and masking OCR-scanned images
//! - **Auditing** each analysis with hashed entity values
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`analysis`] - Detection, merge, scoring, redaction and audit
//! - [`input`] - Document loading and file type validation
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use privlens::analysis::AnalysisEngine;
//! use privlens::config::load_config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("privlens.toml")?;
//!     let engine = AnalysisEngine::from_config(&config)?;
//!
//!     let result = engine.analyze("Call Priya on 9876543210")?;
//!     println!("{} ({})", result.compliance_status, result.risk_score);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library operations return [`domain::Result`] with a
//! [`domain::PrivlensError`]. Input rejections are distinguishable from
//! collaborator failures through [`domain::PrivlensError::is_input_error`].
//!
//! ## Logging
//!
//! Logging goes through `tracing`. Events carry counts, scores and timings;
//! entity values are never logged.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
