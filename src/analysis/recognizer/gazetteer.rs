//! Dictionary-backed entity recognizer
//!
//! Tags whole-word occurrences of known person, organization and location
//! names. The model is a TOML file:
//!
//! ```toml
//! model_id = "sample-gazetteer"
//! persons = ["Alice Kumar"]
//! organizations = ["Acme Technologies Ltd"]
//! locations = ["Mumbai"]
//! ```

use super::{EntityRecognizer, RecognizedSpan};
use crate::domain::{PrivlensError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    #[serde(default = "default_model_id")]
    model_id: String,
    #[serde(default)]
    persons: Vec<String>,
    #[serde(default)]
    organizations: Vec<String>,
    #[serde(default)]
    locations: Vec<String>,
}

fn default_model_id() -> String {
    "gazetteer".to_string()
}

/// Gazetteer entry list compiled for one coarse label
struct LabeledMatcher {
    label: &'static str,
    regex: Regex,
}

/// Recognizer backed by fixed name lists
pub struct GazetteerRecognizer {
    model_id: String,
    matchers: Vec<LabeledMatcher>,
}

impl GazetteerRecognizer {
    /// Load a gazetteer model from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrivlensError::ModelUnavailable(format!(
                "Failed to read gazetteer model {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Build a gazetteer model from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: GazetteerFile = toml::from_str(content).map_err(|e| {
            PrivlensError::ModelUnavailable(format!("Failed to parse gazetteer model: {e}"))
        })?;

        let mut matchers = Vec::new();
        for (label, terms) in [
            ("PERSON", &file.persons),
            ("ORG", &file.organizations),
            ("GPE", &file.locations),
        ] {
            if let Some(regex) = compile_terms(terms)? {
                matchers.push(LabeledMatcher { label, regex });
            }
        }

        Ok(Self {
            model_id: file.model_id,
            matchers,
        })
    }
}

/// Compile a term list into one whole-word alternation, longest terms first
fn compile_terms(terms: &[String]) -> Result<Option<Regex>> {
    let mut terms: Vec<&str> = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return Ok(None);
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
        .map(Some)
        .map_err(|e| PrivlensError::ModelUnavailable(format!("Invalid gazetteer term: {e}")))
}

impl EntityRecognizer for GazetteerRecognizer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn recognize(&self, text: &str) -> Result<Vec<RecognizedSpan>> {
        let mut spans: Vec<RecognizedSpan> = self
            .matchers
            .iter()
            .flat_map(|matcher| {
                matcher.regex.find_iter(text).map(move |m| {
                    RecognizedSpan::new(m.as_str(), matcher.label, m.start(), m.end())
                })
            })
            .collect();
        spans.sort_by_key(|s| (s.start, s.end));
        Ok(spans)
    }
}
