//! Human-readable analysis reports
//!
//! Wraps an [`AnalysisResult`] with where the text came from and renders it
//! for the console or as JSON.

use crate::analysis::engine::AnalysisResult;
use serde::Serialize;

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════\n";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────\n";

/// Maximum characters of an entity value shown in the console
const MAX_VALUE_CHARS: usize = 40;

/// Analysis report for one input
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Where the text came from (file path or "inline text")
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let result = &self.result;
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str("                   PRIVACY ANALYSIS REPORT                     \n");
        output.push_str(RULE_HEAVY);
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str(RULE_LIGHT);
        output.push_str(&format!("  Source:             {}\n", self.source));
        output.push_str(&format!("  Entities Detected:  {}\n", result.entity_count()));
        output.push_str(&format!("  Risk Score:         {}\n", result.risk_score));
        output.push_str(&format!("  Safety Score:       {}/100\n", result.safety_score));
        output.push_str(&format!("  Compliance Status:  {}\n", result.compliance_status));
        if let Some(id) = &result.analysis_id {
            output.push_str(&format!("  Audit Entry:        {id}\n"));
        }
        output.push('\n');

        if !result.category_distribution.is_empty() {
            output.push_str("🔍 DISTRIBUTION\n");
            output.push_str(RULE_LIGHT);
            for (category, count) in &result.category_distribution {
                output.push_str(&format!("  {:30} {:>5}\n", category.as_str(), count));
            }
            output.push_str(RULE_LIGHT);
            for (label, count) in &result.label_distribution {
                output.push_str(&format!("  {:30} {:>5}\n", label.as_str(), count));
            }
            output.push('\n');
        }

        if let Some(entities) = result.detected_entities.as_ref().filter(|e| !e.is_empty()) {
            output.push_str("📝 DETECTED ENTITIES\n");
            output.push_str(RULE_LIGHT);
            for entity in entities {
                output.push_str(&format!(
                    "  {:12} {:10} {:11} \"{}\"\n",
                    entity.label.as_str(),
                    entity.category.as_str(),
                    entity.detection_method.as_str(),
                    truncate(&entity.value)
                ));
            }
            output.push('\n');
        }

        if let Some(redacted) = &result.redacted_text {
            output.push_str("🔒 REDACTED TEXT\n");
            output.push_str(RULE_LIGHT);
            for line in redacted.lines() {
                output.push_str(&format!("  {line}\n"));
            }
            output.push('\n');
        }

        output.push_str(RULE_HEAVY);
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_CHARS {
        let head: String = value.chars().take(MAX_VALUE_CHARS - 3).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}
