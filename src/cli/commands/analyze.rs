//! Analyze command implementation
//!
//! Runs the analysis pipeline on inline text or a document and prints the
//! report. The redacted text can also be saved to a file.

use crate::analysis::{AnalysisEngine, AnalysisReport};
use crate::cli::{exit_code_for, load_or_default};
use crate::config::OutputFormat;
use crate::input::{load_text, validate_text};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,

    /// File to analyze (.txt, .csv; other formats need an extractor)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Omit redacted text and entity values from the report
    #[arg(long)]
    pub no_sensitive: bool,

    /// Also write the redacted text to this file
    #[arg(long, value_name = "PATH", conflicts_with = "no_sensitive")]
    pub redacted_output: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };
        if self.no_sensitive {
            config.output.include_sensitive_output = false;
        }
        let format = if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        };

        let (source, text) = match (&self.text, &self.file) {
            (Some(text), _) => ("inline text".to_string(), text.clone()),
            (None, Some(path)) => match load_text(path, None) {
                Ok(text) => (path.display().to_string(), text),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Input rejected");
                    eprintln!("❌ {e}");
                    return Ok(exit_code_for(&e));
                }
            },
            (None, None) => {
                eprintln!("❌ Either --text or --file is required");
                return Ok(crate::cli::EXIT_INPUT_ERROR);
            }
        };

        if let Err(e) = validate_text(&text, config.input.max_input_chars) {
            tracing::warn!(source = %source, error = %e, "Input rejected");
            eprintln!("❌ {e}");
            return Ok(exit_code_for(&e));
        }

        if self.redacted_output.is_some() && !config.output.include_sensitive_output {
            eprintln!("❌ --redacted-output needs output.include_sensitive_output = true");
            return Ok(crate::cli::EXIT_CONFIG_ERROR);
        }

        crate::log_analysis_start!(source, text.len());

        // Detection is CPU-bound and may load the contextual model
        let outcome = tokio::task::spawn_blocking(move || {
            let engine = AnalysisEngine::from_config(&config)?;
            engine.analyze(&text)
        })
        .await?;

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                crate::log_error_with_context!(&e, "Analysis failed");
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if let (Some(path), Some(redacted)) = (&self.redacted_output, &result.redacted_text) {
            tokio::fs::write(path, redacted)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "Redacted text written");
        }

        let report = AnalysisReport::new(source, result);
        match format {
            OutputFormat::Json => println!("{}", report.format_json()?),
            OutputFormat::Console => print!("{}", report.format_console()),
        }

        Ok(0)
    }
}
