//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Privlens using clap.

pub mod commands;

use crate::config::{load_config, load_config_str, PrivlensConfig};
use crate::domain::{PrivlensError, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "privlens.toml";

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code for rejected input
pub const EXIT_INPUT_ERROR: i32 = 3;
/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;

/// Privlens - PII detection, risk scoring and redaction
#[derive(Parser, Debug)]
#[command(name = "privlens")]
#[command(version, about, long_about = None)]
#[command(author = "Privlens Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "PRIVLENS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRIVLENS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text or a document for PII
    Analyze(commands::analyze::AnalyzeArgs),

    /// Plan and paint redaction masks for an OCR-scanned image
    MaskImage(commands::mask_image::MaskImageArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Load the configuration, falling back to defaults when the default file is absent
///
/// An explicitly named file that does not exist is still an error.
pub fn load_or_default(config_path: &str) -> Result<PrivlensConfig> {
    if config_path == DEFAULT_CONFIG_PATH && !Path::new(config_path).exists() {
        tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        return load_config_str("");
    }
    load_config(config_path)
}

/// Process exit code for a pipeline error
pub fn exit_code_for(error: &PrivlensError) -> i32 {
    match error {
        PrivlensError::Configuration(_) => EXIT_CONFIG_ERROR,
        e if e.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FATAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_analyze_text() {
        let cli = Cli::parse_from(["privlens", "analyze", "--text", "hello"]);
        assert_eq!(cli.config, "privlens.toml");
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.text.as_deref(), Some("hello")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "privlens",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_analyze_requires_one_source() {
        assert!(Cli::try_parse_from(["privlens", "analyze"]).is_err());
        assert!(Cli::try_parse_from([
            "privlens", "analyze", "--text", "a", "--file", "b.txt"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parse_mask_image() {
        let cli = Cli::parse_from(["privlens", "mask-image", "--ocr", "words.json"]);
        match cli.command {
            Commands::MaskImage(args) => assert_eq!(args.padding, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_mask_image_needs_both_paths() {
        assert!(Cli::try_parse_from([
            "privlens", "mask-image", "--ocr", "w.json", "--image", "scan.png"
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "privlens", "mask-image", "--ocr", "w.json", "--image", "scan.png", "--output", "out.png"
        ])
        .is_ok());
    }

    #[test]
    fn test_cli_redacted_output_conflicts_with_no_sensitive() {
        assert!(Cli::try_parse_from([
            "privlens", "analyze", "--text", "a", "--redacted-output", "r.txt", "--no-sensitive"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["privlens", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code_for(&PrivlensError::Configuration("bad".to_string())),
            EXIT_CONFIG_ERROR
        );
        assert_eq!(
            exit_code_for(&PrivlensError::Io("missing".to_string())),
            EXIT_INPUT_ERROR
        );
        assert_eq!(
            exit_code_for(&PrivlensError::ModelUnavailable("gone".to_string())),
            EXIT_FATAL
        );
        assert_eq!(exit_code_for(&PrivlensError::EmptyInput), EXIT_INPUT_ERROR);
        assert_eq!(
            exit_code_for(&PrivlensError::InputTooLarge { chars: 100_001, max: 100_000 }),
            EXIT_INPUT_ERROR
        );
    }

    #[test]
    fn test_load_or_default_rejects_missing_explicit_file() {
        assert!(load_or_default("/nonexistent/privlens.toml").is_err());
    }
}
