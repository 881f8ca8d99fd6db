//! Configuration schema types
//!
//! Every section has defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Privlens configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivlensConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Limits on submitted text
    #[serde(default)]
    pub input: InputConfig,

    /// Detector selection
    #[serde(default)]
    pub detection: DetectionConfig,

    /// What results contain and how they are printed
    #[serde(default)]
    pub output: OutputConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrivlensConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.detection.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Input limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Longest text accepted for analysis, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("input.max_input_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
        }
    }
}

/// Detector configuration
///
/// The pattern detector always runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Run the rule-based name extractor
    #[serde(default = "default_true")]
    pub rule_based: bool,

    /// Run detectors on separate threads before merging
    #[serde(default)]
    pub parallel: bool,

    /// Contextual entity recognizer
    #[serde(default)]
    pub contextual: ContextualConfig,
}

impl DetectionConfig {
    fn validate(&self) -> Result<(), String> {
        self.contextual.validate()
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            rule_based: true,
            parallel: false,
            contextual: ContextualConfig::default(),
        }
    }
}

/// Contextual recognizer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextualConfig {
    /// Enable the contextual detector
    #[serde(default)]
    pub enabled: bool,

    /// Gazetteer model file (TOML)
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

impl ContextualConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.model_path.as_ref().ok_or_else(|| {
            "detection.contextual.model_path is required when contextual detection is enabled"
                .to_string()
        })?;

        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            return Err(format!(
                "detection.contextual.model_path must be a .toml file, got {}",
                path.display()
            ));
        }
        if !path.exists() {
            return Err(format!(
                "detection.contextual.model_path does not exist: {}",
                path.display()
            ));
        }
        Ok(())
    }
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Console,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Invalid output format '{other}'. Must be one of: console, json"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the redacted text and entity values in results
    #[serde(default = "default_true")]
    pub include_sensitive_output: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_sensitive_output: true,
            format: OutputFormat::Console,
        }
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Write JSON lines instead of plain text
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_input_chars() -> usize {
    100_000
}

fn default_true() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/privlens_audit.log")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
