//! Configuration management for Privlens.
//!
//! # Overview
//!
//! Privlens uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PRIVLENS_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use privlens::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("privlens.toml")?;
//!
//! println!("Rule-based names: {}", config.detection.rule_based);
//! if config.audit.enabled {
//!     println!("Audit log: {}", config.audit.log_path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`InputConfig`] - Longest accepted input
//! - [`DetectionConfig`] - Which detectors run, and whether in parallel
//! - [`OutputConfig`] - Sensitive output and report format
//! - [`AuditConfig`] - Audit log location and format
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! max_input_chars = 100000
//!
//! [detection]
//! rule_based = true
//! parallel = false
//!
//! [detection.contextual]
//! enabled = true
//! model_path = "${PRIVLENS_MODEL_DIR}/gazetteer.toml"
//!
//! [output]
//! include_sensitive_output = true
//! format = "console"
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/privlens_audit.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use schema::{
    ApplicationConfig, AuditConfig, ContextualConfig, DetectionConfig, InputConfig,
    LoggingConfig, OutputConfig, OutputFormat, PrivlensConfig,
};
