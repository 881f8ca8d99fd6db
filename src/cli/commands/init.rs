//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{DEFAULT_CONFIG_PATH, EXIT_CONFIG_ERROR, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Privlens configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Optionally point detection.contextual.model_path at a gazetteer");
                println!("  3. Validate configuration: privlens validate-config");
                println!("  4. Analyze a document: privlens analyze --file notes.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# Privlens Configuration File

[application]
log_level = "info"

[input]
max_input_chars = 100000

[detection]
rule_based = true
parallel = false

[detection.contextual]
enabled = false
# model_path = "models/gazetteer.toml"

[output]
include_sensitive_output = true
format = "console"

[audit]
enabled = false
log_path = "./audit/privlens_audit.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# Privlens Configuration File
#
# Every option can be overridden with a PRIVLENS_<SECTION>_<KEY> environment
# variable, e.g. PRIVLENS_OUTPUT_FORMAT=json. Values may reference
# environment variables with ${VAR} syntax.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Input
# ============================================================================
[input]
# Longer texts are rejected before analysis
max_input_chars = 100000

# ============================================================================
# Detection
# ============================================================================
[detection]
# Run the rule-based PERSON/ORG patterns in addition to the structured
# identifier patterns
rule_based = true

# Run detectors on separate threads. Results are identical either way.
parallel = false

# Contextual (model-backed) PERSON/ORG/GPE recognition
[detection.contextual]
enabled = false

# Gazetteer model file, loaded on first use
# model_path = "models/gazetteer.toml"

# ============================================================================
# Output
# ============================================================================
[output]
# When false, results omit redacted text and detected entity values
include_sensitive_output = true

# console | json
format = "console"

# ============================================================================
# Audit Log
# ============================================================================
[audit]
# Append one record per analysis. Entity values are stored as SHA-256 hashes.
enabled = false
log_path = "./audit/privlens_audit.log"

# JSON lines when true, plain text otherwise
json_format = true

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files with rotation (daily or hourly)
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
