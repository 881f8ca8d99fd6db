//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Privlens configuration file.

use crate::cli::EXIT_CONFIG_ERROR;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing and applying overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Max Input Characters: {}", config.input.max_input_chars);
        println!("  Rule-Based Detection: {}", config.detection.rule_based);
        println!("  Parallel Detection: {}", config.detection.parallel);
        let contextual = &config.detection.contextual;
        match contextual.model_path.as_ref().filter(|_| contextual.enabled) {
            Some(path) => println!("  Contextual Model: {}", path.display()),
            None => println!("  Contextual Model: disabled"),
        }
        println!("  Output Format: {}", config.output.format);
        println!(
            "  Sensitive Output: {}",
            config.output.include_sensitive_output
        );
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}
