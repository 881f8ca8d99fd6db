//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{OutputFormat, PrivlensConfig};
use crate::domain::errors::PrivlensError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static ENV_PLACEHOLDER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").ok());

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PrivlensConfig
/// 4. Applies environment variable overrides (PRIVLENS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`PrivlensError::Configuration`] if the file cannot be read or
/// parsed, a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use privlens::config::loader::load_config;
///
/// let config = load_config("privlens.toml")?;
/// # Ok::<(), privlens::domain::PrivlensError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PrivlensConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrivlensError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrivlensError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Loads configuration from TOML content
pub fn load_config_str(contents: &str) -> Result<PrivlensConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PrivlensConfig = toml::from_str(&contents)
        .map_err(|e| PrivlensError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PrivlensError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = ENV_PLACEHOLDER.as_ref().ok_or_else(|| {
        PrivlensError::Configuration("Invalid environment placeholder regex".to_string())
    })?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                if !missing_vars.iter().any(|v| v == var_name) {
                    missing_vars.push(var_name.to_string());
                }
                String::new()
            })
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PrivlensError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parse a boolean override, rejecting anything but true/false
fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        PrivlensError::Configuration(format!("{name} must be 'true' or 'false', got '{value}'"))
    })
}

/// Applies environment variable overrides using PRIVLENS_* prefix
///
/// Environment variables follow the pattern: PRIVLENS_<SECTION>_<KEY>
/// For example: PRIVLENS_APPLICATION_LOG_LEVEL, PRIVLENS_AUDIT_ENABLED
fn apply_env_overrides(config: &mut PrivlensConfig) -> Result<()> {
    let var = |name: &str| std::env::var(name).ok();

    // Application overrides
    if let Some(val) = var("PRIVLENS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Input overrides
    if let Some(val) = var("PRIVLENS_INPUT_MAX_INPUT_CHARS") {
        config.input.max_input_chars = val.trim().parse().map_err(|_| {
            PrivlensError::Configuration(format!(
                "PRIVLENS_INPUT_MAX_INPUT_CHARS must be a positive integer, got '{val}'"
            ))
        })?;
    }

    // Detection overrides
    if let Some(val) = var("PRIVLENS_DETECTION_RULE_BASED") {
        config.detection.rule_based = parse_bool("PRIVLENS_DETECTION_RULE_BASED", &val)?;
    }
    if let Some(val) = var("PRIVLENS_DETECTION_PARALLEL") {
        config.detection.parallel = parse_bool("PRIVLENS_DETECTION_PARALLEL", &val)?;
    }
    if let Some(val) = var("PRIVLENS_DETECTION_CONTEXTUAL_ENABLED") {
        config.detection.contextual.enabled =
            parse_bool("PRIVLENS_DETECTION_CONTEXTUAL_ENABLED", &val)?;
    }
    if let Some(val) = var("PRIVLENS_DETECTION_CONTEXTUAL_MODEL_PATH") {
        config.detection.contextual.model_path = Some(PathBuf::from(val));
    }

    // Output overrides
    if let Some(val) = var("PRIVLENS_OUTPUT_INCLUDE_SENSITIVE_OUTPUT") {
        config.output.include_sensitive_output =
            parse_bool("PRIVLENS_OUTPUT_INCLUDE_SENSITIVE_OUTPUT", &val)?;
    }
    if let Some(val) = var("PRIVLENS_OUTPUT_FORMAT") {
        config.output.format = val
            .parse::<OutputFormat>()
            .map_err(PrivlensError::Configuration)?;
    }

    // Audit overrides
    if let Some(val) = var("PRIVLENS_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("PRIVLENS_AUDIT_ENABLED", &val)?;
    }
    if let Some(val) = var("PRIVLENS_AUDIT_LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }
    if let Some(val) = var("PRIVLENS_AUDIT_JSON_FORMAT") {
        config.audit.json_format = parse_bool("PRIVLENS_AUDIT_JSON_FORMAT", &val)?;
    }

    // Logging overrides
    if let Some(val) = var("PRIVLENS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("PRIVLENS_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = var("PRIVLENS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = var("PRIVLENS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PRIVLENS_TEST_LOADER_DIR", "/tmp/privlens");
        let input = "log_path = \"${PRIVLENS_TEST_LOADER_DIR}/audit.log\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "log_path = \"/tmp/privlens/audit.log\"\n");
        std::env::remove_var("PRIVLENS_TEST_LOADER_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PRIVLENS_TEST_MISSING_VAR");
        let input = "log_path = \"${PRIVLENS_TEST_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("PRIVLENS_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("PRIVLENS_TEST_COMMENTED_VAR");
        let input = "# log_path = \"${PRIVLENS_TEST_COMMENTED_VAR}\"\n";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(!parse_bool("X", " false ").unwrap());
        assert!(parse_bool("X", "yes").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(PrivlensError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[detection]
rule_based = false
parallel = true

[output]
include_sensitive_output = false
format = "json"

[audit]
enabled = false
log_path = "./audit/test.log"
json_format = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert!(!config.detection.rule_based);
        assert!(config.detection.parallel);
        assert!(!config.output.include_sensitive_output);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.audit.log_path, PathBuf::from("./audit/test.log"));
        assert!(!config.audit.json_format);
    }

    #[test]
    fn test_load_config_invalid_level() {
        let err = load_config_str("[application]\nlog_level = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
