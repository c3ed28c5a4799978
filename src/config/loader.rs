//! Configuration loader with TOML parsing and environment variable
//! overrides
//!
//! Loading order: file contents, `${VAR}` substitution, TOML parse,
//! `PARTEX_*` overrides, validation.

use super::schema::PartexConfig;
use crate::domain::errors::PartexError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated, or
/// if a referenced environment variable is not set.
///
/// # Examples
///
/// ```no_run
/// use partex::config::load_config;
///
/// let config = load_config("partex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PartexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PartexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PartexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PartexConfig = toml::from_str(&contents)
        .map_err(|e| PartexError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PartexError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration from the default path, falling back to defaults
///
/// A missing file at the default path is not an error — the tool works
/// against a local service out of the box. An unreadable or invalid file
/// still fails loudly.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PartexConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = PartexConfig::default();
        apply_env_overrides(&mut config);
        config.validate().map_err(|e| {
            PartexError::Configuration(format!("Configuration validation failed: {}", e))
        })?;
        return Ok(config);
    }
    load_config(path)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Referencing an unset variable is an
/// error so a half-substituted configuration never loads.
fn substitute_env_vars(input: &str) -> Result<String> {
    let placeholder = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut missing = Vec::new();

    let substituted: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            placeholder
                .replace_all(line, |caps: &regex::Captures<'_>| {
                    let name = &caps[1];
                    std::env::var(name).unwrap_or_else(|_| {
                        if !missing.iter().any(|m| m == name) {
                            missing.push(name.to_string());
                        }
                        String::new()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing.is_empty() {
        return Err(PartexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    Ok(substituted.join("\n") + "\n")
}

/// Applies environment variable overrides using the PARTEX_* prefix
///
/// Variables follow the pattern PARTEX_<SECTION>_<KEY>, e.g.
/// PARTEX_SERVICE_BASE_URL.
fn apply_env_overrides(config: &mut PartexConfig) {
    if let Ok(val) = std::env::var("PARTEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PARTEX_SERVICE_BASE_URL") {
        config.service.base_url = val;
    }
    if let Ok(val) = std::env::var("PARTEX_SERVICE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.service.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("PARTEX_SERVICE_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.service.connect_timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("PARTEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PARTEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PARTEX_TEST_VAR", "http://example.com");
        let input = "base_url = \"${PARTEX_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "base_url = \"http://example.com\"\n");
        std::env::remove_var("PARTEX_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PARTEX_MISSING_VAR");
        let input = "base_url = \"${PARTEX_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("PARTEX_COMMENTED_VAR");
        let input = "# base_url = \"${PARTEX_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "partex"
log_level = "debug"

[service]
base_url = "https://export.example.com"
timeout_seconds = 120
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.service.base_url, "https://export.example.com");
        assert_eq!(config.service.timeout_seconds, 120);
    }

    #[test]
    fn test_load_config_invalid_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nbase_url = \"ftp://nope\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
