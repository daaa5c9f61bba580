//! Configuration file support for depgraph-forge.
//!
//! Provides YAML-based configuration through `depgraph-forge.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::application::dto::{EnvironmentScope, OutputFormat};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depgraph-forge.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub builder_program: Option<String>,
    pub builder_args: Option<Vec<String>>,
    pub cache_env_var: Option<String>,
    pub default_user: Option<String>,
    pub default_channel: Option<String>,
    pub manifest_filename: Option<String>,
    pub environment_scope: Option<String>,
    pub prepend_path: Option<Vec<PathBuf>>,
    pub workdir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `environment_scope`; only valid after validation
    pub fn environment_scope(&self) -> Option<EnvironmentScope> {
        self.environment_scope
            .as_deref()
            .and_then(|s| EnvironmentScope::from_str(s).ok())
    }

    /// Parsed `format`; only valid after validation
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|s| OutputFormat::from_str(s).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref program) = config.builder_program {
        if program.trim().is_empty() {
            bail!(
                "Invalid config: builder_program must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default builder (conan)."
            );
        }
    }

    if let Some(ref name) = config.cache_env_var {
        if name.trim().is_empty() || name.contains('=') || name.contains('\0') {
            bail!(
                "Invalid config: cache_env_var '{}' is not a valid variable name.\n\n\
                 💡 Hint: Use a plain name such as CONAN_USER_HOME.",
                name
            );
        }
    }

    if let Some(ref filename) = config.manifest_filename {
        if filename.trim().is_empty() || filename.contains(['/', '\\']) {
            bail!(
                "Invalid config: manifest_filename '{}' must be a plain file name.\n\n\
                 💡 Hint: The manifest is written inside each node directory (e.g., \"conanfile.py\").",
                filename
            );
        }
    }

    if let Some(ref scope) = config.environment_scope {
        EnvironmentScope::from_str(scope)
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
builder_program: conan
builder_args:
  - create
  - .
  - "{user}/{channel}"
cache_env_var: CONAN_HOME
default_user: lasote
default_channel: testing
manifest_filename: conanfile.py
environment_scope: process
prepend_path:
  - /opt/conan/bin
workdir: /tmp/graph-work
format: json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.builder_program.as_deref(), Some("conan"));
        assert_eq!(
            config.builder_args.as_deref(),
            Some(&["create".to_string(), ".".to_string(), "{user}/{channel}".to_string()][..])
        );
        assert_eq!(config.cache_env_var.as_deref(), Some("CONAN_HOME"));
        assert_eq!(config.default_user.as_deref(), Some("lasote"));
        assert_eq!(config.default_channel.as_deref(), Some("testing"));
        assert_eq!(config.environment_scope(), Some(EnvironmentScope::Process));
        assert_eq!(
            config.prepend_path,
            Some(vec![PathBuf::from("/opt/conan/bin")])
        );
        assert_eq!(config.workdir, Some(PathBuf::from("/tmp/graph-work")));
        assert!(config.cache_dir.is_none());
        assert_eq!(config.format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: shell\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format(), Some(OutputFormat::Shell));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_builder_program_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "builder_program: \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("builder_program must not be empty"));
    }

    #[test]
    fn test_invalid_cache_env_var_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "cache_env_var: \"A=B\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("not a valid variable name"));
    }

    #[test]
    fn test_manifest_filename_with_separator_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "manifest_filename: ../conanfile.py\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must be a plain file name"));
    }

    #[test]
    fn test_unknown_scope_and_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");

        fs::write(&config_path, "environment_scope: global\n").unwrap();
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid environment scope"));

        fs::write(&config_path, "format: xml\n").unwrap();
        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.builder_program.is_none());
        assert!(config.builder_args.is_none());
        assert!(config.environment_scope().is_none());
        assert!(config.format().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
