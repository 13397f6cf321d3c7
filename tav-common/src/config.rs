//! Configuration loading and setting resolution
//!
//! Every setting is resolved in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback, where one exists)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the hierarchy workbook
pub const ENV_ENCODING_FILE: &str = "TAV_ENCODING_FILE";
/// Environment variable naming the annotations root directory
pub const ENV_ANNOTATIONS_DIR: &str = "TAV_ANNOTATIONS_DIR";
/// Environment variable naming the export directory
pub const ENV_OUTPUT_DIR: &str = "TAV_OUTPUT_DIR";
/// Environment variable naming the workbook sheet
pub const ENV_SHEET_NAME: &str = "TAV_SHEET_NAME";

/// Logging section of the TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Contents of `config.toml`
///
/// All fields are optional; missing ones fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub encoding_file: Option<PathBuf>,
    pub annotations_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub sheet_name: Option<String>,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Load the explicit config file, or the per-user one if it exists
    ///
    /// An explicit path that does not exist is an error. A missing per-user
    /// file is not: defaults are used instead.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

/// Compiled fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub annotations_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_name: String,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            annotations_dir: PathBuf::from("annotations"),
            output_dir: PathBuf::from("stage1_output"),
            sheet_name: "Sheet1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Per-user config file location (`~/.config/tav/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tav").join("config.toml"))
}

/// Resolve a string setting: CLI → ENV → TOML
///
/// Empty environment values are treated as unset.
pub fn resolve_value(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_value: Option<&str>,
) -> Option<String> {
    if let Some(value) = cli_arg {
        return Some(value.to_string());
    }

    if let Ok(value) = std::env::var(env_var_name) {
        if !value.is_empty() {
            return Some(value);
        }
    }

    toml_value.map(str::to_string)
}

/// Resolve a path setting: CLI → ENV → TOML → default
///
/// A value that resolves to an empty string is rejected.
pub fn resolve_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_value: Option<&Path>,
    default: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let cli = cli_arg.map(|p| p.to_string_lossy().into_owned());
    let toml = toml_value.map(|p| p.to_string_lossy().into_owned());

    let resolved = resolve_value(cli.as_deref(), env_var_name, toml.as_deref())
        .map(PathBuf::from)
        .or_else(|| default.map(Path::to_path_buf));

    match resolved {
        Some(path) if path.as_os_str().is_empty() => Err(Error::InvalidInput(format!(
            "Empty path for setting {}",
            env_var_name
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_default_level() {
        assert_eq!(LoggingConfig::default().level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: TomlConfig = toml::from_str("output_dir = \"out\"\n").unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert!(config.encoding_file.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_logging_section() {
        let config: TomlConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cli_wins_over_toml() {
        let value = resolve_value(Some("cli"), "TAV_TEST_UNSET_VARIABLE", Some("toml"));
        assert_eq!(value.as_deref(), Some("cli"));
    }

    #[test]
    fn test_toml_used_when_nothing_else() {
        let value = resolve_value(None, "TAV_TEST_UNSET_VARIABLE", Some("toml"));
        assert_eq!(value.as_deref(), Some("toml"));
    }

    #[test]
    fn test_default_path_fallback() {
        let path = resolve_path(
            None,
            "TAV_TEST_UNSET_VARIABLE",
            None,
            Some(Path::new("fallback")),
        )
        .unwrap();
        assert_eq!(path, Some(PathBuf::from("fallback")));
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = resolve_path(Some(Path::new("")), "TAV_TEST_UNSET_VARIABLE", None, None);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
