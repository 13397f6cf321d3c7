//! Run configuration for tav-extract
//!
//! Each setting resolves CLI → ENV → TOML → compiled default. The encoding
//! workbook has no compiled default and must be configured somewhere.

use std::path::{Path, PathBuf};
use tav_common::config::{
    resolve_path, resolve_value, CompiledDefaults, TomlConfig, ENV_ANNOTATIONS_DIR,
    ENV_ENCODING_FILE, ENV_OUTPUT_DIR, ENV_SHEET_NAME,
};
use tav_common::{Error, Result};
use tracing::debug;

/// Values given on the command line (highest priority)
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides<'a> {
    pub encoding_file: Option<&'a Path>,
    pub annotations_dir: Option<&'a Path>,
    pub output_dir: Option<&'a Path>,
    pub sheet_name: Option<&'a str>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub encoding_file: PathBuf,
    pub annotations_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_name: String,
    pub log_level: String,
}

/// Resolve run settings from overrides, environment and TOML
pub fn resolve_settings(overrides: &SettingOverrides<'_>, toml: &TomlConfig) -> Result<RunSettings> {
    let defaults = CompiledDefaults::default();

    let encoding_file = resolve_path(
        overrides.encoding_file,
        ENV_ENCODING_FILE,
        toml.encoding_file.as_deref(),
        None,
    )?
    .ok_or_else(|| {
        Error::Config(format!(
            "Task encoding workbook not configured. Provide one of:\n\
             1. Command line: --encoding <FILE>\n\
             2. Environment: {}=<FILE>\n\
             3. TOML config: encoding_file = \"<FILE>\"",
            ENV_ENCODING_FILE
        ))
    })?;

    let annotations_dir = resolve_path(
        overrides.annotations_dir,
        ENV_ANNOTATIONS_DIR,
        toml.annotations_dir.as_deref(),
        Some(defaults.annotations_dir.as_path()),
    )?
    .unwrap_or_else(|| defaults.annotations_dir.clone());

    let output_dir = resolve_path(
        overrides.output_dir,
        ENV_OUTPUT_DIR,
        toml.output_dir.as_deref(),
        Some(defaults.output_dir.as_path()),
    )?
    .unwrap_or_else(|| defaults.output_dir.clone());

    let sheet_name = resolve_value(overrides.sheet_name, ENV_SHEET_NAME, toml.sheet_name.as_deref())
        .unwrap_or(defaults.sheet_name);

    let settings = RunSettings {
        encoding_file,
        annotations_dir,
        output_dir,
        sheet_name,
        log_level: toml.logging.level.clone(),
    };

    debug!(?settings, "Resolved run settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [ENV_ENCODING_FILE, ENV_ANNOTATIONS_DIR, ENV_OUTPUT_DIR, ENV_SHEET_NAME] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_fill_gaps() {
        clear_env();
        let overrides = SettingOverrides {
            encoding_file: Some(Path::new("manual.xlsx")),
            ..Default::default()
        };

        let settings = resolve_settings(&overrides, &TomlConfig::default()).unwrap();
        assert_eq!(settings.encoding_file, PathBuf::from("manual.xlsx"));
        assert_eq!(settings.annotations_dir, PathBuf::from("annotations"));
        assert_eq!(settings.output_dir, PathBuf::from("stage1_output"));
        assert_eq!(settings.sheet_name, "Sheet1");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_missing_encoding_is_config_error() {
        clear_env();
        let result = resolve_settings(&SettingOverrides::default(), &TomlConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    #[serial]
    fn test_priority_cli_env_toml() {
        clear_env();
        std::env::set_var(ENV_OUTPUT_DIR, "/tmp/env-output");
        std::env::set_var(ENV_SHEET_NAME, "EnvSheet");

        let toml = TomlConfig {
            encoding_file: Some(PathBuf::from("toml.xlsx")),
            output_dir: Some(PathBuf::from("toml-output")),
            sheet_name: Some("TomlSheet".to_string()),
            annotations_dir: Some(PathBuf::from("toml-annotations")),
            ..Default::default()
        };
        let overrides = SettingOverrides {
            sheet_name: Some("CliSheet"),
            ..Default::default()
        };

        let settings = resolve_settings(&overrides, &toml).unwrap();
        assert_eq!(settings.encoding_file, PathBuf::from("toml.xlsx"));
        assert_eq!(settings.annotations_dir, PathBuf::from("toml-annotations"));
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/env-output"));
        assert_eq!(settings.sheet_name, "CliSheet");

        clear_env();
    }
}
