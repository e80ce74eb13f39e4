//! # CLI Configuration
//!
//! Settings shared by all subcommands. Layered from lowest to highest
//! precedence:
//!
//! 1. Built-in defaults (`text` output, invalid documents do not fail).
//! 2. A YAML file given with `--config`.
//! 3. Environment variables `BRDOC_OUTPUT` and `BRDOC_FAIL_ON_INVALID`.
//! 4. Command-line flags.
//!
//! ```yaml
//! output: json
//! fail_on_invalid: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CliConfig::output`].
pub const ENV_OUTPUT: &str = "BRDOC_OUTPUT";

/// Environment variable overriding [`CliConfig::fail_on_invalid`].
pub const ENV_FAIL_ON_INVALID: &str = "BRDOC_FAIL_ON_INVALID";

/// How results are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated, human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format for every subcommand.
    pub output: OutputFormat,
    /// Exit with status 1 when any checked document is invalid.
    pub fail_on_invalid: bool,
}

impl CliConfig {
    /// Resolve configuration from an optional file plus the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_env(|var| std::env::var(var).ok())
    }

    /// Read a YAML configuration file. Missing keys take their defaults;
    /// unknown keys are rejected.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.output = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_OUTPUT,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_FAIL_ON_INVALID) {
            self.fail_on_invalid = parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_FAIL_ON_INVALID,
                value: value.clone(),
            })?;
        }
        Ok(self)
    }

    /// Apply command-line flags. A flag only ever turns a setting on or
    /// replaces it; absent flags leave the layered value alone.
    pub fn with_flags(mut self, output: Option<OutputFormat>, fail_on_invalid: bool) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self.fail_on_invalid |= fail_on_invalid;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.fail_on_invalid);
    }

    #[test]
    fn file_sets_all_fields() {
        let file = write_config("output: json\nfail_on_invalid: true\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.fail_on_invalid);
    }

    #[test]
    fn file_missing_keys_use_defaults() {
        let file = write_config("fail_on_invalid: true\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.fail_on_invalid);
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("");
        assert_eq!(CliConfig::from_file(file.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn file_unknown_key_rejected() {
        let file = write_config("output: json\ncolour: true\n");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn file_bad_output_rejected() {
        let file = write_config("output: xml\n");
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn env_overrides_file() {
        let file = write_config("output: json\nfail_on_invalid: true\n");
        let config = CliConfig::from_file(file.path())
            .unwrap()
            .with_env(env(&[(ENV_OUTPUT, "TEXT"), (ENV_FAIL_ON_INVALID, "no")]))
            .unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.fail_on_invalid);
    }

    #[test]
    fn env_absent_keeps_values() {
        let config = CliConfig::default().with_env(env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn env_invalid_values_rejected() {
        let err = CliConfig::default()
            .with_env(env(&[(ENV_OUTPUT, "yaml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_OUTPUT, .. }));

        let err = CliConfig::default()
            .with_env(env(&[(ENV_FAIL_ON_INVALID, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_FAIL_ON_INVALID));
    }

    #[test]
    fn flags_override_everything() {
        let config = CliConfig {
            output: OutputFormat::Text,
            fail_on_invalid: false,
        }
        .with_flags(Some(OutputFormat::Json), true);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.fail_on_invalid);
    }

    #[test]
    fn absent_flags_keep_layered_values() {
        let layered = CliConfig {
            output: OutputFormat::Json,
            fail_on_invalid: true,
        };
        assert_eq!(layered.clone().with_flags(None, false), layered);
    }
}
