//! Top-level CoreRank configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ExtractionConfig, ShortfallPolicy};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CORERANK_*`)
/// 3. Project config (`corerank.toml` in the working directory)
/// 4. User config (`~/.corerank/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CorerankConfig {
    pub extraction: ExtractionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub window_size: Option<usize>,
    pub lambda: Option<f64>,
    pub keywords: Option<usize>,
    pub on_shortfall: Option<ShortfallPolicy>,
}

impl CorerankConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `~/.corerank/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();
        Self::load_layers(
            user_config.as_deref(),
            &root.join(PROJECT_CONFIG_FILE),
            cli_overrides,
        )
    }

    /// Load configuration from explicit user and project config paths.
    /// Either file may be absent.
    pub fn load_layers(
        user_config: Option<&Path>,
        project_config: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        if project_config.exists() {
            Self::merge_toml_file(&mut config, project_config)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CorerankConfig) -> Result<(), ConfigError> {
        if let Some(window_size) = config.extraction.window_size {
            if window_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.window_size".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(lambda) = config.extraction.lambda {
            if !lambda.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.lambda".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.corerank/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".corerank").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CorerankConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CorerankConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut CorerankConfig, other: &CorerankConfig) {
        if other.extraction.window_size.is_some() {
            base.extraction.window_size = other.extraction.window_size;
        }
        if other.extraction.lambda.is_some() {
            base.extraction.lambda = other.extraction.lambda;
        }
        if other.extraction.keywords.is_some() {
            base.extraction.keywords = other.extraction.keywords;
        }
        if other.extraction.on_shortfall.is_some() {
            base.extraction.on_shortfall = other.extraction.on_shortfall;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CORERANK_WINDOW_SIZE`, `CORERANK_LAMBDA`, etc.
    fn apply_env_overrides(config: &mut CorerankConfig) {
        if let Ok(val) = std::env::var("CORERANK_WINDOW_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.window_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CORERANK_LAMBDA") {
            if let Ok(v) = val.parse::<f64>() {
                config.extraction.lambda = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CORERANK_KEYWORDS") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.keywords = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CORERANK_ON_SHORTFALL") {
            match val.parse::<ShortfallPolicy>() {
                Ok(v) => config.extraction.on_shortfall = Some(v),
                Err(e) => ::tracing::warn!(error = %e, "ignoring CORERANK_ON_SHORTFALL"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CorerankConfig, cli: &CliOverrides) {
        if let Some(v) = cli.window_size {
            config.extraction.window_size = Some(v);
        }
        if let Some(v) = cli.lambda {
            config.extraction.lambda = Some(v);
        }
        if let Some(v) = cli.keywords {
            config.extraction.keywords = Some(v);
        }
        if let Some(v) = cli.on_shortfall {
            config.extraction.on_shortfall = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
