use crate::error::{ConfigError, SmokeError};
use crate::types::DEFAULT_REGION;
use crate::validation::{validate_min_resources, validate_name_filter, validate_region};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    /// Named profile from ~/.aws/config (default chain if not set)
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Minimum number of REST APIs that must exist
    pub min_resources: usize,
    /// Only count APIs whose name contains this, or whose tag value equals it
    pub name_filter: Option<String>,
}

/// Values given on the command line; each one replaces the file's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub min_resources: Option<usize>,
    pub name_filter: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_resources: 1,
            name_filter: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try .apigw-smoke.toml in current dir, then ~/.config/apigw-smoke/config.toml
            let local = PathBuf::from(".apigw-smoke.toml");
            if local.exists() {
                local
            } else {
                dirs::config_dir()
                    .map(|d| d.join("apigw-smoke").join("config.toml"))
                    .unwrap_or_else(|| PathBuf::from(".apigw-smoke.toml"))
            }
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))
                .with_context(|| {
                    let mut err = format!("Failed to parse config: {}", config_path.display());
                    err.push_str("\n  Tip: Run 'apigw-smoke init' to create a new config file");
                    err
                })?;
            Ok(config)
        } else {
            if path.is_some() {
                eprintln!("WARNING: Config file not found: {}", config_path.display());
                eprintln!("   Using default configuration (region {}).", DEFAULT_REGION);
            }
            Ok(Config::default())
        }
    }

    /// Replace file values with command-line ones. Validate afterwards.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(region) = overrides.region {
            self.aws.region = region;
        }
        if let Some(profile) = overrides.profile {
            self.aws.profile = Some(profile);
        }
        if let Some(min) = overrides.min_resources {
            self.check.min_resources = min;
        }
        if let Some(filter) = overrides.name_filter {
            self.check.name_filter = Some(filter);
        }
    }

    /// Check values serde cannot express (non-empty region, threshold >= 1).
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |e: SmokeError, field: &str| match e {
            SmokeError::Validation { reason, .. } => ConfigError::InvalidValue {
                field: field.to_string(),
                reason,
            },
            other => ConfigError::InvalidValue {
                field: field.to_string(),
                reason: other.to_string(),
            },
        };

        validate_region(&self.aws.region).map_err(|e| invalid(e, "aws.region"))?;
        validate_min_resources(self.check.min_resources)
            .map_err(|e| invalid(e, "check.min_resources"))?;
        validate_name_filter(self.check.name_filter.as_deref())
            .map_err(|e| invalid(e, "check.name_filter"))?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

pub fn init_config(output: &Path) -> Result<()> {
    let config = Config::default();
    config.save(output)?;
    println!("Created config file: {}", output.display());
    Ok(())
}
