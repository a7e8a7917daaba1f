//! PawPal configuration types and loading

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main PawPal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster file defaults
    pub roster: RosterConfig,

    /// Scheduling defaults
    pub scheduling: SchedulingConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .pawpal.yml
        let local_config = PathBuf::from(".pawpal.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/pawpal/pawpal.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pawpal").join("pawpal.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Roster file defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path used when the CLI does not pass --roster
    pub path: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pawpal.yml"),
        }
    }
}

/// Scheduling defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Budget applied when a roster does not set daily-minutes
    #[serde(rename = "default-budget-minutes")]
    pub default_budget_minutes: f64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            default_budget_minutes: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.roster.path, PathBuf::from("pawpal.yml"));
        assert_eq!(config.scheduling.default_budget_minutes, 120.0);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"scheduling:\n  default-budget-minutes: 45\n").unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.scheduling.default_budget_minutes, 45.0);
        // Unset sections keep their defaults
        assert_eq!(config.roster.path, PathBuf::from("pawpal.yml"));
    }

    #[test]
    fn test_load_explicit_missing_path_is_error() {
        let missing = PathBuf::from("/no/such/pawpal.yml");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("/no/such/pawpal.yml"));
    }

    #[test]
    fn test_load_no_path_uses_defaults() {
        // No explicit path and no local config in the temp cwd; defaults win
        let config = Config::load(None).unwrap();
        assert_eq!(config.scheduling.default_budget_minutes, 120.0);
    }
}
