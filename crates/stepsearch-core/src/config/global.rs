//! Global configuration for stepsearch (stored in ~/.config/stepsearch/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};
use crate::search::Algorithm;

const CONFIG_DIR: &str = "stepsearch";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "STEPSEARCH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct GlobalConfig {
    /// Algorithm used when no `--algorithm` flag is given
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Milliseconds to pause after each state change
    #[serde(default)]
    pub pace_ms: u64,

    /// Graph definition file to use instead of the built-in tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SearchError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SearchError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GlobalConfig = toml::from_str(&content).map_err(|e| {
            SearchError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), algorithm = %config.algorithm, pace_ms = config.pace_ms, "loaded config");
        Ok(config)
    }
}
