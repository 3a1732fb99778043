use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use quay_util::fs::{expand_home, home_dir};

/// Global user configuration loaded from `~/.quay/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub publish: PublishSettings,

    #[serde(default)]
    pub local: LocalSettings,
}

/// Upload settings from `[publish]` in global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSettings {
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
    #[serde(default, rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl PublishSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    120
}

/// Local repository settings from `[local]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSettings {
    #[serde(default = "default_local_repository")]
    pub repository: String,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            repository: default_local_repository(),
        }
    }
}

impl LocalSettings {
    /// The local repository directory with `~` expanded.
    pub fn repository_path(&self) -> PathBuf {
        expand_home(&self.repository)
    }
}

fn default_local_repository() -> String {
    "~/.m2/repository".to_string()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.quay/config.toml`, or return
    /// defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                quay_util::errors::QuayError::Generic {
                    message: format!("Failed to read global config: {e}"),
                }
            })?;
            toml::from_str(&content).map_err(|e| {
                quay_util::errors::QuayError::Generic {
                    message: format!("Failed to parse global config: {e}"),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the Quay data directory (`~/.quay/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".quay")
}
