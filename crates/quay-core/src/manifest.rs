use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::module::default_artifact_id;
use crate::repository::RepositoryConfig;

/// The parsed representation of a `Quay.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub publish: PublishConfig,

    #[serde(default, rename = "repository")]
    pub repositories: Vec<RepositoryConfig>,

    #[serde(default)]
    pub modules: BTreeMap<String, ModuleEntry>,
}

/// Shared publishing coordinates from the `[publish]` section.
///
/// Every module inherits these unless it overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    pub group: String,
    pub version: String,
    #[serde(default = "default_strip_suffix", rename = "strip-suffix")]
    pub strip_suffix: String,
}

fn default_strip_suffix() -> String {
    "-common".to_string()
}

/// A module from `[modules.<name>]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleEntry {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub outputs: Option<String>,
}

/// Default directory, relative to a module, holding its built artifacts.
pub const DEFAULT_OUTPUTS_DIR: &str = "build/libs";

impl Manifest {
    /// Load and parse a `Quay.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            quay_util::errors::QuayError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `Quay.toml` from a string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            quay_util::errors::QuayError::Manifest {
                message: format!("Failed to parse Quay.toml: {e}"),
            }
            .into()
        })
    }

    /// Published artifact id of a module: explicit override, else the name
    /// with the workspace suffix stripped.
    pub fn artifact_id(&self, name: &str) -> String {
        self.modules
            .get(name)
            .and_then(|m| m.artifact_id.clone())
            .unwrap_or_else(|| default_artifact_id(name, &self.publish.strip_suffix))
    }

    /// Group of a module, falling back to `[publish] group`.
    pub fn group(&self, name: &str) -> &str {
        self.modules
            .get(name)
            .and_then(|m| m.group.as_deref())
            .unwrap_or(&self.publish.group)
    }

    /// Version of a module, falling back to `[publish] version`.
    pub fn version(&self, name: &str) -> &str {
        self.modules
            .get(name)
            .and_then(|m| m.version.as_deref())
            .unwrap_or(&self.publish.version)
    }

    /// Directory of a module relative to the workspace root.
    pub fn module_dir(&self, root: &Path, name: &str) -> PathBuf {
        let rel = self
            .modules
            .get(name)
            .and_then(|m| m.path.as_deref())
            .unwrap_or(name);
        root.join(rel)
    }

    /// Directory holding a module's built artifacts.
    pub fn outputs_dir(&self, root: &Path, name: &str) -> PathBuf {
        let rel = self
            .modules
            .get(name)
            .and_then(|m| m.outputs.as_deref())
            .unwrap_or(DEFAULT_OUTPUTS_DIR);
        self.module_dir(root, name).join(rel)
    }
}
