//! Everything an operation needs to know about a workspace, loaded once.

use std::path::{Path, PathBuf};

use quay_core::config::GlobalConfig;
use quay_core::manifest::Manifest;
use quay_core::module::{collect_outputs, ModuleDescriptor};
use quay_core::properties::load_env_file;
use quay_core::workspace::{dependency_coordinates, ModuleGraph};
use quay_core::{ENV_FILE, MANIFEST_FILE};
use quay_maven::credentials::OverlayEnv;
use quay_util::errors::QuayError;

/// A loaded workspace: manifest, module graph, user config and credential environment.
#[derive(Debug)]
pub struct WorkspaceContext {
    pub root: PathBuf,
    pub manifest: Manifest,
    pub graph: ModuleGraph,
    pub config: GlobalConfig,
    pub env: OverlayEnv,
}

impl WorkspaceContext {
    /// Load `Quay.toml`, `.quay.env` and `~/.quay/config.toml` for `root`.
    pub fn load(root: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(&root.join(MANIFEST_FILE))?;
        let graph = ModuleGraph::from_manifest(&manifest)?;
        let env = OverlayEnv::new(load_env_file(&root.join(ENV_FILE))?);
        let config = GlobalConfig::load()?;
        tracing::debug!(
            "Loaded workspace {} ({} modules, {} repositories)",
            root.display(),
            graph.len(),
            manifest.repositories.len()
        );
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            graph,
            config,
            env,
        })
    }

    /// Modules to operate on, in publish order.
    ///
    /// With `only`, just that module; an unknown name is an error.
    pub fn selected_modules(&self, only: Option<&str>) -> Result<Vec<String>, QuayError> {
        if let Some(name) = only {
            if !self.graph.contains(name) {
                return Err(QuayError::configuration(format!(
                    "no module named '{name}' in {MANIFEST_FILE}"
                )));
            }
            return Ok(vec![name.to_string()]);
        }
        self.graph.publish_order()
    }

    /// Build the descriptor of module `name`.
    ///
    /// When `require_outputs` is set, a module with no build outputs is an
    /// error; otherwise the descriptor is built without artifacts.
    pub fn descriptor(
        &self,
        name: &str,
        require_outputs: bool,
    ) -> miette::Result<ModuleDescriptor> {
        let artifact_id = self.manifest.artifact_id(name);
        let version = self.manifest.version(name);
        let dependencies = dependency_coordinates(&self.manifest, &self.graph, name);

        let outputs = if require_outputs {
            let dir = self.manifest.outputs_dir(&self.root, name);
            let module_dir = self.manifest.module_dir(&self.root, name);
            let dir_name = module_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(name);
            let outputs = collect_outputs(&dir, &[dir_name, name, artifact_id.as_str()], version)?;
            if outputs.is_empty() {
                return Err(QuayError::Generic {
                    message: format!(
                        "No build outputs for module '{name}' version {version} in {}; \
                         run the build first",
                        dir.display()
                    ),
                }
                .into());
            }
            tracing::debug!(
                "Collected {} outputs for {name} from {}",
                outputs.len(),
                dir.display()
            );
            outputs
        } else {
            Vec::new()
        };

        Ok(ModuleDescriptor::new(
            self.manifest.group(name),
            artifact_id,
            version,
            outputs,
            dependencies,
        )?)
    }
}
