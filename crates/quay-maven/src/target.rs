//! Release/snapshot endpoint resolution for one configured repository.

use serde::Serialize;

use quay_core::repository::RepositoryConfig;
use quay_core::version::VersionClass;

use crate::credentials::{self, Credentials, EnvSource, MissingCredentialError};

/// A concrete upload endpoint with its credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub display_name: String,
    pub url: String,
    #[serde(skip)]
    pub credentials: Credentials,
}

/// `<name>Releases` or `<name>Snapshots`.
pub fn display_name(config: &RepositoryConfig, class: VersionClass) -> String {
    format!("{}{}", config.name, class.display_suffix())
}

/// `<base>/releases` or `<base>/snapshots`.
pub fn endpoint_url(config: &RepositoryConfig, class: VersionClass) -> String {
    format!("{}/{}", config.base_url, class.path_segment())
}

/// Resolve the endpoint of `config` for a version of class `class`.
///
/// Returns `Ok(None)` when the version is a snapshot and the repository
/// has opted out of snapshots; credentials are not consulted in that case.
/// Credential failures propagate unchanged and are never retried.
pub fn resolve(
    config: &RepositoryConfig,
    class: VersionClass,
    env: &impl EnvSource,
) -> Result<Option<ResolvedTarget>, MissingCredentialError> {
    if class.is_snapshot() && !config.snapshots_enabled {
        tracing::debug!("Skipping {}: snapshots disabled", config.name);
        return Ok(None);
    }

    let display_name = display_name(config, class);
    let url = endpoint_url(config, class);
    let credentials = credentials::resolve(env, &config.username_env, &config.password_env)?;
    tracing::debug!("Resolved {display_name} -> {url}");

    Ok(Some(ResolvedTarget {
        display_name,
        url,
        credentials,
    }))
}
