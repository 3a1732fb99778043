//! Assembly of a module's publication: the ordered list of targets it goes to.

use serde::Serialize;

use quay_core::module::ModuleDescriptor;
use quay_core::repository::{self, RepositoryConfig};
use quay_util::errors::QuayError;

use crate::credentials::{EnvSource, MissingCredentialError};
use crate::target::{self, ResolvedTarget};

/// Display name of the always-on local repository target.
pub const LOCAL_TARGET_NAME: &str = "mavenLocal";

/// The local repository store. Needs no credentials and cannot fail to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalTarget {
    pub display_name: String,
}

impl Default for LocalTarget {
    fn default() -> Self {
        Self {
            display_name: LOCAL_TARGET_NAME.to_string(),
        }
    }
}

/// One place a publication is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PublishTarget {
    Local(LocalTarget),
    Remote(ResolvedTarget),
}

impl PublishTarget {
    pub fn display_name(&self) -> &str {
        match self {
            PublishTarget::Local(t) => &t.display_name,
            PublishTarget::Remote(t) => &t.display_name,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, PublishTarget::Remote(_))
    }
}

/// A repository whose credentials could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedTarget {
    pub display_name: String,
    pub error: MissingCredentialError,
}

/// A module together with every target it will be uploaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDescriptor {
    pub module: ModuleDescriptor,
    pub targets: Vec<PublishTarget>,
    pub unresolved: Vec<UnresolvedTarget>,
}

impl PublicationDescriptor {
    pub fn remote_targets(&self) -> impl Iterator<Item = &ResolvedTarget> {
        self.targets.iter().filter_map(|t| match t {
            PublishTarget::Remote(r) => Some(r),
            PublishTarget::Local(_) => None,
        })
    }
}

/// Resolve the publish targets of `module` against `configs`, in order.
///
/// The local repository target always comes first. Every config is
/// validated before any credential is looked up; a malformed config fails
/// the whole assembly. A repository with missing credentials is recorded in
/// [`PublicationDescriptor::unresolved`] and does not prevent the remaining
/// repositories from resolving.
pub fn assemble(
    module: ModuleDescriptor,
    configs: &[RepositoryConfig],
    env: &impl EnvSource,
) -> Result<PublicationDescriptor, QuayError> {
    let configs = repository::validate_all(configs)?;
    let class = module.version_class();
    tracing::debug!(
        "Assembling {} ({class}) against {} repositories",
        module.coordinate(),
        configs.len()
    );

    let mut targets = Vec::with_capacity(configs.len() + 1);
    targets.push(PublishTarget::Local(LocalTarget::default()));
    let mut unresolved = Vec::new();

    for config in &configs {
        match target::resolve(config, class, env) {
            Ok(Some(resolved)) => targets.push(PublishTarget::Remote(resolved)),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!("{}: {error}", config.name);
                unresolved.push(UnresolvedTarget {
                    display_name: target::display_name(config, class),
                    error,
                });
            }
        }
    }

    Ok(PublicationDescriptor {
        module,
        targets,
        unresolved,
    })
}
