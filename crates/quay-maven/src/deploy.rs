//! Sending an assembled publication to all of its targets.
//!
//! Remote targets upload concurrently. Each target's outcome is recorded on
//! its own: one failing repository never stops the others.

use std::time::Duration;

use futures_util::future::join_all;
use serde::Serialize;

use quay_util::errors::QuayError;

use crate::layout::{self, UploadFile};
use crate::local::LocalRepository;
use crate::publication::{PublicationDescriptor, PublishTarget};
use crate::target::ResolvedTarget;
use crate::upload::Uploader;

/// What happened to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Published,
    /// Not attempted (dry run).
    Skipped,
    MissingCredential { slot: String },
    Failed { error: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::MissingCredential { .. } | Outcome::Failed { .. }
        )
    }
}

/// Outcome of one target of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    pub target: String,
    pub remote: bool,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Per-target outcomes of one module's publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub module: String,
    pub outcomes: Vec<TargetOutcome>,
}

impl ModuleReport {
    /// A module publish fails when a credential was missing, the local
    /// install failed, or every attempted remote upload failed.
    pub fn is_failure(&self) -> bool {
        let credential_missing = self
            .outcomes
            .iter()
            .any(|o| matches!(o.outcome, Outcome::MissingCredential { .. }));
        let local_failed = self
            .outcomes
            .iter()
            .any(|o| !o.remote && o.outcome.is_failure());

        let mut attempted = self
            .outcomes
            .iter()
            .filter(|o| {
                o.remote && matches!(o.outcome, Outcome::Published | Outcome::Failed { .. })
            })
            .peekable();
        let all_remote_failed = attempted.peek().is_some()
            && attempted.all(|o| matches!(o.outcome, Outcome::Failed { .. }));

        credential_missing || local_failed || all_remote_failed
    }

    pub fn published(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Published)
            .count()
    }
}

/// Options for [`deploy`].
#[derive(Debug, Clone, Copy)]
pub struct DeployOptions {
    /// Upper bound on the whole transfer to a single remote target.
    pub timeout: Duration,
    /// Report targets without transferring anything.
    pub dry_run: bool,
}

/// Send `descriptor` to its local and remote targets.
///
/// Only building the file set can fail the call as a whole; transfer
/// failures are reported in the returned [`ModuleReport`].
pub async fn deploy<U: Uploader>(
    descriptor: &PublicationDescriptor,
    uploader: &U,
    local: &LocalRepository,
    options: DeployOptions,
) -> Result<ModuleReport, QuayError> {
    let files = layout::publication_files(&descriptor.module)?;
    let mut outcomes = Vec::with_capacity(descriptor.targets.len() + descriptor.unresolved.len());

    let mut remotes = Vec::new();
    for target in &descriptor.targets {
        match target {
            PublishTarget::Local(t) => {
                let outcome = if options.dry_run {
                    Outcome::Skipped
                } else {
                    match local.install(&files) {
                        Ok(()) => Outcome::Published,
                        Err(e) => Outcome::Failed {
                            error: e.to_string(),
                        },
                    }
                };
                outcomes.push(TargetOutcome {
                    target: t.display_name.clone(),
                    remote: false,
                    outcome,
                });
            }
            PublishTarget::Remote(t) => remotes.push(t),
        }
    }

    let remote_outcomes: Vec<Outcome> = if options.dry_run {
        remotes.iter().map(|_| Outcome::Skipped).collect()
    } else {
        join_all(
            remotes
                .iter()
                .map(|t| upload_target(uploader, t, &files, options.timeout)),
        )
        .await
    };
    for (target, outcome) in remotes.iter().zip(remote_outcomes) {
        outcomes.push(TargetOutcome {
            target: target.display_name.clone(),
            remote: true,
            outcome,
        });
    }

    for unresolved in &descriptor.unresolved {
        outcomes.push(TargetOutcome {
            target: unresolved.display_name.clone(),
            remote: true,
            outcome: Outcome::MissingCredential {
                slot: unresolved.error.slot.clone(),
            },
        });
    }

    Ok(ModuleReport {
        module: descriptor.module.coordinate().to_string(),
        outcomes,
    })
}

async fn upload_target<U: Uploader>(
    uploader: &U,
    target: &ResolvedTarget,
    files: &[UploadFile],
    timeout: Duration,
) -> Outcome {
    let transfer = async {
        for file in files {
            uploader.put(target, file).await?;
        }
        Ok::<(), QuayError>(())
    };

    match tokio::time::timeout(timeout, transfer).await {
        Ok(Ok(())) => {
            tracing::info!("Published {} files to {}", files.len(), target.display_name);
            Outcome::Published
        }
        Ok(Err(e)) => {
            tracing::warn!("{e}");
            Outcome::Failed {
                error: e.to_string(),
            }
        }
        Err(_) => {
            tracing::warn!("Upload to {} timed out", target.display_name);
            Outcome::Failed {
                error: format!(
                    "Upload to {} timed out after {}s",
                    target.display_name,
                    timeout.as_secs()
                ),
            }
        }
    }
}
