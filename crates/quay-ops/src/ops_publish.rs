//! Operation: publish workspace modules to the local and remote repositories.

use std::path::Path;
use std::time::Duration;

use quay_maven::deploy::{self, DeployOptions, Outcome};
use quay_maven::local::LocalRepository;
use quay_maven::publication::{self, PublicationDescriptor};
use quay_maven::upload::{build_client, HttpUploader, Uploader};
use quay_util::errors::QuayError;
use quay_util::progress::{spinner, status, status_error, status_info, status_warn};

use crate::context::WorkspaceContext;
use crate::report::PublishReport;

/// What to publish and how.
#[derive(Debug, Clone, Default)]
pub struct PublishRequest {
    /// Publish only this module (by its `[modules]` key).
    pub module: Option<String>,
    /// Resolve and report targets without transferring anything.
    pub dry_run: bool,
    /// Per-target upload timeout; defaults to the global config value.
    pub timeout: Option<Duration>,
}

/// Publish the selected modules of the workspace at `project_root`.
///
/// Every module is assembled before the first upload starts, so manifest,
/// repository and output problems surface without touching the network.
/// Modules are then deployed one by one in dependency order. Ctrl-C
/// abandons in-flight uploads.
pub async fn publish(
    project_root: &Path,
    request: &PublishRequest,
) -> miette::Result<PublishReport> {
    let ctx = WorkspaceContext::load(project_root)?;
    let timeout = request.timeout.unwrap_or_else(|| ctx.config.publish.timeout());
    let client = build_client(timeout, ctx.config.publish.user_agent.as_deref())?;
    let uploader = HttpUploader::new(client);
    let local = LocalRepository::new(ctx.config.local.repository_path());

    let descriptors = assemble_all(&ctx, request.module.as_deref())?;
    let options = DeployOptions {
        timeout,
        dry_run: request.dry_run,
    };

    tracing::debug!(
        "Publishing {} modules (timeout {}s, dry run: {})",
        descriptors.len(),
        timeout.as_secs(),
        request.dry_run
    );
    tokio::select! {
        report = deploy_all(&descriptors, &uploader, &local, options) => report,
        _ = tokio::signal::ctrl_c() => Err(QuayError::Generic {
            message: "Publishing cancelled".to_string(),
        }
        .into()),
    }
}

/// Assemble the publication of every selected module, in publish order.
pub fn assemble_all(
    ctx: &WorkspaceContext,
    only: Option<&str>,
) -> miette::Result<Vec<PublicationDescriptor>> {
    let sp = spinner("Resolving publish targets...");
    let result = ctx
        .selected_modules(only)?
        .iter()
        .map(|name| -> miette::Result<PublicationDescriptor> {
            tracing::debug!("Assembling publication of {name}");
            let module = ctx.descriptor(name, true)?;
            Ok(publication::assemble(module, &ctx.manifest.repositories, &ctx.env)?)
        })
        .collect::<miette::Result<Vec<_>>>();
    sp.finish_and_clear();
    result
}

/// Deploy each descriptor in turn, collecting per-target outcomes.
pub async fn deploy_all<U: Uploader>(
    descriptors: &[PublicationDescriptor],
    uploader: &U,
    local: &LocalRepository,
    options: DeployOptions,
) -> miette::Result<PublishReport> {
    let mut report = PublishReport {
        modules: Vec::with_capacity(descriptors.len()),
        dry_run: options.dry_run,
    };

    for descriptor in descriptors {
        let coordinate = descriptor.module.coordinate();
        let label = if options.dry_run { "Checking" } else { "Publishing" };
        status(label, &coordinate.to_string());

        let module_report = deploy::deploy(descriptor, uploader, local, options).await?;
        for o in &module_report.outcomes {
            match &o.outcome {
                Outcome::Published => status_info("Uploaded", &o.target),
                Outcome::Skipped => status_info("Target", &o.target),
                Outcome::MissingCredential { slot } => status_warn(
                    "Skipped",
                    &format!("{}: Missing {slot} environment variable", o.target),
                ),
                Outcome::Failed { error } => {
                    status_error("Failed", &format!("{}: {error}", o.target))
                }
            }
        }
        report.modules.push(module_report);
    }

    Ok(report)
}
