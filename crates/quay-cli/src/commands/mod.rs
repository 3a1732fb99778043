//! Command dispatch and handler modules.

mod env;
mod modules;
mod publish;
mod targets;

use std::path::PathBuf;

use miette::Result;

use quay_core::MANIFEST_FILE;
use quay_util::errors::QuayError;
use quay_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Publish {
            module,
            dry_run,
            timeout,
            json,
        } => publish::exec(module, dry_run, timeout, json).await,
        Command::Targets { module } => targets::exec(module.as_deref()),
        Command::Modules => modules::exec(),
        Command::Env { reveal } => env::exec(reveal),
    }
}

/// Locate the workspace root from the current directory.
fn workspace_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(QuayError::Io)?;
    let root = find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| QuayError::Manifest {
        message: format!("Could not find {MANIFEST_FILE} in this directory or any parent"),
    })?;
    tracing::debug!("Workspace root: {}", root.display());
    Ok(root)
}
