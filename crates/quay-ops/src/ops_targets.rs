//! Operation: show where each module would be published.

use std::path::Path;

use quay_maven::publication::{self, PublicationDescriptor};

use crate::context::WorkspaceContext;

/// Resolve the targets of the selected modules without reading build
/// outputs or touching the network.
pub fn list_targets(
    project_root: &Path,
    only: Option<&str>,
) -> miette::Result<Vec<PublicationDescriptor>> {
    let ctx = WorkspaceContext::load(project_root)?;
    ctx.selected_modules(only)?
        .iter()
        .map(|name| -> miette::Result<PublicationDescriptor> {
            let module = ctx.descriptor(name, false)?;
            Ok(publication::assemble(module, &ctx.manifest.repositories, &ctx.env)?)
        })
        .collect()
}
