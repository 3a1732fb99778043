//! Operation: list workspace modules in publish order.

use std::path::Path;

use serde::Serialize;

use crate::context::WorkspaceContext;

/// A module as it will be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    pub coordinate: String,
    pub dependencies: Vec<String>,
}

/// All modules of the workspace at `project_root`, dependencies first.
pub fn list_modules(project_root: &Path) -> miette::Result<Vec<ModuleInfo>> {
    let ctx = WorkspaceContext::load(project_root)?;
    let order = ctx.graph.publish_order()?;
    order
        .into_iter()
        .map(|name| -> miette::Result<ModuleInfo> {
            let module = ctx.descriptor(&name, false)?;
            let dependencies = ctx
                .graph
                .dependencies_of(&name)
                .into_iter()
                .map(str::to_string)
                .collect();
            Ok(ModuleInfo {
                coordinate: module.coordinate().to_string(),
                name,
                dependencies,
            })
        })
        .collect()
}
