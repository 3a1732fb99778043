//! Handler for `quay targets`.

use console::style;
use miette::Result;

use quay_core::config::GlobalConfig;
use quay_maven::publication::PublishTarget;
use quay_ops::ops_targets::list_targets;

pub fn exec(module: Option<&str>) -> Result<()> {
    let root = super::workspace_root()?;
    let descriptors = list_targets(&root, module)?;
    let local_path = GlobalConfig::load()?.local.repository_path();

    for desc in &descriptors {
        println!(
            "{} ({})",
            style(desc.module.coordinate()).bold(),
            desc.module.version_class()
        );
        for target in &desc.targets {
            match target {
                PublishTarget::Local(t) => {
                    println!("  {:<28} {}", t.display_name, local_path.display());
                }
                PublishTarget::Remote(t) => {
                    println!("  {:<28} {}", t.display_name, t.url);
                }
            }
        }
        for unresolved in &desc.unresolved {
            println!(
                "  {:<28} {}",
                unresolved.display_name,
                style(format!("unresolved: {}", unresolved.error)).yellow()
            );
        }
    }
    Ok(())
}
