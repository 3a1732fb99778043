use miette::Result;

use quay_ops::ops_modules::list_modules;

pub fn exec() -> Result<()> {
    let root = super::workspace_root()?;
    let modules = list_modules(&root)?;

    if modules.is_empty() {
        println!("No modules declared.");
        return Ok(());
    }

    for module in &modules {
        if module.dependencies.is_empty() {
            println!("{} ({})", module.name, module.coordinate);
        } else {
            println!(
                "{} ({}) <- {}",
                module.name,
                module.coordinate,
                module.dependencies.join(", ")
            );
        }
    }
    Ok(())
}
