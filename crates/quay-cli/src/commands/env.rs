use miette::Result;

use quay_core::properties::load_env_file;
use quay_core::ENV_FILE;

pub fn exec(reveal: bool) -> Result<()> {
    let project_root = super::workspace_root()?;
    let env_path = project_root.join(ENV_FILE);
    let env_vars = load_env_file(&env_path)?;

    if env_vars.is_empty() {
        println!("No environment variables configured.");
        println!("  {ENV_FILE}: {}", env_path.display());
        return Ok(());
    }

    println!("{ENV_FILE} ({} entries):", env_vars.len());
    for (key, value) in &env_vars {
        let display_value = if reveal { value.as_str() } else { "********" };
        println!("  {} = {}", key, display_value);
    }

    Ok(())
}
