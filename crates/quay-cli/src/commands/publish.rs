//! Handler for `quay publish`.

use std::time::Duration;

use miette::Result;

use quay_ops::ops_publish::{self, PublishRequest};
use quay_util::errors::QuayError;
use quay_util::progress::status;

pub async fn exec(
    module: Option<String>,
    dry_run: bool,
    timeout: Option<u64>,
    json: bool,
) -> Result<()> {
    let root = super::workspace_root()?;
    let request = PublishRequest {
        module,
        dry_run,
        timeout: timeout.map(Duration::from_secs),
    };

    let report = ops_publish::publish(&root, &request).await?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }

    if report.is_failure() {
        return Err(QuayError::Generic {
            message: format!(
                "Publishing failed for {}",
                report.failed_modules().join(", ")
            ),
        }
        .into());
    }

    let label = if dry_run { "Checked" } else { "Finished" };
    status(label, &format!("{} module(s)", report.modules.len()));
    Ok(())
}
