//! Workspace-level publish summary.

use std::fmt::Write;

use serde::Serialize;

use quay_maven::deploy::{ModuleReport, Outcome};

/// Outcomes of every module published in one invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PublishReport {
    pub modules: Vec<ModuleReport>,
    pub dry_run: bool,
}

impl PublishReport {
    /// The invocation fails when any module's publication failed.
    pub fn is_failure(&self) -> bool {
        self.modules.iter().any(ModuleReport::is_failure)
    }

    pub fn failed_modules(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|m| m.is_failure())
            .map(|m| m.module.as_str())
            .collect()
    }

    /// Plain-text summary, one line per target attempted.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for module in &self.modules {
            let _ = writeln!(out, "{}", module.module);
            for o in &module.outcomes {
                let detail = match &o.outcome {
                    Outcome::Published => "published".to_string(),
                    Outcome::Skipped => "skipped (dry run)".to_string(),
                    Outcome::MissingCredential { slot } => {
                        format!("FAILED: Missing {slot} environment variable")
                    }
                    Outcome::Failed { error } => format!("FAILED: {error}"),
                };
                let _ = writeln!(out, "  {:<28} {detail}", o.target);
            }
        }
        out
    }

    pub fn to_json(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            quay_util::errors::QuayError::Generic {
                message: format!("Failed to serialize report: {e}"),
            }
            .into()
        })
    }
}
