//! CLI argument definitions for Quay.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "quay",
    version,
    about = "Publish the modules of a multi-module build to Maven repositories",
    long_about = "Quay reads Quay.toml, orders modules by their inter-module dependencies, \
                  and publishes each module's build outputs to the local repository and to \
                  every configured release or snapshot repository."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish modules to the local and remote repositories
    Publish {
        /// Publish only this module
        #[arg(short, long)]
        module: Option<String>,
        /// Resolve targets and report without uploading
        #[arg(long)]
        dry_run: bool,
        /// Per-target upload timeout in seconds
        #[arg(
            long,
            env = "QUAY_PUBLISH_TIMEOUT",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout: Option<u64>,
        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Show where each module would be published
    Targets {
        /// Show only this module
        #[arg(short, long)]
        module: Option<String>,
    },

    /// List modules in publish order
    Modules,

    /// Print the credential variables from .quay.env
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
