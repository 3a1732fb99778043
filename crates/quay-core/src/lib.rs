//! Core data types for the Quay publisher.
//!
//! This crate defines what a Quay workspace is made of: the `Quay.toml`
//! manifest, module descriptors and their build outputs, repository
//! configurations, version classification, the inter-module graph, global
//! user configuration, and the `.quay.env` credential overlay.
//!
//! This crate is intentionally free of async code and network I/O.

/// Manifest file name looked up at the workspace root.
pub const MANIFEST_FILE: &str = "Quay.toml";

/// Credential overlay file kept next to the manifest.
pub const ENV_FILE: &str = ".quay.env";

pub mod config;
pub mod manifest;
pub mod module;
pub mod properties;
pub mod repository;
pub mod version;
pub mod workspace;
