//! Shared utilities for the Quay publisher.
//!
//! This crate provides cross-cutting concerns used by all other Quay crates:
//! error types, filesystem helpers, checksum hashing, and terminal status
//! output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
