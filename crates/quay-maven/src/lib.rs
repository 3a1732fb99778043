//! Maven publishing: where a module goes, with which credentials, and how
//! its files get there.
//!
//! Resolution ([`credentials`], [`target`], [`publication`]) is synchronous
//! and free of network I/O. Transfer ([`upload`], [`local`], [`deploy`]) is
//! the only part that touches the network or the filesystem.

pub mod auth;
pub mod checksum;
pub mod credentials;
pub mod deploy;
pub mod layout;
pub mod local;
pub mod pom;
pub mod publication;
pub mod target;
pub mod upload;
