//! Repository credentials resolved from named environment variables.
//!
//! A repository entry in `Quay.toml` only names its credential slots:
//!
//! ```toml
//! [[repository]]
//! name = "acme"
//! url = "https://repo.example/acme"
//! username-env = "ACME_USER"
//! password-env = "ACME_PASS"
//! ```
//!
//! The values are looked up at publish time, every time. An absent or empty
//! value is a hard error naming the slot; there is no fallback.

use std::collections::BTreeMap;
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use quay_util::errors::QuayError;

/// A required credential slot is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Missing {slot} environment variable")]
#[diagnostic(help("Export {slot} or add it to .quay.env"))]
pub struct MissingCredentialError {
    pub slot: String,
}

impl From<MissingCredentialError> for QuayError {
    fn from(err: MissingCredentialError) -> Self {
        QuayError::MissingCredential { slot: err.slot }
    }
}

/// Read-only view of the environment used for credential lookup.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(BTreeMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl From<BTreeMap<String, String>> for MapEnv {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// `.quay.env` entries layered over the process environment.
///
/// An empty entry does not shadow the process variable of the same name.
#[derive(Debug, Clone, Default)]
pub struct OverlayEnv {
    overrides: MapEnv,
}

impl OverlayEnv {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides: MapEnv::from(overrides),
        }
    }
}

impl EnvSource for OverlayEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .filter(|value| !value.is_empty())
            .or_else(|| ProcessEnv.get(key))
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// A username/password pair for HTTP Basic authentication.
///
/// Lives only as long as the publish operation that resolved it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Resolve the username and password slots, username first.
pub fn resolve(
    env: &impl EnvSource,
    username_env: &str,
    password_env: &str,
) -> Result<Credentials, MissingCredentialError> {
    let username = lookup(env, username_env)?;
    let password = lookup(env, password_env)?;
    tracing::debug!("Resolved credentials from {username_env}/{password_env}");
    Ok(Credentials { username, password })
}

fn lookup(env: &impl EnvSource, slot: &str) -> Result<String, MissingCredentialError> {
    match env.get(slot) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(MissingCredentialError {
            slot: slot.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_slots() {
        let env = MapEnv::new().with("U", "deployer").with("P", "hunter2");
        let creds = resolve(&env, "U", "P").unwrap();
        assert_eq!(creds.username, "deployer");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn missing_username_names_username_slot() {
        let env = MapEnv::new().with("P", "hunter2");
        let err = resolve(&env, "U", "P").unwrap_err();
        assert_eq!(err.slot, "U");
        assert_eq!(err.to_string(), "Missing U environment variable");
    }

    #[test]
    fn missing_password_names_password_slot() {
        let env = MapEnv::new().with("U", "deployer");
        let err = resolve(&env, "U", "P").unwrap_err();
        assert_eq!(err.slot, "P");
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let env = MapEnv::new().with("U", "deployer").with("P", "");
        let err = resolve(&env, "U", "P").unwrap_err();
        assert_eq!(err.slot, "P");
    }

    #[test]
    fn debug_masks_password() {
        let creds = Credentials {
            username: "deployer".to_string(),
            password: "hunter2".to_string(),
        };
        let shown = format!("{creds:?}");
        assert!(shown.contains("deployer"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn overlay_prefers_env_file_values() {
        let mut map = BTreeMap::new();
        map.insert("PATH".to_string(), "from-env-file".to_string());
        let env = OverlayEnv::new(map);
        assert_eq!(env.get("PATH").as_deref(), Some("from-env-file"));
    }

    #[test]
    fn overlay_empty_value_falls_back_to_process_env() {
        let mut map = BTreeMap::new();
        map.insert("PATH".to_string(), String::new());
        let env = OverlayEnv::new(map);
        assert_eq!(env.get("PATH"), std::env::var("PATH").ok());
        assert!(env.get("PATH").is_some_and(|v| !v.is_empty()));
    }

    #[test]
    fn overlay_empty_value_without_process_var_is_missing() {
        let slot = "QUAY_CREDENTIALS_TEST_UNSET_SLOT";
        let mut map = BTreeMap::new();
        map.insert(slot.to_string(), String::new());
        map.insert("U".to_string(), "deployer".to_string());
        let env = OverlayEnv::new(map);
        let err = resolve(&env, "U", slot).unwrap_err();
        assert_eq!(err.slot, slot);
    }

    #[test]
    fn converts_into_quay_error() {
        let err: QuayError = MissingCredentialError {
            slot: "MAVEN_USERNAME".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            QuayError::MissingCredential { ref slot } if slot == "MAVEN_USERNAME"
        ));
    }
}
