//! Remote artifact repository configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use quay_util::errors::QuayError;

/// A remote Maven repository from a `[[repository]]` entry in `Quay.toml`.
///
/// Credentials are never stored here, only the names of the environment
/// variables that hold them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepositoryConfig {
    pub name: String,
    #[serde(rename = "url")]
    pub base_url: String,
    #[serde(default = "default_snapshots", rename = "snapshots")]
    pub snapshots_enabled: bool,
    pub username_env: String,
    pub password_env: String,
}

fn default_snapshots() -> bool {
    true
}

impl RepositoryConfig {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        username_env: impl Into<String>,
        password_env: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            snapshots_enabled: true,
            username_env: username_env.into(),
            password_env: password_env.into(),
        }
    }

    /// Opt this repository out of snapshot publishing.
    pub fn without_snapshots(mut self) -> Self {
        self.snapshots_enabled = false;
        self
    }

    /// Check the entry for build-definition defects and normalise its base URL.
    ///
    /// The returned config has any trailing `/` stripped from `base_url`.
    pub fn validate(&self) -> Result<Self, QuayError> {
        if self.name.trim().is_empty() {
            return Err(QuayError::configuration("repository with an empty name"));
        }
        let base_url = self.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(QuayError::configuration(format!(
                "repository '{}' has an empty url",
                self.name
            )));
        }
        let Some((_, host)) = base_url
            .split_once("://")
            .filter(|(scheme, _)| matches!(*scheme, "http" | "https"))
        else {
            return Err(QuayError::configuration(format!(
                "repository '{}' url must start with http:// or https://, got '{}'",
                self.name, self.base_url
            )));
        };
        if host.is_empty() {
            return Err(QuayError::configuration(format!(
                "repository '{}' url has no host: '{}'",
                self.name, self.base_url
            )));
        }
        for (field, value) in [
            ("username-env", &self.username_env),
            ("password-env", &self.password_env),
        ] {
            if value.trim().is_empty() {
                return Err(QuayError::configuration(format!(
                    "repository '{}' has an empty {field}",
                    self.name
                )));
            }
        }
        Ok(Self {
            base_url: base_url.to_string(),
            ..self.clone()
        })
    }
}

/// Validate an ordered list of repositories, rejecting duplicate names.
pub fn validate_all(configs: &[RepositoryConfig]) -> Result<Vec<RepositoryConfig>, QuayError> {
    let mut seen = BTreeSet::new();
    let mut validated = Vec::with_capacity(configs.len());
    for config in configs {
        let config = config.validate()?;
        if !seen.insert(config.name.clone()) {
            return Err(QuayError::configuration(format!(
                "repository '{}' is declared more than once",
                config.name
            )));
        }
        validated.push(config);
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> RepositoryConfig {
        RepositoryConfig::new(
            "acme",
            "https://repo.example/acme",
            "ACME_USER",
            "ACME_PASS",
        )
    }

    #[test]
    fn valid_config_passes_unchanged() {
        assert_eq!(acme().validate().unwrap(), acme());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let mut config = acme();
        config.base_url = "https://repo.example/acme/".to_string();
        assert_eq!(
            config.validate().unwrap().base_url,
            "https://repo.example/acme"
        );
    }

    #[test]
    fn empty_url_is_configuration_error() {
        let mut config = acme();
        config.base_url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, QuayError::Configuration { .. }));
        assert!(err.to_string().contains("empty url"));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let mut config = acme();
        config.base_url = "ftp://repo.example".to_string();
        assert!(config.validate().is_err());
        config.base_url = "repo.example".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_env_names_rejected() {
        let mut config = acme();
        config.password_env = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("password-env"));
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = validate_all(&[acme(), acme()]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn snapshots_default_to_enabled() {
        let config: RepositoryConfig = toml::from_str(
            r#"
name = "acme"
url = "https://repo.example/acme"
username-env = "ACME_USER"
password-env = "ACME_PASS"
"#,
        )
        .unwrap();
        assert!(config.snapshots_enabled);
        assert_eq!(config.base_url, "https://repo.example/acme");
    }
}
