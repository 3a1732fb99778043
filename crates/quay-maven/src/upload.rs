//! Artifact upload to remote Maven repositories.

use std::time::Duration;

use reqwest::Client;

use quay_util::errors::QuayError;

use crate::auth;
use crate::layout::UploadFile;
use crate::target::ResolvedTarget;

const DEFAULT_USER_AGENT: &str = concat!("quay/", env!("CARGO_PKG_VERSION"));

/// Transfers a single file to a resolved target.
///
/// Implementations must not retry: a failed transfer is reported once and
/// the caller decides what to do with it.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    async fn put(&self, target: &ResolvedTarget, file: &UploadFile) -> Result<(), QuayError>;
}

/// Build a reqwest client for uploads with the given per-request timeout.
pub fn build_client(timeout: Duration, user_agent: Option<&str>) -> miette::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
        .build()
        .map_err(|e| {
            QuayError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// `PUT`s files to `{target.url}/{file.path}` with HTTP Basic credentials.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: Client,
}

impl HttpUploader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Uploader for HttpUploader {
    async fn put(&self, target: &ResolvedTarget, file: &UploadFile) -> Result<(), QuayError> {
        let url = format!("{}/{}", target.url, file.path);
        tracing::debug!("PUT {url} ({} bytes)", file.content.len());

        let request = auth::apply_auth(self.client.put(&url), &target.credentials)
            .body(file.content.clone());

        let resp = request.send().await.map_err(|e| QuayError::Upload {
            target: target.display_name.clone(),
            message: if e.is_timeout() {
                format!("timed out uploading {}", file.path)
            } else {
                format!("request to {url} failed: {e}")
            },
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QuayError::Upload {
                target: target.display_name.clone(),
                message: format!("HTTP {status} uploading {}", file.path),
            });
        }
        Ok(())
    }
}
