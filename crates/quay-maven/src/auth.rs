//! HTTP Basic authentication for upload requests.
//!
//! Credentials come from the resolved publish target, never from the
//! manifest itself, so they are applied per request and dropped with it.

use reqwest::RequestBuilder;

use crate::credentials::Credentials;

/// Apply HTTP Basic authentication to a request.
pub fn apply_auth(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    request.basic_auth(&credentials.username, Some(&credentials.password))
}
