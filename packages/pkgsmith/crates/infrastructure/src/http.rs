use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

pub const USER_AGENT: &str = concat!("pkgsmith/", env!("CARGO_PKG_VERSION"));

pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("Failed to create HTTP client")
}

/// Resolves `path` below `base`, keeping any path prefix `base` already has.
pub fn api_endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    base.join(path.trim_start_matches('/'))
        .with_context(|| format!("Invalid API endpoint {}{}", base, path))
}

/// Turns a non-success response into an error carrying the status and body.
pub async fn ensure_success(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        anyhow::bail!("{} failed ({})", what, status)
    } else {
        anyhow::bail!("{} failed ({}): {}", what, status, body)
    }
}
