use anyhow::{Context, Result};
use async_trait::async_trait;
use domain::{SubmissionClient, SubmissionResponse};
use pkgsmith_manifest::{ManifestBuilder, PackageManifest};
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::http::{api_endpoint, ensure_success, USER_AGENT};

#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    manifest: &'a PackageManifest,
    client: &'static str,
}

/// Submits manifests to the review service over HTTP.
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    api_url: Url,
    token: Option<String>,
}

impl HttpSubmissionClient {
    pub fn new(client: reqwest::Client, api_url: Url, token: Option<String>) -> Self {
        Self {
            client,
            api_url,
            token,
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, draft: &ManifestBuilder) -> Result<SubmissionResponse> {
        let manifest = draft.build().context("Manifest is incomplete")?;
        let endpoint = api_endpoint(&self.api_url, "v1/manifests")?;

        info!(%endpoint, id = %manifest.id, "Submitting manifest");

        let mut request = self.client.post(endpoint).json(&SubmissionPayload {
            manifest: &manifest,
            client: USER_AGENT,
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach submission service")?;

        ensure_success(response, "Submission")
            .await?
            .json()
            .await
            .context("Submission service returned a malformed response")
    }
}
