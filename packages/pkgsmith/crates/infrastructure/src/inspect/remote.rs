use anyhow::{Context, Result};
use async_trait::async_trait;
use domain::{InspectionBundle, InstallerInspector};
use pkgsmith_manifest::InstallerBuilder;
use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use crate::http::{api_endpoint, ensure_success};

/// Delegates inspection to a hosted inspection service.
pub struct RemoteInspector {
    client: reqwest::Client,
    api_url: Url,
}

impl RemoteInspector {
    pub fn new(client: reqwest::Client, api_url: Url) -> Self {
        Self { client, api_url }
    }

    async fn query<T: DeserializeOwned>(&self, path: &str, target: &Url) -> Result<T> {
        let endpoint = api_endpoint(&self.api_url, path)?;
        info!(%endpoint, %target, "Requesting remote inspection");

        let response = self
            .client
            .get(endpoint)
            .query(&[("url", target.as_str())])
            .send()
            .await
            .context("Failed to reach inspection service")?;

        ensure_success(response, "Inspection")
            .await?
            .json()
            .await
            .context("Inspection service returned a malformed response")
    }
}

#[async_trait]
impl InstallerInspector for RemoteInspector {
    async fn inspect(&self, url: &Url) -> Result<InspectionBundle> {
        self.query("v1/inspect", url).await
    }

    async fn inspect_installer(&self, url: &Url) -> Result<InstallerBuilder> {
        self.query("v1/inspect/installer", url).await
    }
}
