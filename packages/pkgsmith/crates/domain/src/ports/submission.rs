use async_trait::async_trait;
use pkgsmith_manifest::ManifestBuilder;
use serde::{Deserialize, Serialize};
use url::Url;

/// Acknowledgement from the review service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResponse {
    pub message: String,

    /// Where the submission can be followed, if the service provides it.
    #[serde(default)]
    pub review_url: Option<Url>,
}

/// Sends finished manifests for review.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, draft: &ManifestBuilder) -> anyhow::Result<SubmissionResponse>;
}
