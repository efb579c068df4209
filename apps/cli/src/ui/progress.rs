//! Spinners around the slow collaborators of the create workflow.

use anyhow::Result;
use async_trait::async_trait;
use domain::{InspectionBundle, InstallerInspector, SubmissionClient, SubmissionResponse};
use pkgsmith_manifest::{InstallerBuilder, ManifestBuilder};
use std::future::Future;
use std::sync::Arc;
use url::Url;

use crate::ui::components::Spinner;
use crate::ui::Theme;

async fn track<T>(task: &str, target: String, work: impl Future<Output = Result<T>>) -> Result<T> {
    let spinner = Spinner::new(task);
    spinner.set_message(target.clone());

    let result = work.await;
    match &result {
        Ok(_) => spinner.success(format!("{} {}", task, Theme::muted(&target))),
        Err(_) => spinner.fail(format!("{} {}", task, Theme::muted(&target))),
    }
    result
}

pub struct ProgressInspector {
    inner: Arc<dyn InstallerInspector>,
}

impl ProgressInspector {
    pub fn new(inner: Arc<dyn InstallerInspector>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl InstallerInspector for ProgressInspector {
    async fn inspect(&self, url: &Url) -> Result<InspectionBundle> {
        track("Inspecting", url.to_string(), self.inner.inspect(url)).await
    }

    async fn inspect_installer(&self, url: &Url) -> Result<InstallerBuilder> {
        track("Inspecting", url.to_string(), self.inner.inspect_installer(url)).await
    }
}

pub struct ProgressSubmission {
    inner: Arc<dyn SubmissionClient>,
}

impl ProgressSubmission {
    pub fn new(inner: Arc<dyn SubmissionClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SubmissionClient for ProgressSubmission {
    async fn submit(&self, draft: &ManifestBuilder) -> Result<SubmissionResponse> {
        let target = draft.id.clone().unwrap_or_default();
        track("Submitting", target, self.inner.submit(draft)).await
    }
}
