use anyhow::{Context, Result};
use domain::{
    parse_download_url, ComposeInstaller, ComposeManifest, InstallerInspector, ManifestStore,
    Prompt, SubmissionClient, SubmissionResponse,
};
use pkgsmith_manifest::{InstallerBuilder, ManifestBuilder, PackageManifest};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

use crate::error::CreateManifestError;

pub const ADD_INSTALLER_QUESTION: &str =
    "Add an additional installer for a different architecture or OS version?";
pub const INSTALLER_URL_QUESTION: &str = "Download URL (leave blank to cancel)";
pub const SUBMIT_QUESTION: &str =
    "Submit manifest to be reviewed and added to the official repository?";

/// States of the additional-installer loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Ask whether another installer variant should be added.
    AskMore,
    /// Ask for the download URL of the next variant.
    AskUrl,
    /// Inspect and compose the given download.
    Inspect(String),
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Declined,
    Submitted(SubmissionResponse),
    Failed(String),
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct CreateManifestReport {
    pub manifest: PackageManifest,
    pub saved_to: PathBuf,
    /// Additional installers that were requested but could not be added.
    pub failed_installers: usize,
    pub submission: SubmissionOutcome,
}

/// Drives one manifest from a primary download URL to a persisted (and optionally
/// submitted) manifest.
pub struct CreateManifestService {
    inspector: Arc<dyn InstallerInspector>,
    installer_composer: Arc<dyn ComposeInstaller>,
    manifest_composer: Arc<dyn ComposeManifest>,
    prompt: Arc<dyn Prompt>,
    store: Arc<dyn ManifestStore>,
    submission: Arc<dyn SubmissionClient>,
}

impl CreateManifestService {
    pub fn new(
        inspector: Arc<dyn InstallerInspector>,
        installer_composer: Arc<dyn ComposeInstaller>,
        manifest_composer: Arc<dyn ComposeManifest>,
        prompt: Arc<dyn Prompt>,
        store: Arc<dyn ManifestStore>,
        submission: Arc<dyn SubmissionClient>,
    ) -> Self {
        Self {
            inspector,
            installer_composer,
            manifest_composer,
            prompt,
            store,
            submission,
        }
    }

    pub async fn execute(
        &self,
        primary_url: &str,
    ) -> Result<CreateManifestReport, CreateManifestError> {
        let url = parse_download_url(primary_url)?;

        let mut draft = self
            .acquire_primary(&url)
            .await
            .map_err(CreateManifestError::PrimaryAcquisition)?;
        let primary_count = draft.installers().len();

        let mut attempted = 0;
        let mut state = LoopState::AskMore;
        while state != LoopState::Done {
            if matches!(state, LoopState::Inspect(_)) {
                attempted += 1;
            }
            state = self.step(state, &mut draft).await;
        }
        let failed_installers = attempted - (draft.installers().len() - primary_count);

        let manifest = draft.build()?;
        self.store.preview(&manifest);
        let saved_to = self
            .store
            .persist(&draft)
            .map_err(CreateManifestError::Persist)?;
        info!(
            path = %saved_to.display(),
            installers = manifest.installers.len(),
            "Manifest written"
        );

        let submission = self.submit(&draft).await;

        Ok(CreateManifestReport {
            manifest,
            saved_to,
            failed_installers,
            submission,
        })
    }

    /// Advances the additional-installer loop by one state.
    ///
    /// Never fails: a download that can't be inspected or composed is logged and the
    /// operator is asked again.
    pub async fn step(&self, state: LoopState, draft: &mut ManifestBuilder) -> LoopState {
        match state {
            LoopState::AskMore => {
                if self.prompt.confirm(ADD_INSTALLER_QUESTION, false) {
                    LoopState::AskUrl
                } else {
                    LoopState::Done
                }
            }
            LoopState::AskUrl => {
                let answer = self.prompt.text(INSTALLER_URL_QUESTION, "");
                let answer = answer.trim();
                if answer.is_empty() {
                    LoopState::Done
                } else {
                    LoopState::Inspect(answer.to_string())
                }
            }
            LoopState::Inspect(raw_url) => {
                match self.acquire_installer(&raw_url).await {
                    Ok(installer) => {
                        draft.push_installer(installer);
                        info!(url = %raw_url, "Installer added");
                    }
                    Err(e) => {
                        let reason = format!("{:#}", e);
                        error!(url = %raw_url, %reason, "Couldn't process installer URL");
                    }
                }
                LoopState::AskMore
            }
            LoopState::Done => LoopState::Done,
        }
    }

    async fn acquire_primary(&self, url: &Url) -> Result<ManifestBuilder> {
        info!(%url, "Inspecting primary installer");
        let bundle = self
            .inspector
            .inspect(url)
            .await
            .with_context(|| format!("Failed to inspect {}", url))?;

        anyhow::ensure!(
            !bundle.installers.is_empty(),
            "No installer was found at {}",
            url
        );

        let mut draft = bundle.package;
        anyhow::ensure!(
            draft.installers().is_empty(),
            "Inspection returned installers outside of the installer list"
        );

        for mut installer in bundle.installers {
            self.installer_composer.compose(&mut installer)?;
            draft.push_installer(installer);
        }

        self.manifest_composer.compose(&mut draft, true)?;
        Ok(draft)
    }

    async fn acquire_installer(&self, raw_url: &str) -> Result<InstallerBuilder> {
        let url = parse_download_url(raw_url)?;

        let mut installer = self
            .inspector
            .inspect_installer(&url)
            .await
            .with_context(|| format!("Failed to inspect {}", url))?;

        self.installer_composer.compose(&mut installer)?;
        Ok(installer)
    }

    async fn submit(&self, draft: &ManifestBuilder) -> SubmissionOutcome {
        if !self.prompt.confirm(SUBMIT_QUESTION, true) {
            info!("Submission skipped");
            return SubmissionOutcome::Declined;
        }

        match self.submission.submit(draft).await {
            Ok(response) => {
                info!("Thank you for your submission.");
                info!("{}", response.message);
                SubmissionOutcome::Submitted(response)
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                error!(%reason, "Couldn't submit manifest");
                SubmissionOutcome::Failed(reason)
            }
        }
    }
}
