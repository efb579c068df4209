use anyhow::Result;
use application::{
    CreateManifestService, InteractiveInstallerComposer, InteractiveManifestComposer,
    SubmissionOutcome,
};
use clap::Args;
use cliclack::{intro, log, outro};
use domain::{InstallerInspector, Prompt};
use infrastructure::http::build_client;
use infrastructure::{FsManifestStore, HttpSubmissionClient, LocalInspector, RemoteInspector};
use std::sync::Arc;

use crate::app::config::{InspectorMode, Settings};
use crate::app::error::CliError;
use crate::ui::components::TerminalPrompt;
use crate::ui::progress::{ProgressInspector, ProgressSubmission};
use crate::ui::Theme;
use crate::utils::auth::resolve_token;

#[derive(Args, Debug)]
pub struct CreateCommand {
    /// Direct download URL of the primary installer
    pub url: String,
}

impl CreateCommand {
    pub async fn execute(&self, settings: &Settings) -> Result<()> {
        intro(console::style("pkgsmith create").bold())?;

        let service = Self::service(settings)?;
        let report = service.execute(&self.url).await.map_err(CliError::from)?;

        log::success(format!(
            "Manifest saved to {}",
            Theme::muted(report.saved_to.display())
        ))?;

        if report.failed_installers > 0 {
            log::warning(format!(
                "{} additional installer(s) could not be added, see the errors above",
                report.failed_installers
            ))?;
        }

        match report.submission {
            SubmissionOutcome::Declined => {
                outro("Manifest created. It was not submitted for review.")?;
            }
            SubmissionOutcome::Submitted(response) => {
                log::success("Thank you for your submission.")?;
                log::info(&response.message)?;
                if let Some(review_url) = &response.review_url {
                    log::info(format!("Follow the review at {}", review_url))?;
                }
                outro(format!(
                    "{} submitted for review",
                    Theme::primary(&report.manifest.id)
                ))?;
            }
            SubmissionOutcome::Failed(reason) => {
                log::error(format!("Couldn't submit manifest: {}", reason))?;
                outro("Manifest created, but the submission failed.")?;
            }
        }

        Ok(())
    }

    fn service(settings: &Settings) -> Result<CreateManifestService> {
        let client = build_client(settings.request_timeout())?;
        let prompt: Arc<dyn Prompt> = Arc::new(TerminalPrompt);

        let inspector: Arc<dyn InstallerInspector> = match settings.inspector {
            InspectorMode::Local => Arc::new(LocalInspector::new(
                client.clone(),
                settings.max_download_bytes(),
            )),
            InspectorMode::Remote => Arc::new(RemoteInspector::new(
                client.clone(),
                settings.api_url.clone(),
            )),
        };

        let submission = HttpSubmissionClient::new(
            client,
            settings.api_url.clone(),
            resolve_token(&settings.api_url),
        );

        Ok(CreateManifestService::new(
            Arc::new(ProgressInspector::new(inspector)),
            Arc::new(InteractiveInstallerComposer::new(prompt.clone())),
            Arc::new(InteractiveManifestComposer::new(prompt.clone())),
            prompt,
            Arc::new(FsManifestStore::new(&settings.manifests_dir)),
            Arc::new(ProgressSubmission::new(Arc::new(submission))),
        ))
    }
}
