use anyhow::{bail, Result};
use domain::{parse_download_url, ComposeManifest, Prompt};
use pkgsmith_manifest::{is_valid_package_id, package_id_from_name, ManifestBuilder};
use std::sync::Arc;
use tracing::warn;

/// Fills in package metadata, offering whatever inspection guessed as defaults.
pub struct InteractiveManifestComposer {
    prompt: Arc<dyn Prompt>,
}

impl InteractiveManifestComposer {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }

    fn ask(&self, question: &str, current: &Option<String>) -> Option<String> {
        let answer = self
            .prompt
            .text(question, current.as_deref().unwrap_or_default());
        Some(answer.trim().to_string()).filter(|a| !a.is_empty())
    }
}

impl ComposeManifest for InteractiveManifestComposer {
    fn compose(&self, draft: &mut ManifestBuilder, fresh: bool) -> Result<()> {
        if draft.installers().is_empty() {
            bail!("Manifest has no installers");
        }

        if fresh || draft.name.is_none() {
            draft.name = self.ask("Package name", &draft.name);
        }
        let Some(name) = draft.name.clone() else {
            bail!("A package name is required");
        };

        let id_is_valid = draft.id.as_deref().is_some_and(is_valid_package_id);
        if fresh || !id_is_valid {
            let suggested = if id_is_valid {
                draft.id.clone()
            } else {
                Some(package_id_from_name(&name))
            };
            draft.id = self.ask("Package id", &suggested);
        }
        match draft.id.as_deref() {
            Some(id) if is_valid_package_id(id) => {}
            Some(id) => bail!(
                "Invalid package id '{}'. Use lowercase letters and digits separated by '-', '.' or '_'",
                id
            ),
            None => bail!("A package id is required"),
        }

        if fresh {
            draft.version = self.ask("Version", &draft.version);

            let home = draft.home.as_ref().map(|u| u.to_string());
            draft.home = match self.ask("Home page URL", &home) {
                Some(raw) => match parse_download_url(&raw) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        warn!(%e, "Ignoring home page");
                        None
                    }
                },
                None => None,
            };

            draft.license = self.ask("License", &draft.license);
        }

        Ok(())
    }
}
