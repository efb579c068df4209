use anyhow::{bail, Context, Result};
use domain::{ComposeInstaller, Prompt};
use pkgsmith_manifest::{is_valid_sha256, Architecture, InstallerBuilder, InstallerKind};
use std::sync::Arc;
use tracing::debug;

/// Completes installer descriptions, asking the operator for anything inspection
/// could not detect.
pub struct InteractiveInstallerComposer {
    prompt: Arc<dyn Prompt>,
}

impl InteractiveInstallerComposer {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }

    fn ask_kind(&self) -> InstallerKind {
        let options: Vec<String> = InstallerKind::ALL
            .iter()
            .map(|k| k.label().to_string())
            .collect();
        let custom = InstallerKind::ALL.len() - 1;
        let choice = self
            .prompt
            .select("Installer type couldn't be detected. Select it:", &options, custom);
        InstallerKind::ALL
            .get(choice)
            .copied()
            .unwrap_or(InstallerKind::Custom)
    }

    fn ask_architecture(&self) -> Architecture {
        let options: Vec<String> = Architecture::ALL
            .iter()
            .map(|a| a.as_str().to_string())
            .collect();
        let choice = self
            .prompt
            .select("Target architecture couldn't be detected. Select it:", &options, 0);
        Architecture::ALL
            .get(choice)
            .copied()
            .unwrap_or(Architecture::X64)
    }
}

impl ComposeInstaller for InteractiveInstallerComposer {
    fn compose(&self, installer: &mut InstallerBuilder) -> Result<()> {
        let location = installer
            .location
            .as_ref()
            .context("Installer has no download location")?;

        if !matches!(location.scheme(), "http" | "https") {
            bail!(
                "Unsupported download scheme '{}' for {}",
                location.scheme(),
                location
            );
        }

        if let Some(hash) = &installer.sha256 {
            if !is_valid_sha256(hash) {
                bail!("Inspection reported a malformed sha256 '{}'", hash);
            }
        }

        let kind = match installer.kind {
            Some(kind) => kind,
            None => *installer.kind.insert(self.ask_kind()),
        };

        if installer.architecture.is_none() {
            installer.architecture = Some(self.ask_architecture());
        }

        if installer.silent_args.is_none() {
            installer.silent_args = match kind.default_silent_args() {
                Some(args) => Some(args.to_string()),
                None if kind == InstallerKind::Custom => {
                    let args = self
                        .prompt
                        .text("Silent install arguments (leave blank if none)", "");
                    Some(args.trim().to_string()).filter(|a| !a.is_empty())
                }
                None => None,
            };
        }

        debug!(?installer, "Installer composed");
        installer.build().context("Installer is incomplete")?;
        Ok(())
    }
}
