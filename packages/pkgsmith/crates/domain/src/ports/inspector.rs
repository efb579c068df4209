use async_trait::async_trait;
use pkgsmith_manifest::{InstallerBuilder, ManifestBuilder};
use serde::{Deserialize, Serialize};
use url::Url;

/// Everything inspection learned about a primary download.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InspectionBundle {
    /// Package metadata guessed from the download. Carries no installers.
    #[serde(default)]
    pub package: ManifestBuilder,

    /// Installer variants found in the download.
    #[serde(default)]
    pub installers: Vec<InstallerBuilder>,
}

/// Examines installer downloads.
#[async_trait]
pub trait InstallerInspector: Send + Sync {
    /// Inspects the primary download of a new manifest.
    async fn inspect(&self, url: &Url) -> anyhow::Result<InspectionBundle>;

    /// Inspects an additional installer variant for an existing manifest.
    async fn inspect_installer(&self, url: &Url) -> anyhow::Result<InstallerBuilder>;
}
