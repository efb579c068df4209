use pkgsmith_manifest::{ManifestBuilder, PackageManifest};
use std::path::PathBuf;

/// Displays and durably stores manifests.
pub trait ManifestStore: Send + Sync {
    fn preview(&self, manifest: &PackageManifest);

    /// Writes the draft and returns where it was written.
    fn persist(&self, draft: &ManifestBuilder) -> anyhow::Result<PathBuf>;
}
