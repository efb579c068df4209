use pkgsmith_manifest::{InstallerBuilder, ManifestBuilder};

/// Normalizes an inspected installer into a manifest-ready record.
pub trait ComposeInstaller: Send + Sync {
    fn compose(&self, installer: &mut InstallerBuilder) -> anyhow::Result<()>;
}

/// Fills in package-level metadata of a draft.
pub trait ComposeManifest: Send + Sync {
    /// `fresh` is set when the draft was just created from a primary installer.
    fn compose(&self, draft: &mut ManifestBuilder, fresh: bool) -> anyhow::Result<()>;
}
