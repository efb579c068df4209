use domain::InvalidDownloadUrl;
use pkgsmith_manifest::BuildError;
use thiserror::Error;

/// Failures that end a manifest creation run.
///
/// Problems with additional installers or with submission are not represented here;
/// they are logged and the run carries on.
#[derive(Error, Debug)]
pub enum CreateManifestError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidDownloadUrl),

    #[error("Couldn't process the primary installer: {0:#}")]
    PrimaryAcquisition(anyhow::Error),

    #[error("Couldn't finalize the manifest: {0}")]
    Build(#[from] BuildError),

    #[error("Couldn't write the manifest: {0:#}")]
    Persist(anyhow::Error),
}
