use application::CreateManifestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Inspection error: {0}")]
    Inspection(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<CreateManifestError> for CliError {
    fn from(err: CreateManifestError) -> Self {
        match err {
            CreateManifestError::InvalidInput(e) => CliError::InvalidInput(e.to_string()),
            CreateManifestError::PrimaryAcquisition(e) => CliError::Inspection(format!("{:#}", e)),
            CreateManifestError::Build(e) => CliError::Manifest(e.to_string()),
            CreateManifestError::Persist(e) => CliError::Storage(format!("{:#}", e)),
        }
    }
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Check ~/.config/pkgsmith/config.toml and the PKGSMITH_* environment variables."
                    .to_string(),
            ),
            CliError::InvalidInput(_) => Some(
                "Pass the direct download link of the installer, e.g. https://example.com/setup.exe"
                    .to_string(),
            ),
            CliError::Inspection(_) => Some(
                "Make sure the URL points at the installer file itself, or try --inspector remote."
                    .to_string(),
            ),
            CliError::Storage(_) => Some(
                "Check that the manifests directory is writable (--manifests-dir).".to_string(),
            ),
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::InvalidDownloadUrl;

    #[test]
    fn test_invalid_input_keeps_message() {
        let err: CliError =
            CreateManifestError::InvalidInput(InvalidDownloadUrl("ftp:/x".into())).into();

        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("'ftp:/x'"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_persist_failure_maps_to_storage() {
        let err: CliError = CreateManifestError::Persist(anyhow::anyhow!("disk full")).into();

        assert!(matches!(err, CliError::Storage(ref m) if m.contains("disk full")));
    }
}
