pub mod download_url;
pub mod ports;

pub use download_url::{parse_download_url, InvalidDownloadUrl};
pub use ports::composer::{ComposeInstaller, ComposeManifest};
pub use ports::inspector::{InspectionBundle, InstallerInspector};
pub use ports::prompt::Prompt;
pub use ports::store::ManifestStore;
pub use ports::submission::{SubmissionClient, SubmissionResponse};

pub use pkgsmith_manifest as manifest;
