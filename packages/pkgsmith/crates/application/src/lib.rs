pub mod compose;
pub mod create_manifest;
pub mod error;

pub use compose::{InteractiveInstallerComposer, InteractiveManifestComposer};
pub use create_manifest::{
    CreateManifestReport, CreateManifestService, LoopState, SubmissionOutcome,
};
pub use error::CreateManifestError;
