//! Interactive composition of inspected installers and package metadata.

pub mod installer;
pub mod manifest;

pub use installer::InteractiveInstallerComposer;
pub use manifest::InteractiveManifestComposer;
