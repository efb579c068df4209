pub mod types;
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// A finished package manifest.
///
/// This is the immutable form produced by [`ManifestBuilder::build`]. It is what gets
/// previewed, written to disk and sent for review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PackageManifest {
    /// Unique package identifier (e.g. `vlc` or `7zip.7zip`).
    pub id: String,

    /// Human-readable display name.
    pub name: String,

    /// Version of the packaged software. Free-form, installers rarely follow SemVer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Product homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<Url>,

    /// Source code repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Url>,

    /// SPDX license identifier or license name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// A short description of the software.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Installer variants, primary installer first.
    pub installers: Vec<Installer>,
}

impl PackageManifest {
    /// The first installer added to the manifest.
    pub fn primary_installer(&self) -> Option<&Installer> {
        self.installers.first()
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// JSON Schema describing [`PackageManifest`].
pub fn manifest_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(PackageManifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
id: example-app
name: Example App
version: 2.4.1
home: https://example.com/
installers:
  - location: https://example.com/app-x64.exe
    kind: nsis
    architecture: x64
    silent_args: /S
"#;

    #[test]
    fn test_manifest_from_yaml() {
        let manifest = PackageManifest::from_yaml(SAMPLE).unwrap();

        assert_eq!(manifest.id, "example-app");
        assert_eq!(manifest.version.as_deref(), Some("2.4.1"));
        assert_eq!(manifest.installers.len(), 1);

        let primary = manifest.primary_installer().unwrap();
        assert_eq!(primary.kind, InstallerKind::Nsis);
        assert_eq!(primary.architecture, Architecture::X64);
        assert_eq!(primary.silent_args.as_deref(), Some("/S"));
    }

    #[test]
    fn test_manifest_rejects_unknown_fields() {
        let yaml = format!("{}\nunexpected: true\n", SAMPLE.trim_end());
        assert!(PackageManifest::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let schema = serde_json::to_value(manifest_schema()).unwrap();
        let required = schema["required"].as_array().unwrap();

        assert!(required.contains(&serde_json::json!("id")));
        assert!(required.contains(&serde_json::json!("installers")));
    }
}
