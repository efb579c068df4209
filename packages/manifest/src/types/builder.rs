use crate::types::metadata::{is_valid_package_id, is_valid_sha256};
use crate::{Architecture, Installer, InstallerKind, PackageManifest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Manifest is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid package id '{0}'. Use lowercase letters and digits separated by '-', '.' or '_'")]
    InvalidId(String),

    #[error("Manifest has no installers")]
    NoInstallers,

    #[error("Installer #{index} is missing required field '{field}'")]
    MissingInstallerField { index: usize, field: &'static str },

    #[error("Installer #{index} has a malformed sha256 '{hash}'")]
    InvalidHash { index: usize, hash: String },
}

/// In-progress installer description.
///
/// Inspection fills in whatever it can detect, composition fills the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct InstallerBuilder {
    #[serde(default)]
    pub location: Option<Url>,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(default)]
    pub kind: Option<InstallerKind>,
    #[serde(default)]
    pub architecture: Option<Architecture>,
    #[serde(default)]
    pub silent_args: Option<String>,
    #[serde(default)]
    pub min_os_version: Option<String>,
}

impl InstallerBuilder {
    pub fn new(location: Url) -> Self {
        Self {
            location: Some(location),
            ..Default::default()
        }
    }

    fn build_at(&self, index: usize) -> Result<Installer, BuildError> {
        let missing = |field| BuildError::MissingInstallerField { index, field };

        if let Some(hash) = &self.sha256 {
            if !is_valid_sha256(hash) {
                return Err(BuildError::InvalidHash {
                    index,
                    hash: hash.clone(),
                });
            }
        }

        Ok(Installer {
            location: self.location.clone().ok_or_else(|| missing("location"))?,
            sha256: self.sha256.as_ref().map(|h| h.to_ascii_lowercase()),
            kind: self.kind.ok_or_else(|| missing("kind"))?,
            architecture: self.architecture.ok_or_else(|| missing("architecture"))?,
            silent_args: non_blank(&self.silent_args),
            min_os_version: non_blank(&self.min_os_version),
        })
    }

    pub fn build(&self) -> Result<Installer, BuildError> {
        self.build_at(0)
    }
}

/// The mutable manifest draft.
///
/// Installers can only be appended, and keep the order they were added in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ManifestBuilder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub home: Option<Url>,
    #[serde(default)]
    pub repository: Option<Url>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    installers: Vec<InstallerBuilder>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn installers(&self) -> &[InstallerBuilder] {
        &self.installers
    }

    pub fn push_installer(&mut self, installer: InstallerBuilder) {
        self.installers.push(installer);
    }

    pub fn build(&self) -> Result<PackageManifest, BuildError> {
        let id = non_blank(&self.id).ok_or(BuildError::MissingField("id"))?;
        if !is_valid_package_id(&id) {
            return Err(BuildError::InvalidId(id));
        }

        let name = non_blank(&self.name).ok_or(BuildError::MissingField("name"))?;

        if self.installers.is_empty() {
            return Err(BuildError::NoInstallers);
        }

        let installers = self
            .installers
            .iter()
            .enumerate()
            .map(|(index, installer)| installer.build_at(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PackageManifest {
            id,
            name,
            version: non_blank(&self.version),
            home: self.home.clone(),
            repository: self.repository.clone(),
            license: non_blank(&self.license),
            description: non_blank(&self.description),
            tags: self.tags.clone(),
            installers,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
