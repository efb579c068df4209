use crate::types::metadata::{is_valid_package_id, is_valid_sha256};
use crate::PackageManifest;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ManifestValidator;

impl ManifestValidator {
    pub fn validate(manifest: &PackageManifest) -> ValidationResult {
        let mut result = ValidationResult::new();

        Self::validate_identity(manifest, &mut result);
        Self::validate_recommended_fields(manifest, &mut result);
        Self::validate_installers(manifest, &mut result);

        result
    }

    fn validate_identity(manifest: &PackageManifest, result: &mut ValidationResult) {
        if !is_valid_package_id(&manifest.id) {
            result.add_error(
                "id",
                format!(
                    "'{}' is not a valid package id. Use lowercase letters and digits separated by '-', '.' or '_'",
                    manifest.id
                ),
            );
        }

        if manifest.name.trim().is_empty() {
            result.add_error("name", "Package name must not be empty");
        }
    }

    fn validate_recommended_fields(manifest: &PackageManifest, result: &mut ValidationResult) {
        if manifest.version.is_none() {
            result.add_warning(
                "version",
                "RECOMMENDED: Add 'version' so the manifest can be matched against updates",
            );
        }

        if manifest.home.is_none() {
            result.add_warning("home", "RECOMMENDED: Add 'home' pointing to the product homepage");
        }

        if manifest.license.is_none() {
            result.add_warning("license", "RECOMMENDED: Add 'license'");
        }
    }

    fn validate_installers(manifest: &PackageManifest, result: &mut ValidationResult) {
        if manifest.installers.is_empty() {
            result.add_error("installers", "At least one installer is required");
            return;
        }

        let mut locations = HashSet::new();
        let mut architectures = HashSet::new();

        for (index, installer) in manifest.installers.iter().enumerate() {
            let field = format!("installers[{}]", index);

            if !locations.insert(installer.location.as_str()) {
                result.add_error(
                    format!("{}.location", field),
                    format!("Duplicate installer location {}", installer.location),
                );
            }

            match installer.location.scheme() {
                "https" => {}
                "http" => result.add_warning(
                    format!("{}.location", field),
                    "Installer is downloaded over plain http",
                ),
                other => result.add_error(
                    format!("{}.location", field),
                    format!("Unsupported download scheme '{}'", other),
                ),
            }

            if let Some(hash) = &installer.sha256 {
                if !is_valid_sha256(hash) {
                    result.add_error(
                        format!("{}.sha256", field),
                        "sha256 must be 64 hexadecimal characters",
                    );
                }
            }

            let variant = (installer.architecture, installer.min_os_version.clone());
            if !architectures.insert(variant) {
                result.add_warning(
                    format!("{}.architecture", field),
                    format!(
                        "Another installer already targets {} with the same minimum OS version",
                        installer.architecture
                    ),
                );
            }
        }
    }
}
