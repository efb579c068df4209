use anyhow::Result;
use clap::Args;
use infrastructure::FsManifestStore;
use pkgsmith_manifest::{ManifestValidator, ValidationLevel};
use std::path::PathBuf;

use crate::app::error::CliError;
use crate::ui::Theme;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Path to a manifest file (.yaml, .yml or .json)
    pub path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(&self) -> Result<()> {
        let manifest = FsManifestStore::load(&self.path)
            .map_err(|e| CliError::Manifest(format!("{:#}", e)))?;
        let result = ManifestValidator::validate(&manifest);

        for issue in &result.issues {
            let level = match issue.level {
                ValidationLevel::Error => Theme::error("error"),
                ValidationLevel::Warning => Theme::warning("warning"),
            };
            println!("{} {}: {}", level, Theme::bold(&issue.field), issue.message);
        }

        if !result.valid {
            let errors = result
                .issues
                .iter()
                .filter(|i| i.level == ValidationLevel::Error)
                .count();
            return Err(CliError::Validation(format!(
                "{} has {} error(s)",
                self.path.display(),
                errors
            ))
            .into());
        }

        println!(
            "{} {} ({} installer(s))",
            Theme::success("✔"),
            manifest.id,
            manifest.installers.len()
        );
        Ok(())
    }
}
