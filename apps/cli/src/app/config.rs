use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::app::error::CliError;

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// How installers get inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InspectorMode {
    /// Download and probe installers on this machine.
    Local,
    /// Ask the inspection service.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the inspection and submission service.
    pub api_url: Url,
    /// Where manifests are written.
    pub manifests_dir: PathBuf,
    pub inspector: InspectorMode,
    pub request_timeout_secs: u64,
    pub max_download_mb: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            manifests_dir: dirs::home_dir()
                .map(|home| home.join(".pkgsmith").join("manifests"))
                .unwrap_or_else(|| PathBuf::from("manifests")),
            inspector: InspectorMode::Local,
            request_timeout_secs: 300,
            max_download_mb: 1024,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pkgsmith").join("config.toml"))
    }

    /// Defaults, then the config file, then `PKGSMITH_*` environment variables.
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{:?}: {}", path, e)))
    }

    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), CliError> {
        if let Some(raw) = lookup("PKGSMITH_API_URL") {
            self.api_url = parse_api_url(&raw)?;
        }

        if let Some(dir) = lookup("PKGSMITH_MANIFESTS_DIR") {
            self.manifests_dir = PathBuf::from(dir);
        }

        if let Some(mode) = lookup("PKGSMITH_INSPECTOR") {
            self.inspector = InspectorMode::from_str(&mode, true).map_err(|_| {
                CliError::Config(format!(
                    "PKGSMITH_INSPECTOR must be 'local' or 'remote', got '{}'",
                    mode
                ))
            })?;
        }

        if let Some(secs) = lookup("PKGSMITH_TIMEOUT_SECS") {
            self.request_timeout_secs = secs.trim().parse().map_err(|_| {
                CliError::Config(format!("PKGSMITH_TIMEOUT_SECS is not a number: '{}'", secs))
            })?;
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn max_download_bytes(&self) -> u64 {
        self.max_download_mb.saturating_mul(1024 * 1024)
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, CliError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CliError::Config(format!("Invalid API URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::Config(format!(
            "API URL must use http or https: '{}'",
            raw
        )));
    }
    Ok(url)
}
