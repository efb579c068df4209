use anyhow::{Context, Result};
use domain::ManifestStore;
use pkgsmith_manifest::{ManifestBuilder, PackageManifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keeps manifests as `<root>/<id>/<id>.yaml`.
pub struct FsManifestStore {
    root: PathBuf,
}

impl FsManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self, manifest: &PackageManifest) -> PathBuf {
        self.root
            .join(&manifest.id)
            .join(format!("{}.yaml", manifest.id))
    }

    pub fn load(path: &Path) -> Result<PackageManifest> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {:?}", path))?;

        match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
            "json" => serde_json::from_str(&content).context("Failed to parse JSON manifest"),
            "yaml" | "yml" => {
                PackageManifest::from_yaml(&content).context("Failed to parse YAML manifest")
            }
            other => anyhow::bail!("Unsupported manifest format: {}", other),
        }
    }
}

/// Plain-text preview: a one-line summary followed by the YAML document.
pub fn render_preview(manifest: &PackageManifest) -> Result<String> {
    let yaml = manifest.to_yaml().context("Failed to serialize manifest")?;
    let count = manifest.installers.len();

    Ok(format!(
        "{} {} ({} installer{})\n\n{}",
        manifest.id,
        manifest.version.as_deref().unwrap_or("latest"),
        count,
        if count == 1 { "" } else { "s" },
        yaml
    ))
}

impl ManifestStore for FsManifestStore {
    fn preview(&self, manifest: &PackageManifest) {
        match render_preview(manifest) {
            Ok(preview) => {
                let (summary, body) = preview.split_once('\n').unwrap_or((preview.as_str(), ""));
                println!("\n{}", console::style(summary).cyan().bold());
                println!("{}", console::style(body.trim_end()).dim());
            }
            Err(e) => warn!(error = %e, "Couldn't render manifest preview"),
        }
    }

    fn persist(&self, draft: &ManifestBuilder) -> Result<PathBuf> {
        let manifest = draft.build().context("Manifest is incomplete")?;
        let path = self.manifest_path(&manifest);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {:?}", dir))?;
        }

        let content = manifest.to_yaml().context("Failed to serialize manifest")?;
        fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

        debug!(path = %path.display(), "Manifest persisted");
        Ok(path)
    }
}
