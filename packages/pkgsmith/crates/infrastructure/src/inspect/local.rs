use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use domain::{InspectionBundle, InstallerInspector};
use futures_util::StreamExt;
use pkgsmith_manifest::{Architecture, InstallerBuilder, ManifestBuilder};
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use url::Url;

use super::file_name;
use super::probe::{classify, ContentProbe};
use crate::http::ensure_success;

/// Downloaded bytes summarized, the file itself is not kept.
#[derive(Debug)]
struct Download {
    file_name: String,
    sha256: String,
    probe: ContentProbe,
}

/// Inspects installers by downloading them and probing their content.
pub struct LocalInspector {
    client: reqwest::Client,
    max_download_bytes: u64,
}

impl LocalInspector {
    pub fn new(client: reqwest::Client, max_download_bytes: u64) -> Self {
        Self {
            client,
            max_download_bytes,
        }
    }

    async fn download(&self, url: &Url) -> Result<Download> {
        info!(%url, "Downloading installer");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to download {}", url))?;
        let response = ensure_success(response, "Download").await?;

        if let Some(len) = response.content_length() {
            if len > self.max_download_bytes {
                bail!(
                    "Installer is {} bytes, larger than the {} byte limit",
                    len,
                    self.max_download_bytes
                );
            }
        }

        // Redirect targets usually carry the real file name.
        let file_name = file_name::from_url(response.url())
            .or_else(|| file_name::from_url(url))
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        let mut probe = ContentProbe::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Download interrupted")?;
            hasher.update(&chunk);
            probe.feed(&chunk);

            if probe.len() > self.max_download_bytes {
                bail!(
                    "Installer exceeds the {} byte download limit",
                    self.max_download_bytes
                );
            }
        }

        if probe.is_empty() {
            bail!("Download of {} is empty", url);
        }

        let sha256 = hex::encode(hasher.finalize());
        debug!(%file_name, %sha256, bytes = probe.len(), "Download complete");

        Ok(Download {
            file_name,
            sha256,
            probe,
        })
    }

    fn describe(url: &Url, download: &Download) -> Result<InstallerBuilder> {
        let Some(kind) = classify(&download.file_name, &download.probe) else {
            bail!(
                "{} is not a recognized installer (expected an executable, MSI, MSIX or ZIP file)",
                url
            );
        };

        // 32-bit stubs commonly install 64-bit payloads, so only a non-x86 header decides.
        let architecture = file_name::architecture(&download.file_name).or_else(|| {
            download
                .probe
                .pe_machine()
                .filter(|arch| *arch != Architecture::X86)
        });

        info!(%url, ?kind, ?architecture, "Installer recognized");

        Ok(InstallerBuilder {
            location: Some(url.clone()),
            sha256: Some(download.sha256.clone()),
            kind: Some(kind),
            architecture,
            silent_args: None,
            min_os_version: None,
        })
    }
}

#[async_trait]
impl InstallerInspector for LocalInspector {
    async fn inspect(&self, url: &Url) -> Result<InspectionBundle> {
        let download = self.download(url).await?;
        let installer = Self::describe(url, &download)?;

        let mut package = ManifestBuilder::new();
        package.name = file_name::display_name(&download.file_name);
        package.version = file_name::version(&download.file_name);

        Ok(InspectionBundle {
            package,
            installers: vec![installer],
        })
    }

    async fn inspect_installer(&self, url: &Url) -> Result<InstallerBuilder> {
        let download = self.download(url).await?;
        Self::describe(url, &download)
    }
}
