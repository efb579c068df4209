//! Recognizes installer technologies from downloaded bytes.

use pkgsmith_manifest::{Architecture, InstallerKind};

const HEAD_LEN: usize = 4096;

const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Product strings embedded by installer builders, checked in this order.
const MARKERS: &[(InstallerKind, &[u8])] = &[
    (InstallerKind::Inno, b"Inno Setup"),
    (InstallerKind::Nsis, b"Nullsoft"),
    (InstallerKind::InstallShield, b"InstallShield"),
    (InstallerKind::Wix, b".wixburn"),
    (InstallerKind::Squirrel, b"SquirrelTemp"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Windows PE executable.
    Executable,
    /// OLE compound document, the container of MSI packages.
    Compound,
    Zip,
    Unknown,
}

/// Incrementally scans a download as it streams in.
#[derive(Debug, Default)]
pub struct ContentProbe {
    head: Vec<u8>,
    overlap: Vec<u8>,
    found: Vec<InstallerKind>,
    len: u64,
}

impl ContentProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        self.len += chunk.len() as u64;

        if self.head.len() < HEAD_LEN {
            let take = (HEAD_LEN - self.head.len()).min(chunk.len());
            self.head.extend_from_slice(&chunk[..take]);
        }

        // Markers may straddle chunk boundaries.
        let mut window = std::mem::take(&mut self.overlap);
        window.extend_from_slice(chunk);

        for (kind, marker) in MARKERS {
            if !self.found.contains(kind) && contains(&window, marker) {
                self.found.push(*kind);
            }
        }

        let keep = max_marker_len().saturating_sub(1).min(window.len());
        self.overlap = window[window.len() - keep..].to_vec();
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn format(&self) -> FileFormat {
        if self.head.starts_with(b"MZ") {
            FileFormat::Executable
        } else if self.head.starts_with(OLE_MAGIC) {
            FileFormat::Compound
        } else if self.head.starts_with(ZIP_MAGIC) {
            FileFormat::Zip
        } else {
            FileFormat::Unknown
        }
    }

    /// The highest-priority installer technology whose marker was seen.
    pub fn marker_kind(&self) -> Option<InstallerKind> {
        MARKERS
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| self.found.contains(kind))
    }

    /// CPU architecture from the PE header, if the download is an executable.
    pub fn pe_machine(&self) -> Option<Architecture> {
        if self.format() != FileFormat::Executable {
            return None;
        }

        let offset_bytes = self.head.get(0x3C..0x40)?;
        let offset = u32::from_le_bytes(offset_bytes.try_into().ok()?) as usize;

        if self.head.get(offset..offset + 4)? != b"PE\0\0" {
            return None;
        }

        let machine_bytes = self.head.get(offset + 4..offset + 6)?;
        match u16::from_le_bytes(machine_bytes.try_into().ok()?) {
            0x014C => Some(Architecture::X86),
            0x8664 => Some(Architecture::X64),
            0x01C4 => Some(Architecture::Arm),
            0xAA64 => Some(Architecture::Arm64),
            _ => None,
        }
    }
}

/// Decides the installer technology from the file name and probed content.
///
/// Returns `None` when the download is not an installer at all.
pub fn classify(file_name: &str, probe: &ContentProbe) -> Option<InstallerKind> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match probe.format() {
        FileFormat::Compound => Some(InstallerKind::Msi),
        FileFormat::Zip => match extension.as_str() {
            "msix" | "appx" | "msixbundle" | "appxbundle" => Some(InstallerKind::Msix),
            _ => Some(InstallerKind::Zip),
        },
        FileFormat::Executable => Some(probe.marker_kind().unwrap_or(InstallerKind::Custom)),
        FileFormat::Unknown => None,
    }
}

fn max_marker_len() -> usize {
    MARKERS.iter().map(|(_, m)| m.len()).max().unwrap_or(0)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
