use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// One installer variant of a package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Installer {
    /// Absolute download URL of the installer.
    pub location: Url,

    /// Lowercase hex SHA-256 of the downloaded file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,

    pub kind: InstallerKind,

    pub architecture: Architecture,

    /// Arguments that make the installer run unattended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_args: Option<String>,

    /// Minimum operating system version the installer supports (e.g. `10.0.17763`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_os_version: Option<String>,
}

/// Installer technology, which decides how an unattended install is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InstallerKind {
    Msi,
    Msix,
    Nsis,
    Inno,
    InstallShield,
    Squirrel,
    Wix,
    Zip,
    /// A setup executable of unrecognized technology.
    Custom,
}

impl InstallerKind {
    pub const ALL: [InstallerKind; 9] = [
        InstallerKind::Msi,
        InstallerKind::Msix,
        InstallerKind::Nsis,
        InstallerKind::Inno,
        InstallerKind::InstallShield,
        InstallerKind::Squirrel,
        InstallerKind::Wix,
        InstallerKind::Zip,
        InstallerKind::Custom,
    ];

    /// Well-known unattended install arguments for this technology, if any.
    pub fn default_silent_args(&self) -> Option<&'static str> {
        match self {
            InstallerKind::Msi => Some("/qn /norestart"),
            InstallerKind::Nsis => Some("/S"),
            InstallerKind::Inno => Some("/VERYSILENT /SUPPRESSMSGBOXES /NORESTART"),
            InstallerKind::InstallShield => Some("/s"),
            InstallerKind::Squirrel => Some("--silent"),
            InstallerKind::Wix => Some("/quiet /norestart"),
            InstallerKind::Msix | InstallerKind::Zip | InstallerKind::Custom => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallerKind::Msi => "MSI",
            InstallerKind::Msix => "MSIX / AppX",
            InstallerKind::Nsis => "Nullsoft (NSIS)",
            InstallerKind::Inno => "Inno Setup",
            InstallerKind::InstallShield => "InstallShield",
            InstallerKind::Squirrel => "Squirrel",
            InstallerKind::Wix => "WiX Burn bundle",
            InstallerKind::Zip => "ZIP archive",
            InstallerKind::Custom => "Other executable",
        }
    }
}

impl fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CPU architecture an installer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[serde(alias = "i386", alias = "x32")]
    X86,
    #[serde(alias = "amd64", alias = "x86_64")]
    X64,
    Arm,
    #[serde(alias = "aarch64")]
    Arm64,
    /// Architecture-neutral installer.
    Any,
}

impl Architecture {
    pub const ALL: [Architecture; 5] = [
        Architecture::X64,
        Architecture::X86,
        Architecture::Arm64,
        Architecture::Arm,
        Architecture::Any,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X64 => "x64",
            Architecture::Arm => "arm",
            Architecture::Arm64 => "arm64",
            Architecture::Any => "any",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
