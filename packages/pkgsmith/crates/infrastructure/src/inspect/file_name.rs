//! Hints carried by installer file names (`vlc-3.0.20-win64.exe`).

use pkgsmith_manifest::Architecture;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use url::Url;

const NOISE: &[&str] = &[
    "setup", "installer", "install", "win", "windows", "x64", "x86", "amd64", "win64", "win32",
    "arm64", "aarch64", "arm", "i386", "i686", "ia32", "64bit", "32bit", "64", "32", "full",
    "offline", "release",
];

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[^0-9a-z.])v?(\d+(?:\.\d+){1,3})(?:[^0-9]|$)")
            .expect("version pattern is valid")
    })
}

/// Last path segment of a download URL, percent-decoded.
pub fn from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.rev().find(|s| !s.is_empty())?;
    let decoded = urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string());
    Some(decoded).filter(|s| !s.is_empty())
}

pub fn architecture(file_name: &str) -> Option<Architecture> {
    let lower = file_name.to_ascii_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .collect();

    // Most specific first.
    if tokens.iter().any(|t| matches!(*t, "arm64" | "aarch64")) {
        Some(Architecture::Arm64)
    } else if lower.contains("x86_64")
        || lower.contains("x86-64")
        || tokens
            .iter()
            .any(|t| matches!(*t, "x64" | "amd64" | "win64" | "64bit"))
    {
        Some(Architecture::X64)
    } else if tokens
        .iter()
        .any(|t| matches!(*t, "x86" | "win32" | "i386" | "i686" | "ia32" | "32bit"))
    {
        Some(Architecture::X86)
    } else if tokens.iter().any(|t| matches!(*t, "arm" | "armv7")) {
        Some(Architecture::Arm)
    } else {
        None
    }
}

pub fn version(file_name: &str) -> Option<String> {
    let stem = stem(file_name);
    version_pattern()
        .captures(stem)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Display name guess: the file stem without version, architecture and setup noise.
pub fn display_name(file_name: &str) -> Option<String> {
    let stem = stem(file_name);
    let without_version = match version_pattern().find(stem) {
        Some(m) => format!("{} {}", &stem[..m.start()], &stem[m.end()..]),
        None => stem.to_string(),
    };

    let words: Vec<&str> = without_version
        .split(|c: char| matches!(c, '-' | '_' | '.' | ' ' | '+'))
        .filter(|w| !w.is_empty())
        .filter(|w| !NOISE.contains(&w.to_ascii_lowercase().as_str()))
        .collect();

    Some(words.join(" ")).filter(|n| !n.is_empty())
}

fn stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphabetic()) => {
            stem
        }
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_url() {
        let url = Url::parse("https://example.com/dl/Example%20App%20Setup%202.1.exe?x=1").unwrap();
        assert_eq!(from_url(&url).as_deref(), Some("Example App Setup 2.1.exe"));

        let url = Url::parse("https://example.com/get/%E2%9C%93-tool%2Bx64.zip").unwrap();
        assert_eq!(from_url(&url).as_deref(), Some("✓-tool+x64.zip"));

        // Invalid UTF-8 after decoding keeps the raw segment.
        let url = Url::parse("https://example.com/get/app%FF.exe").unwrap();
        assert_eq!(from_url(&url).as_deref(), Some("app%FF.exe"));

        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(from_url(&url), None);
    }

    #[test]
    fn test_architecture_tokens() {
        assert_eq!(architecture("vlc-3.0.20-win64.exe"), Some(Architecture::X64));
        assert_eq!(architecture("app_x86_64.msi"), Some(Architecture::X64));
        assert_eq!(architecture("App-arm64-setup.exe"), Some(Architecture::Arm64));
        assert_eq!(architecture("tool-win32.zip"), Some(Architecture::X86));
        assert_eq!(architecture("thing.armv7.exe"), Some(Architecture::Arm));
        assert_eq!(architecture("setup.exe"), None);
        assert_eq!(architecture("charming.exe"), None);
    }

    #[test]
    fn test_version_from_name() {
        assert_eq!(version("vlc-3.0.20-win64.exe").as_deref(), Some("3.0.20"));
        assert_eq!(version("Firefox Setup 120.0.1.exe").as_deref(), Some("120.0.1"));
        assert_eq!(version("app-v2.4-x64.msi").as_deref(), Some("2.4"));
        assert_eq!(version("app-x86_64.exe"), None);
        assert_eq!(version("setup.exe"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("vlc-3.0.20-win64.exe").as_deref(), Some("vlc"));
        assert_eq!(
            display_name("Firefox Setup 120.0.1.exe").as_deref(),
            Some("Firefox")
        );
        assert_eq!(
            display_name("Example_App-2.1-x64-installer.msi").as_deref(),
            Some("Example App")
        );
        assert_eq!(display_name("app_x86_64.exe").as_deref(), Some("app"));
        assert_eq!(display_name("setup.exe"), None);
    }
}
